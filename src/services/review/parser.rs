use serde_json::Value;

use crate::modules::homework::schema::{HomeworkStatus, HOMEWORK_NAME_KEY, STATUS_KEY};
use crate::services::review::{validator::json_type, ReviewError};

/// Turn one submission record into the status-change sentence.
pub fn parse_status(homework: &Value) -> Result<String, ReviewError> {
    let record = homework
        .as_object()
        .ok_or(ReviewError::NotAnObject(json_type(homework)))?;

    let name = match record.get(HOMEWORK_NAME_KEY) {
        Some(Value::String(name)) => name.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => return Err(ReviewError::MissingKey(HOMEWORK_NAME_KEY)),
    };

    let status = match record.get(STATUS_KEY) {
        Some(Value::String(code)) => HomeworkStatus::from_code(code)
            .ok_or_else(|| ReviewError::UnknownStatus(code.clone()))?,
        Some(other) => return Err(ReviewError::UnknownStatus(other.to_string())),
        None => return Err(ReviewError::UnknownStatus("<отсутствует>".to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
