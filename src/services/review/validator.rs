use serde_json::Value;

use crate::modules::homework::schema::HOMEWORKS_KEY;
use crate::services::review::ReviewError;

/// Check the shape of a decoded API payload and return its submissions.
///
/// The list is returned untouched; an empty one is valid here.
pub fn check_response(response: &Value) -> Result<&[Value], ReviewError> {
    let object = response
        .as_object()
        .ok_or(ReviewError::NotAnObject(json_type(response)))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or(ReviewError::MissingKey(HOMEWORKS_KEY))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ReviewError::NotAList(HOMEWORKS_KEY))
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
