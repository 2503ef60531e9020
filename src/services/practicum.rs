use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Source of homework status payloads.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch submissions updated at or after `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PracticumError {
    #[error("Сервис недоступен: {0}")]
    Transport(String),
    #[error("Запрос к {endpoint} с параметром from_date={from_date} вернул код ответа {status}")]
    HttpStatus {
        endpoint: String,
        from_date: i64,
        status: u16,
    },
    #[error("API отклонил запрос: code={code}, error={error}")]
    ApiRejection { code: String, error: String },
    #[error("Ответ API не является корректным JSON: {0}")]
    Decode(String),
}

/// Practicum homework status API client
pub struct PracticumClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: String, endpoint: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            token,
            endpoint,
        }
    }

    /// Use an already configured HTTP client.
    pub fn with_client(client: Client, token: String, endpoint: String) -> Self {
        Self {
            client,
            token,
            endpoint,
        }
    }

    /// GET the statuses endpoint and classify every way it can fail.
    pub async fn get_homework_statuses(&self, from_date: i64) -> Result<Value, PracticumError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PracticumError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PracticumError::HttpStatus {
                endpoint: self.endpoint.clone(),
                from_date,
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PracticumError::Decode(e.to_string()))?;

        check_rejection(&body)?;

        Ok(body)
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError> {
        self.get_homework_statuses(from_date).await
    }
}

/// The API reports some failures with a 200 and a `code`/`error` field.
pub fn check_rejection(body: &Value) -> Result<(), PracticumError> {
    let Some(object) = body.as_object() else {
        return Ok(());
    };

    if !object.contains_key("code") && !object.contains_key("error") {
        return Ok(());
    }

    let field = |key: &str| match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    };

    Err(PracticumError::ApiRejection {
        code: field("code"),
        error: field("error"),
    })
}
