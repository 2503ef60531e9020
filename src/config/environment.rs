use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Used by the binary when `LOG_FILE` is unset; an empty value disables the file sink.
pub const DEFAULT_LOG_FILE: &str = "homework_bot.log";

/// Required credentials, in the order they are checked.
pub const TOKEN_NAMES: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_period_secs: u64,
    pub jitter_factor: f64,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `lookup`.
    ///
    /// Every missing credential is logged on its own before the load fails,
    /// so an operator sees all of them at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let [practicum_token, telegram_token, telegram_chat_id] = TOKEN_NAMES.map(required);

        let (practicum_token, telegram_token, telegram_chat_id) =
            match (practicum_token, telegram_token, telegram_chat_id) {
                (Some(practicum), Some(telegram), Some(chat_id)) => (practicum, telegram, chat_id),
                (practicum, telegram, chat_id) => {
                    let present = [practicum.is_some(), telegram.is_some(), chat_id.is_some()];
                    let missing: Vec<&'static str> = TOKEN_NAMES
                        .into_iter()
                        .zip(present)
                        .filter(|(_, present)| !present)
                        .map(|(name, _)| name)
                        .collect();
                    for name in &missing {
                        tracing::error!("Missing required environment variable {}", name);
                    }
                    return Err(ConfigError::MissingCredentials(missing));
                }
            };

        let endpoint = lookup("PRACTICUM_ENDPOINT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let telegram_api_url = lookup("TELEGRAM_API_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let retry_period_secs = positive_secs(
            "RETRY_PERIOD_SECS",
            lookup("RETRY_PERIOD_SECS"),
            DEFAULT_RETRY_PERIOD_SECS,
        )?;
        let http_timeout_secs = positive_secs(
            "HTTP_TIMEOUT_SECS",
            lookup("HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        let jitter_factor: f64 = parse_or("POLL_JITTER", lookup("POLL_JITTER"), 0.0)?;
        if !(0.0..1.0).contains(&jitter_factor) {
            return Err(ConfigError::Invalid {
                name: "POLL_JITTER",
                value: jitter_factor.to_string(),
            });
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api_url,
            retry_period_secs,
            jitter_factor,
            http_timeout_secs,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// Periods and timeouts must be non-zero.
fn positive_secs(name: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match parse_or(name, raw, default)? {
        0 => Err(ConfigError::Invalid {
            name,
            value: "0".to_string(),
        }),
        secs => Ok(secs),
    }
}
