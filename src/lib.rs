pub mod config;
pub mod modules;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use config::Config;
use services::monitor::{MonitorEngine, PollSchedule};
use services::practicum::{HomeworkSource, PracticumClient};
use services::telegram::{BotTransport, Notifier, TelegramClient};

pub type HomeworkBot = MonitorEngine<PracticumClient, TelegramClient>;

/// Wire the production clients from `config`. The cursor starts at now.
pub fn create_engine(config: &Config) -> HomeworkBot {
    let timeout = Duration::from_secs(config.http_timeout_secs);

    let source = Arc::new(PracticumClient::new(
        config.practicum_token.clone(),
        config.endpoint.clone(),
        timeout,
    ));
    let transport = Arc::new(TelegramClient::new(
        config.telegram_token.clone(),
        config.telegram_api_url.clone(),
        timeout,
    ));

    create_engine_with(config, source, transport)
}

/// Wire an engine around the given clients. Requires a loaded [`Config`],
/// so no engine (and no fetch) exists while a credential is missing.
pub fn create_engine_with<S, T>(config: &Config, source: Arc<S>, transport: Arc<T>) -> MonitorEngine<S, T>
where
    S: HomeworkSource,
    T: BotTransport,
{
    let notifier = Notifier::new(transport, config.telegram_chat_id.clone());
    let schedule = PollSchedule::new(config.retry_period_secs, config.jitter_factor);

    MonitorEngine::new(source, notifier, schedule, chrono::Utc::now().timestamp())
}
