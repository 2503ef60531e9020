use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

use crate::modules::homework::schema::CURRENT_DATE_KEY;
use crate::services::monitor::{CycleError, CycleOutcome, PollSchedule, PollState};
use crate::services::practicum::HomeworkSource;
use crate::services::review::{check_response, parse_status};
use crate::services::telegram::{BotTransport, Notifier};

/// Polls the homework API and reports status changes to the chat.
///
/// A cycle is fetch → validate → parse → notify. Failures in the first
/// three steps become a chat message of their own and go through the same
/// duplicate suppression as status changes, so a recurring fault is
/// reported once.
pub struct MonitorEngine<S: HomeworkSource, T: BotTransport> {
    source: Arc<S>,
    notifier: Notifier<T>,
    schedule: PollSchedule,
    state: PollState,
}

impl<S: HomeworkSource, T: BotTransport> MonitorEngine<S, T> {
    pub fn new(source: Arc<S>, notifier: Notifier<T>, schedule: PollSchedule, cursor: i64) -> Self {
        Self {
            source,
            notifier,
            schedule,
            state: PollState::new(cursor),
        }
    }

    pub fn cursor(&self) -> i64 {
        self.state.cursor
    }

    pub fn last_message(&self) -> &str {
        &self.state.last_message
    }

    /// Start the polling loop. Never returns.
    pub async fn run(&mut self) {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Poll until `shutdown` resolves. Shutdown is observed between cycles,
    /// an in-flight cycle always completes.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            self.run_cycle().await;

            let delay = self.schedule.next_delay();
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping poll loop");
                    return;
                }
            }
        }
    }

    /// Run one cycle without sleeping afterwards.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let message = match self.check_updates().await {
            Ok(Some(message)) => message,
            Ok(None) => {
                tracing::debug!("No new homework statuses since {}", self.state.cursor);
                return CycleOutcome::NoUpdates;
            }
            Err(e) => {
                let message = e.to_message();
                tracing::error!("{}", message);
                message
            }
        };

        self.deliver(message).await
    }

    /// Fetch, validate and parse the latest submission.
    ///
    /// `Ok(None)` means the API has nothing new; the cursor is left alone.
    async fn check_updates(&mut self) -> Result<Option<String>, CycleError> {
        let response = self.source.fetch(self.state.cursor).await?;
        let homeworks = check_response(&response)?;

        // Only the most recent submission is reported.
        let Some(latest) = homeworks.first() else {
            return Ok(None);
        };
        let message = parse_status(latest)?;

        if let Some(current_date) = response.get(CURRENT_DATE_KEY).and_then(Value::as_i64) {
            if current_date != self.state.cursor {
                tracing::info!("Cursor advanced {} -> {}", self.state.cursor, current_date);
            }
            self.state.cursor = current_date;
        }

        Ok(Some(message))
    }

    async fn deliver(&mut self, message: String) -> CycleOutcome {
        if message == self.state.last_message {
            tracing::debug!("Message unchanged, not sending again");
            return CycleOutcome::Unchanged;
        }

        if self.notifier.notify(&message).await {
            self.state.last_message = message.clone();
            CycleOutcome::Delivered(message)
        } else {
            CycleOutcome::DeliveryFailed(message)
        }
    }
}
