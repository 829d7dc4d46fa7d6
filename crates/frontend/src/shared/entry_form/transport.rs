use async_trait::async_trait;
use contracts::shared::entry_form::{AcceptedRecord, EntryFormError, SubmitTransport};
use gloo_timers::future::TimeoutFuture;

/// Stands in for a save request: waits, then accepts.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl SubmitTransport for SimulatedTransport {
    async fn deliver(&self, record: &AcceptedRecord) -> Result<(), EntryFormError> {
        log::debug!(
            "{}: simulating save of {} ({} ms)",
            record.form_id,
            record.id.as_string(),
            self.delay_ms
        );
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}
