use crate::record::EventRecord;
use crate::sink::EventSink;
use async_trait::async_trait;
use std::error::Error;

/// Sink that re-emits each record as a `tracing` event at `ERROR` level.
///
/// The elevated level carries no error semantics; it only makes the lines
/// visually distinct in whatever subscriber the host process runs. Use
/// [`crate::init::install_fmt_subscriber`] if no subscriber is installed
/// yet.
#[derive(Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl EventSink for TracingSink {
    async fn write(&self, record: &EventRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::error!(target: "lifecycle_log", label = %record.label, "{}", record.formatted);
        Ok(())
    }
}
