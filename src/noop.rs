use crate::record::EventRecord;
use crate::sink::EventSink;
use async_trait::async_trait;
use std::error::Error;

/// Sink that discards every record it receives.
///
/// Serves as a baseline when timing the channel path in isolation, and
/// as a stand-in wherever the output itself is irrelevant.
#[derive(Clone, Copy, Default)]
pub struct NoopSink;

#[async_trait]
impl EventSink for NoopSink {
    async fn write(&self, _record: &EventRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
