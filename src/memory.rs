use crate::record::EventRecord;
use crate::sink::EventSink;
use async_trait::async_trait;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Error raised when the capture buffer's lock was poisoned by a panic
/// in another holder.
#[derive(thiserror::Error, Debug)]
#[error("memory sink buffer poisoned")]
pub struct BufferPoisoned;

/// Sink that captures rendered lines in memory.
///
/// Intended for tests: inject a `MemorySink`, drive the logger, then
/// assert on [`MemorySink::lines`]. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn write(&self, record: &EventRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut lines = self.lines.lock().map_err(|_| BufferPoisoned)?;
        lines.push(record.render());
        Ok(())
    }
}
