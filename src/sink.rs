use crate::record::EventRecord;
use async_trait::async_trait;
use std::error::Error;

/// Destination for [`EventRecord`]s produced by the logger.
///
/// Implementations transport rendered diagnostic lines to a concrete
/// output (stderr, a `tracing` subscriber, an in-memory capture buffer).
/// The logger calls `write` from a background task and never awaits it on
/// the caller's thread.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Write a single event record to the underlying output.
    ///
    /// **Parameters**
    /// - `record`: fully-populated [`EventRecord`] whose `render()` output
    ///   is the line to emit.
    ///
    /// **Returns**
    /// - `Ok(())` if the line was accepted by the output.
    /// - `Err(..)` if the output failed. The logger reports the failure on
    ///   its own diagnostics and drops the record; `log` itself never
    ///   surfaces sink errors to callers.
    ///
    /// Implementations must emit whole lines: concurrent callers may share
    /// one sink, and output must never interleave mid-line.
    async fn write(&self, record: &EventRecord) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Flush any buffered lines, if the output buffers.
    ///
    /// Default implementation is a no-op.
    async fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
