use crate::record::EventRecord;
use crate::sink::EventSink;
use async_trait::async_trait;
use std::error::Error;
use std::io::Write;

/// Sink that appends each rendered line to the process's stderr stream.
///
/// stderr is used deliberately so event lines stand out from ordinary
/// stdout output, the same way error-level log lines do. Each line is
/// emitted with a single locked write so concurrent output never
/// interleaves mid-line.
#[derive(Clone, Copy, Default)]
pub struct ConsoleSink;

#[async_trait]
impl EventSink for ConsoleSink {
    async fn write(&self, record: &EventRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", record.render())?;
        Ok(())
    }

    async fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        std::io::stderr().lock().flush()?;
        Ok(())
    }
}
