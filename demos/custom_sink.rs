use std::sync::Arc;

use async_trait::async_trait;
use lifecycle_log::init::init;
use lifecycle_log::record::EventRecord;
use lifecycle_log::sink::EventSink;

/// Example of integrating a custom output by implementing the
/// `EventSink` trait directly. Imagine this forwards lines to a platform
/// log buffer for which this crate has no built-in sink.
struct PlatformBufferSink;

#[async_trait]
impl EventSink for PlatformBufferSink {
    async fn write(&self, record: &EventRecord) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Here you would call the platform's logging API. For the sake of
        // example we just print the rendered line.
        println!("[platform-buffer] {}", record.render());
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let logger = init(Arc::new(PlatformBufferSink));

    logger.log("onStart");
    logger.log("onResume");
    logger.log("onPause");

    logger.close().await;
}
