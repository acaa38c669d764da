use crate::logger::{EventLogger, LoggerConfig};
use crate::sink::EventSink;
use std::sync::Arc;

/// Build an [`EventLogger`] around the provided sink using the given
/// [`LoggerConfig`].
///
/// **Parameters**
/// - `sink`: implementation of [`EventSink`] that will receive rendered
///   event lines.
/// - `config`: [`LoggerConfig`] controlling channel capacity and flush
///   cadence.
///
/// Must be called from within a tokio runtime; the logger spawns its
/// drain task on the current runtime.
pub fn init_with_config(sink: Arc<dyn EventSink>, config: LoggerConfig) -> EventLogger {
    EventLogger::new(sink, config)
}

/// Build an [`EventLogger`] with default buffering.
///
/// Equivalent to calling [`init_with_config`] with
/// [`LoggerConfig::default`]. This is the recommended entrypoint for
/// typical hosts.
pub fn init(sink: Arc<dyn EventSink>) -> EventLogger {
    init_with_config(sink, LoggerConfig::default())
}

/// Install `tracing_subscriber::fmt` as the global default subscriber so
/// [`crate::tracing_sink::TracingSink`] output is visible on the console.
///
/// Call at most once per process; a second call returns an error from the
/// subscriber machinery, which is reported back to the caller.
pub fn install_fmt_subscriber() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    let subscriber = Registry::default().with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)
}
