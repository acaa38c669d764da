pub mod record;
pub mod sink;
pub mod logger;
pub mod lifecycle;

pub mod console;
pub mod tracing_sink;
pub mod memory;
pub mod noop;

pub mod init;

pub use lifecycle::{ActivityObserver, LifecycleEvent};
pub use logger::{EventLogger, LoggerConfig};
pub use record::EventRecord;
pub use sink::EventSink;
