use crate::record::EventRecord;
use crate::sink::EventSink;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// Buffering configuration for an [`EventLogger`].
///
/// **Fields**
/// - `channel_buffer`: maximum number of [`EventRecord`]s queued before new
///   lines are dropped.
/// - `flush_interval`: maximum idle interval between sink flushes.
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    pub channel_buffer: usize,
    pub flush_interval: Duration,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 1024,
            flush_interval: Duration::from_secs(1),
        }
    }
}

/// Timestamped event logger.
///
/// `log` is synchronous and non-blocking: it captures an [`EventRecord`]
/// and hands it to a background task via a bounded channel. The single
/// consumer task awaits [`EventSink::write`] for each record, so lines
/// reach the sink whole and in submission order even when multiple
/// threads log concurrently.
pub struct EventLogger {
    sender: mpsc::Sender<EventRecord>,
    handle: JoinHandle<()>,
    /// Total `log` calls observed.
    pub total_events: AtomicU64,
    /// Successfully enqueued into the channel.
    pub enqueued_events: AtomicU64,
    /// Dropped because the channel was full.
    pub dropped_events: AtomicU64,
}

impl EventLogger {
    /// Create a logger and spawn the background task that drains the
    /// channel into the provided [`EventSink`].
    ///
    /// Minimal thresholds are enforced for `channel_buffer` and
    /// `flush_interval` to avoid degenerate configurations.
    pub fn new(sink: Arc<dyn EventSink>, config: LoggerConfig) -> Self {
        let buffer = config.channel_buffer.max(16);
        let flush_interval = if config.flush_interval < Duration::from_millis(10) {
            Duration::from_millis(10)
        } else {
            config.flush_interval
        };

        let (tx, mut rx) = mpsc::channel::<EventRecord>(buffer);

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    maybe = rx.recv() => match maybe {
                        Some(record) => {
                            if let Err(e) = sink.write(&record).await {
                                eprintln!("event sink write failed, dropping line: {}", e);
                            }
                        }
                        // Sender dropped: drain is complete.
                        None => break,
                    },
                    _ = sleep(flush_interval) => {
                        if let Err(e) = sink.flush().await {
                            eprintln!("event sink flush failed: {}", e);
                        }
                    }
                }
            }

            if let Err(e) = sink.flush().await {
                eprintln!("event sink flush failed on close: {}", e);
            }
        });

        EventLogger {
            sender: tx,
            handle,
            total_events: AtomicU64::new(0),
            enqueued_events: AtomicU64::new(0),
            dropped_events: AtomicU64::new(0),
        }
    }

    /// Log one event under the given label.
    ///
    /// Always succeeds from the caller's perspective: the timestamp is
    /// captured here, on the calling thread, and the only possible
    /// degradation is a dropped line when the channel is full.
    pub fn log(&self, label: &str) {
        self.total_events.fetch_add(1, Ordering::Relaxed);
        let record = EventRecord::capture(label);

        match self.sender.try_send(record) {
            Ok(()) => {
                self.enqueued_events.fetch_add(1, Ordering::Relaxed);
            }
            Err(_) => {
                self.dropped_events.fetch_add(1, Ordering::Relaxed);
                eprintln!("event channel full, dropping log line");
            }
        }
    }

    /// Shut the logger down: stop accepting events, let the background
    /// task drain everything already enqueued, and flush the sink.
    pub async fn close(self) {
        let EventLogger { sender, handle, .. } = self;
        drop(sender);
        let _ = handle.await;
    }
}
