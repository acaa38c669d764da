use std::sync::atomic::Ordering;
use std::sync::Arc;

use lifecycle_log::init::{init, init_with_config};
use lifecycle_log::memory::MemorySink;
use lifecycle_log::{EventLogger, LoggerConfig};

/// Checks the `mm:ss_SSSS` shape: two digits, colon, two digits,
/// underscore, four digits.
fn assert_timestamp_pattern(ts: &str) {
    assert_eq!(ts.len(), 10, "unexpected timestamp length in {:?}", ts);
    let bytes = ts.as_bytes();
    for i in [0, 1, 3, 4, 6, 7, 8, 9] {
        assert!(bytes[i].is_ascii_digit(), "non-digit at {} in {:?}", i, ts);
    }
    assert_eq!(bytes[2], b':');
    assert_eq!(bytes[5], b'_');
}

/// Splits a rendered line into label and timestamp, asserting the label
/// matches exactly.
fn timestamp_of<'a>(line: &'a str, label: &str) -> &'a str {
    line.strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(": "))
        .unwrap_or_else(|| panic!("line {:?} does not start with label {:?}", line, label))
}

fn capture_logger() -> (EventLogger, MemorySink) {
    let sink = MemorySink::new();
    let logger = init(Arc::new(sink.clone()));
    (logger, sink)
}

#[tokio::test]
async fn one_line_per_call_with_exact_label() {
    let (logger, sink) = capture_logger();

    logger.log("onStart");
    logger.close().await;

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_timestamp_pattern(timestamp_of(&lines[0], "onStart"));
}

#[tokio::test]
async fn back_to_back_calls_keep_order() {
    let (logger, sink) = capture_logger();

    logger.log("onPause");
    logger.log("onStop");
    logger.close().await;

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_timestamp_pattern(timestamp_of(&lines[0], "onPause"));
    assert_timestamp_pattern(timestamp_of(&lines[1], "onStop"));
}

#[tokio::test]
async fn accepts_labels_with_spaces_and_punctuation() {
    let (logger, sink) = capture_logger();

    let labels = [
        "onCreate1 setContentView sonrası",
        "onActivityResult(request=7, result=-1)",
        "weird !@#$%^&* label",
    ];
    for label in labels {
        logger.log(label);
    }
    logger.close().await;

    let lines = sink.lines();
    assert_eq!(lines.len(), labels.len());
    for (line, label) in lines.iter().zip(labels) {
        assert_timestamp_pattern(timestamp_of(line, label));
    }
}

#[tokio::test]
async fn fractions_non_decreasing_within_one_second() {
    let (logger, sink) = capture_logger();

    for _ in 0..50 {
        logger.log("tick");
    }
    logger.close().await;

    let lines = sink.lines();
    assert_eq!(lines.len(), 50);

    let mut prev: Option<(&str, u32)> = None;
    for line in &lines {
        let ts = timestamp_of(line, "tick");
        let (window, frac) = ts.split_at(5);
        let frac: u32 = frac[1..].parse().unwrap();
        if let Some((prev_window, prev_frac)) = prev {
            if prev_window == window {
                assert!(frac >= prev_frac, "fraction went backwards: {:?}", lines);
            }
        }
        prev = Some((window, frac));
    }
}

#[tokio::test]
async fn every_call_is_counted_and_none_dropped() {
    let (logger, sink) = capture_logger();

    for i in 0..100 {
        logger.log(&format!("event-{}", i));
    }

    assert_eq!(logger.total_events.load(Ordering::Relaxed), 100);
    assert_eq!(logger.enqueued_events.load(Ordering::Relaxed), 100);
    assert_eq!(logger.dropped_events.load(Ordering::Relaxed), 0);

    logger.close().await;
    assert_eq!(sink.len(), 100);
}

#[tokio::test]
async fn overflow_drops_lines_instead_of_blocking() {
    struct StalledSink;

    #[async_trait::async_trait]
    impl lifecycle_log::EventSink for StalledSink {
        async fn write(
            &self,
            _record: &lifecycle_log::EventRecord,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    // Buffer is clamped up to 16; the drain task cannot run until this
    // test yields, so everything past the buffer must be dropped.
    let logger = init_with_config(
        Arc::new(StalledSink),
        LoggerConfig {
            channel_buffer: 1,
            flush_interval: std::time::Duration::from_secs(1),
        },
    );

    for _ in 0..40 {
        logger.log("onStop");
    }

    assert_eq!(logger.total_events.load(Ordering::Relaxed), 40);
    assert_eq!(logger.enqueued_events.load(Ordering::Relaxed), 16);
    assert_eq!(logger.dropped_events.load(Ordering::Relaxed), 24);
}

#[test]
fn record_serializes_with_label_and_formatted_timestamp() {
    let record = lifecycle_log::EventRecord::capture("onResume");
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["label"], "onResume");
    assert_timestamp_pattern(value["formatted"].as_str().unwrap());
}
