use std::sync::Arc;

use lifecycle_log::console::ConsoleSink;
use lifecycle_log::init::init;
use lifecycle_log::{ActivityObserver, LifecycleEvent};

/// Replays the callback sequence of a screen being opened, backgrounded
/// and destroyed, printing one timestamped line per event to stderr.
#[tokio::main]
async fn main() {
    let logger = init(Arc::new(ConsoleSink));
    let observer = ActivityObserver::new(logger);

    let startup = [
        LifecycleEvent::Create,
        LifecycleEvent::ContentChanged,
        LifecycleEvent::Start,
        LifecycleEvent::PostCreate,
        LifecycleEvent::Resume,
        LifecycleEvent::PostResume,
        LifecycleEvent::AttachedToWindow,
    ];
    for event in startup {
        observer.observe(event);
    }

    // User hits Home, then comes back, then backs out.
    observer.observe(LifecycleEvent::UserLeaveHint);
    observer.observe(LifecycleEvent::Pause);
    observer.observe(LifecycleEvent::SaveInstanceState);
    observer.observe(LifecycleEvent::Stop);
    observer.observe(LifecycleEvent::Restart);
    observer.observe(LifecycleEvent::Start);
    observer.observe(LifecycleEvent::Resume);
    observer.observe(LifecycleEvent::BackPressed);
    observer.observe(LifecycleEvent::Pause);
    observer.observe(LifecycleEvent::Stop);
    observer.observe(LifecycleEvent::Destroy);

    observer.close().await;
}
