use crate::logger::EventLogger;

/// Transition points a host framework reports for one screen container.
///
/// The framework owns the sequencing rules; this crate only names the
/// events so a single handler can receive them instead of one override
/// per callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Create,
    ContentChanged,
    Start,
    RestoreInstanceState,
    PostCreate,
    Resume,
    PostResume,
    AttachedToWindow,
    UserInteraction,
    UserLeaveHint,
    Pause,
    SaveInstanceState,
    Stop,
    Restart,
    ConfigurationChanged,
    BackPressed,
    CreateOptionsMenu,
    PrepareOptionsMenu,
    ActivityResult,
    AttachFragment,
    CreateView,
    Destroy,
}

impl LifecycleEvent {
    /// Conventional callback name for this event.
    pub fn label(self) -> &'static str {
        match self {
            LifecycleEvent::Create => "onCreate",
            LifecycleEvent::ContentChanged => "onContentChanged",
            LifecycleEvent::Start => "onStart",
            LifecycleEvent::RestoreInstanceState => "onRestoreInstanceState",
            LifecycleEvent::PostCreate => "onPostCreate",
            LifecycleEvent::Resume => "onResume",
            LifecycleEvent::PostResume => "onPostResume",
            LifecycleEvent::AttachedToWindow => "onAttachedToWindow",
            LifecycleEvent::UserInteraction => "onUserInteraction",
            LifecycleEvent::UserLeaveHint => "onUserLeaveHint",
            LifecycleEvent::Pause => "onPause",
            LifecycleEvent::SaveInstanceState => "onSaveInstanceState",
            LifecycleEvent::Stop => "onStop",
            LifecycleEvent::Restart => "onRestart",
            LifecycleEvent::ConfigurationChanged => "onConfigurationChanged",
            LifecycleEvent::BackPressed => "onBackPressed",
            LifecycleEvent::CreateOptionsMenu => "onCreateOptionsMenu",
            LifecycleEvent::PrepareOptionsMenu => "onPrepareOptionsMenu",
            LifecycleEvent::ActivityResult => "onActivityResult",
            LifecycleEvent::AttachFragment => "onAttachFragment",
            LifecycleEvent::CreateView => "onCreateView",
            LifecycleEvent::Destroy => "onDestroy",
        }
    }
}

/// Single handler that receives enumerated lifecycle events and logs one
/// timestamped line per event.
pub struct ActivityObserver {
    logger: EventLogger,
}

impl ActivityObserver {
    pub fn new(logger: EventLogger) -> Self {
        ActivityObserver { logger }
    }

    /// Record one lifecycle event. Synchronous and infallible, so it is
    /// safe to call from a framework's main coordination thread.
    pub fn observe(&self, event: LifecycleEvent) {
        self.logger.log(event.label());
    }

    /// Access the underlying logger, e.g. to log labels outside the
    /// enumerated set.
    pub fn logger(&self) -> &EventLogger {
        &self.logger
    }

    /// Shut down the underlying logger, draining pending lines.
    pub async fn close(self) {
        self.logger.close().await;
    }
}
