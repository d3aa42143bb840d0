//! Progress notification port
//!
//! Defines the interface for reporting progress while a video is generated.

/// Callback for progress updates during video generation
///
/// Implementations live in the presentation layer. Notifications are
/// cosmetic and have no effect on the job.
pub trait AnimationProgressNotifier: Send + Sync {
    /// Called when generation starts, with the first status message
    fn on_generation_start(&self, message: &str);

    /// Called each time the rotating status message changes
    fn on_status_message(&self, message: &str);

    /// Called after each job status check
    fn on_poll(&self, _attempt: u32, _done: bool) {}

    /// Called when generation ends
    fn on_generation_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoAnimationProgress;

impl AnimationProgressNotifier for NoAnimationProgress {
    fn on_generation_start(&self, _message: &str) {}
    fn on_status_message(&self, _message: &str) {}
    fn on_generation_end(&self, _success: bool) {}
}
