//! Progress notification port
//!
//! Lets the presentation layer show that a backend call is in flight.

use campus_domain::Model;

/// Callback for progress updates during consolidation
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the backend is invoked
    fn on_generation_start(&self, model: &Model, question_count: usize);

    /// Called when the backend call finished (successfully or not)
    fn on_generation_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_generation_start(&self, _model: &Model, _question_count: usize) {}
    fn on_generation_end(&self, _success: bool) {}
}
