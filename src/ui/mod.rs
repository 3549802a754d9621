//! UI collaborator seams: progress indicator and user-facing messages.
//!
//! The client never reaches into ambient globals; both collaborators are
//! injected at construction and default to no-ops, so headless embedders
//! pay nothing.

use log::{error, warn};

/// Progress indicator for in-flight network activity (e.g. a top bar).
#[cfg_attr(test, mockall::automock)]
pub trait ProgressSink: Send + Sync {
    fn start(&self);
    fn finish(&self);
    fn error(&self);
}

/// Toast-style notifications shown to the user.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSink: Send + Sync {
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Default progress sink: does nothing.
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn start(&self) {}
    fn finish(&self) {}
    fn error(&self) {}
}

/// Default message sink: does nothing.
pub struct NoopMessages;

impl MessageSink for NoopMessages {
    fn error(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
}

/// Message sink forwarding to the log facade; used by the CLI.
pub struct LogMessages;

impl MessageSink for LogMessages {
    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }
}
