//! State machine behind the enrollment confirmation dialog.
//!
//! The dialog walks a fixed sequence: it opens armed on a program, shows a
//! short synchronizing phase once confirmed, holds a success notice, then
//! closes. Cancellation is only honored while armed; once synchronization
//! starts the sequence runs to completion unless the whole flow is aborted.

use std::time::{Duration, Instant};

/// How long the synchronizing phase is displayed.
pub const SYNC_DELAY: Duration = Duration::from_millis(800);
/// How long the success notice stays up before the dialog closes.
pub const SUCCESS_HOLD: Duration = Duration::from_millis(600);

/// Confirmation dialog state for at most one program at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfirmationFlow {
    #[default]
    Idle,
    /// Dialog open, waiting for the user to confirm or cancel.
    Armed { title: String },
    /// Synchronizing phase; `until` marks when the enrollment is created.
    Confirming { title: String, until: Instant },
    /// Success notice; `until` marks when the dialog closes itself.
    Success { title: String, until: Instant },
}

impl ConfirmationFlow {
    /// Open the dialog for `title`. Ignored unless the flow is idle.
    pub fn open(&mut self, title: &str) {
        if matches!(self, Self::Idle) {
            *self = Self::Armed {
                title: title.to_string(),
            };
        }
    }

    /// Start the synchronizing phase. Ignored unless the flow is armed.
    pub fn confirm(&mut self, now: Instant) {
        if let Self::Armed { title } = self {
            *self = Self::Confirming {
                title: std::mem::take(title),
                until: now + SYNC_DELAY,
            };
        }
    }

    /// Dismiss the dialog. Honored only while armed; once synchronization has
    /// started the sequence is committed.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Armed { .. }) {
            *self = Self::Idle;
        }
    }

    /// Tear the dialog down regardless of phase. Used when the session or
    /// analysis it refers to goes away.
    pub fn abort(&mut self) {
        *self = Self::Idle;
    }

    /// Advance phase deadlines. Returns the program title exactly once, when
    /// the success hold ends, the dialog closes, and the enrollment should be
    /// created.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        match self {
            Self::Idle | Self::Armed { .. } => None,
            Self::Confirming { title, until } => {
                if *until > now {
                    return None;
                }
                *self = Self::Success {
                    title: std::mem::take(title),
                    until: now + SUCCESS_HOLD,
                };
                None
            }
            Self::Success { title, until } => {
                if *until > now {
                    return None;
                }
                let title = std::mem::take(title);
                *self = Self::Idle;
                Some(title)
            }
        }
    }

    /// Next deadline the frame loop must wake up for, if any.
    pub fn next_due(&self) -> Option<Instant> {
        match self {
            Self::Idle | Self::Armed { .. } => None,
            Self::Confirming { until, .. } | Self::Success { until, .. } => Some(*until),
        }
    }

    /// Program the dialog currently refers to.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Armed { title }
            | Self::Confirming { title, .. }
            | Self::Success { title, .. } => Some(title),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
