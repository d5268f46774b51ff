/*
[INPUT]:  Operation outcomes from the controller
[OUTPUT]: Transient user-facing notification state
[POS]:    State layer - snackbar-style notification model
[UPDATE]: When adding severities or changing dismiss timing
*/

/// Ticks a notification stays visible before auto-dismiss
/// (16 ticks at a 250ms UI tick rate, 4 seconds)
pub const AUTO_DISMISS_TICKS: u8 = 16;

/// How strongly the notification should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A mutation completed
    Success,
    /// Neutral outcome report
    Info,
}

/// Transient message reporting the outcome of the last user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// Remaining visibility ticks; the owner decrements and clears at zero
    pub ticks_remaining: u8,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            ticks_remaining: AUTO_DISMISS_TICKS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            ticks_remaining: AUTO_DISMISS_TICKS,
        }
    }
}
