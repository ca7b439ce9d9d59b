use common_enums::NotificationSeverity;
use common_utils::consts::NOTIFICATION_DURATION;
use serde::Serialize;

/// A message the storefront shows to the shopper on the next page load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: NotificationSeverity,
    pub duration: u16,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: NotificationSeverity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationSeverity::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationSeverity::Success)
    }
}
