use common_enums::ApiStatus;
use serde::{Deserialize, Serialize};

/// Query or form parameters the gateway appends when sending the shopper back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RedirectCallback {
    pub tid: Option<String>,
    pub status: Option<String>,
    pub status_text: Option<String>,
    pub checksum: Option<String>,
}

/// A callback that carries a transaction id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedRedirect {
    pub tid: String,
    /// Raw status as sent; it is part of the checksum input
    pub status: String,
    pub status_text: Option<String>,
    pub checksum: Option<String>,
}

impl ReceivedRedirect {
    pub fn api_status(&self) -> ApiStatus {
        ApiStatus::from_gateway(&self.status)
    }
}

impl RedirectCallback {
    /// `None` when the gateway sent no (or an empty) transaction id.
    pub fn into_received(self) -> Option<ReceivedRedirect> {
        let tid = self.tid.filter(|tid| !tid.trim().is_empty())?;
        Some(ReceivedRedirect {
            tid,
            status: self.status.unwrap_or_default(),
            status_text: self.status_text,
            checksum: self.checksum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_without_tid_is_not_received() {
        let callback = RedirectCallback {
            tid: Some(" ".to_string()),
            status: Some("SUCCESS".to_string()),
            ..Default::default()
        };
        assert_eq!(callback.into_received(), None);
        assert_eq!(RedirectCallback::default().into_received(), None);
    }

    #[test]
    fn missing_status_is_a_failure() {
        let received = RedirectCallback {
            tid: Some("14496300055218123".to_string()),
            ..Default::default()
        }
        .into_received();
        assert_eq!(
            received.map(|redirect| redirect.api_status()),
            Some(ApiStatus::Failure)
        );
    }
}
