//! Consolidated constants for the checkout service

// =============================================================================
// ID Generation
// =============================================================================

/// Length of generated identifiers (without prefix)
pub const ID_LENGTH: usize = 20;

/// Characters to use for generating NanoID
pub(crate) const ALPHABETS: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

// =============================================================================
// HTTP Headers
// =============================================================================

/// Header key for request ID
pub const X_REQUEST_ID: &str = "x-request-id";
/// Header key carrying the storefront session identifier
pub const X_SESSION_ID: &str = "x-session-id";
/// Header key carrying the storefront language
pub const X_LOCALE: &str = "x-locale";
/// Cookie carrying the storefront session identifier
pub const SESSION_COOKIE: &str = "nn_session";
/// Longest language tag accepted from the locale header
pub const MAX_LANGUAGE_TAG_LENGTH: usize = 8;

// =============================================================================
// Notifications
// =============================================================================

/// Display duration passed to the host for every checkout notification
pub const NOTIFICATION_DURATION: u16 = 100;
/// Status text used when the gateway did not send one
pub const GENERIC_ERROR_TEXT: &str = "Payment was not successful. An error occurred";
/// Status text shown when a redirect checksum does not match
pub const CHECKSUM_MISMATCH_TEXT: &str =
    "While redirecting some data has been changed. The hash check failed.";

// =============================================================================
// Error Messages and Codes
// =============================================================================

/// A string constant representing a redacted or masked value
pub const REDACTED: &str = "Redacted";

// =============================================================================
// Environment and Configuration
// =============================================================================

/// Build flavour used to pick the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    /// Debug builds
    Development,
    /// Release builds
    Release,
}

impl Env {
    /// Environment derived from the build profile
    pub const fn current_env() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Release
        }
    }

    /// File name of the configuration for this environment
    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Release => "production.toml",
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Release => write!(f, "release"),
        }
    }
}
