//! # Error Handling
//!
//! Errors raised while attaching the form controller or loading its configuration.
//!
//! ## Error Categories
//!
//! - **RootNotFound**: the form root is absent from the page. This is the only
//!   fatal case; the controller does not attach.
//! - **Config**: configuration values that fail [`FormConfig::validate`](crate::FormConfig::validate).
//! - **Json**: configuration JSON that does not deserialize.
//!
//! Missing non-root elements are *not* errors: they are logged during resolution
//! and the feature that needs them is skipped. Validation failures are data
//! ([`ValidationOutcome`](crate::ValidationOutcome)) and never travel as `Err`.

use thiserror::Error;

/// Convenience type alias for `Result<T, FormError>`.
pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// No element matched the configured root selector.
    #[error("Root element not found for selector: {0}")]
    RootNotFound(String),

    /// Configuration value rejected by validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration JSON could not be parsed.
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
