//! # Signup Form Library
//!
//! Interaction state machine and validation pipeline for the signup form:
//! identifier segment selection, password visibility toggling, validation and
//! inline error presentation.
//!
//! The library never touches a browser directly. Everything it needs from the
//! page goes through the [`FormHost`] trait, so the whole controller runs in
//! plain unit tests and in the `signup-web` wasm crate alike.

pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod host;
pub mod password;
pub mod presenter;
pub mod segment;
pub mod selectors;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::{FormConfig, SwitchClearing};
pub use controller::{FormController, SubmitOutcome};
pub use error::{FormError, Result};
pub use host::{FormHost, InputKind, SelectionRange};
pub use password::{PasswordField, PasswordFieldState};
pub use segment::Segment;
pub use validation::{FieldKey, FormSnapshot, ValidationOutcome};
