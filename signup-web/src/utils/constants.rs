//! Application constants

/// Id of the optional `<script type="application/json">` element holding a
/// `FormConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "signup-form-config";

/// Acknowledgment shown after a fully valid submit.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
