//! # Form Configuration
//!
//! Selectors, marker classes, icon paths and labels used by the controller.
//! [`FormConfig::default`] matches the stock signup page markup; a page can
//! override any part of it with JSON (see [`FormConfig::from_json`]).
//!
//! ```rust
//! use lib_form::{FormConfig, SwitchClearing};
//!
//! let config = FormConfig::from_json(r#"{ "switchClearing": "all" }"#).unwrap();
//! assert_eq!(config.switch_clearing, SwitchClearing::All);
//! assert_eq!(config.selectors.root, "[data-js-form]");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::selectors::FormSelectors;

/// Which errors are cleared after the identifier segment changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwitchClearing {
    /// Only fields that are now hidden.
    #[default]
    HiddenOnly,
    /// Every field, visible or not.
    All,
}

/// Marker classes shared with the stylesheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassConfig {
    /// Reversible "hidden" marker for field groups and toggle buttons.
    pub visually_hidden: String,
    /// Marker for the single active segment option.
    pub segment_active: String,
    /// Field group enclosing an input and its error display.
    pub field: String,
    /// Input inside a field group.
    pub field_input: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            visually_hidden: "visually-hidden".to_string(),
            segment_active: "segmented-button__item--active".to_string(),
            field: "field".to_string(),
            field_input: "field__input".to_string(),
        }
    }
}

/// Password toggle icon sources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconConfig {
    /// Shown while the password is readable.
    pub visible: String,
    /// Shown while the password is masked.
    pub hidden: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            visible: "./assets/icons/visibility.svg".to_string(),
            hidden: "./assets/icons/visibility-off.svg".to_string(),
        }
    }
}

/// Accessible label and title of the password toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleLabels {
    pub show: String,
    pub hide: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            show: "Show password".to_string(),
            hide: "Hide password".to_string(),
        }
    }
}

/// Complete controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub selectors: FormSelectors,
    pub classes: ClassConfig,
    pub icons: IconConfig,
    pub labels: ToggleLabels,
    /// Border colour applied to an input that carries an error.
    pub error_color: String,
    pub switch_clearing: SwitchClearing,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selectors: FormSelectors::default(),
            classes: ClassConfig::default(),
            icons: IconConfig::default(),
            labels: ToggleLabels::default(),
            error_color: "var(--color-red)".to_string(),
            switch_clearing: SwitchClearing::default(),
        }
    }
}

impl FormConfig {
    /// Parse and validate a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty selectors and class names.
    ///
    /// An empty selector is a syntax error for `querySelector`, and an empty
    /// class name makes `classList` operations throw.
    pub fn validate(&self) -> Result<()> {
        for (path, selector) in self.selectors.entries() {
            if selector.trim().is_empty() {
                return Err(FormError::Config(format!("selector `{}` is empty", path)));
            }
        }

        let classes = [
            ("classes.visuallyHidden", &self.classes.visually_hidden),
            ("classes.segmentActive", &self.classes.segment_active),
            ("classes.field", &self.classes.field),
            ("classes.fieldInput", &self.classes.field_input),
        ];
        for (path, class) in classes {
            if class.trim().is_empty() || class.contains(char::is_whitespace) {
                return Err(FormError::Config(format!(
                    "class `{}` must be a single non-empty token",
                    path
                )));
            }
        }

        Ok(())
    }

    /// `.field` selector built from the field group class.
    pub fn field_group_selector(&self) -> String {
        format!(".{}", self.classes.field)
    }

    /// `.field__input` selector built from the field input class.
    pub fn field_input_selector(&self) -> String {
        format!(".{}", self.classes.field_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FormConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.switch_clearing, SwitchClearing::HiddenOnly);
        assert_eq!(config.error_color, "var(--color-red)");
        assert_eq!(config.field_group_selector(), ".field");
        assert_eq!(config.field_input_selector(), ".field__input");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FormConfig::from_json(
            r#"{
                "icons": { "visible": "/eye.svg" },
                "labels": { "hide": "Hide" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.icons.visible, "/eye.svg");
        assert_eq!(config.icons.hidden, "./assets/icons/visibility-off.svg");
        assert_eq!(config.labels.hide, "Hide");
        assert_eq!(config.labels.show, "Show password");
        assert_eq!(config.classes, ClassConfig::default());
    }

    #[test]
    fn test_switch_clearing_names() {
        let config = FormConfig::from_json(r#"{ "switchClearing": "hidden-only" }"#).unwrap();
        assert_eq!(config.switch_clearing, SwitchClearing::HiddenOnly);

        assert!(FormConfig::from_json(r#"{ "switchClearing": "some" }"#).is_err());
    }

    #[test]
    fn test_empty_selector_rejected() {
        let result = FormConfig::from_json(r#"{ "selectors": { "root": " " } }"#);
        match result {
            Err(FormError::Config(msg)) => assert!(msg.contains("root")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_class_with_spaces_rejected() {
        let mut config = FormConfig::default();
        config.classes.visually_hidden = "visually hidden".to_string();
        assert!(matches!(config.validate(), Err(FormError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            FormConfig::from_json("not json"),
            Err(FormError::Json(_))
        ));
    }
}
