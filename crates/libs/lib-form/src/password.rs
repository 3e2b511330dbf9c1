//! # Password Visibility
//!
//! Independent obscured/visible state for the password and confirm-password
//! inputs. State only changes on an explicit toggle; typing never flips it.

use crate::config::FormConfig;
use crate::host::InputKind;
use crate::validation::is_space;

/// A field with a visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordField {
    Password,
    ConfirmPassword,
}

impl PasswordField {
    pub const ALL: [PasswordField; 2] = [PasswordField::Password, PasswordField::ConfirmPassword];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordFieldState {
    #[default]
    Obscured,
    Visible,
}

impl PasswordFieldState {
    pub fn toggled(&self) -> Self {
        match self {
            PasswordFieldState::Obscured => PasswordFieldState::Visible,
            PasswordFieldState::Visible => PasswordFieldState::Obscured,
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            PasswordFieldState::Obscured => InputKind::Password,
            PasswordFieldState::Visible => InputKind::Text,
        }
    }
}

/// What the toggle control should look like for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAppearance<'a> {
    pub input_kind: InputKind,
    pub icon: &'a str,
    /// Used for both `aria-label` and `title`.
    pub label: &'a str,
}

impl<'a> ToggleAppearance<'a> {
    pub fn for_state(state: PasswordFieldState, config: &'a FormConfig) -> Self {
        let (icon, label) = match state {
            PasswordFieldState::Visible => (&config.icons.visible, &config.labels.hide),
            PasswordFieldState::Obscured => (&config.icons.hidden, &config.labels.show),
        };
        Self {
            input_kind: state.input_kind(),
            icon,
            label,
        }
    }
}

#[derive(Debug, Default)]
pub struct PasswordVisibilityController {
    password: PasswordFieldState,
    confirm_password: PasswordFieldState,
}

impl PasswordVisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, field: PasswordField) -> PasswordFieldState {
        match field {
            PasswordField::Password => self.password,
            PasswordField::ConfirmPassword => self.confirm_password,
        }
    }

    /// Flip `field` and return its new state.
    pub fn toggle(&mut self, field: PasswordField) -> PasswordFieldState {
        let slot = match field {
            PasswordField::Password => &mut self.password,
            PasswordField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = slot.toggled();
        *slot
    }

    /// The toggle control is shown only while its input has non-blank content.
    pub fn toggle_visible_for(value: &str) -> bool {
        !value.trim_matches(is_space).is_empty()
    }
}
