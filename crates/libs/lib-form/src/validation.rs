//! # Validation Engine
//!
//! Pure predicates over raw input plus the form-level rule set that turns a
//! [`FormSnapshot`] into a [`ValidationOutcome`].
//!
//! ## Rule Order
//!
//! Each field carries at most one message per attempt. For a given field the
//! empty check runs first, then the format check, then the cross-field check;
//! the first failing rule wins.

use std::collections::BTreeMap;

use crate::segment::Segment;

/// User-facing error messages.
pub mod messages {
    pub const EMAIL_REQUIRED: &str = "Please enter email address";
    pub const EMAIL_INVALID: &str = "Invalid email address";
    pub const PHONE_REQUIRED: &str = "Please enter mobile number";
    pub const PHONE_INVALID: &str = "Invalid phone number";
    pub const PASSWORD_WEAK: &str = "Password has to be between 8-30 characters, and contains at least one uppercase letter, one lowercase letter and a number";
    pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
    pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
}

const PHONE_MIN_CHARS: usize = 7;
const PHONE_MAX_CHARS: usize = 15;
const PASSWORD_MIN_CHARS: usize = 8;
const PASSWORD_MAX_CHARS: usize = 30;
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+=-";

/// Identifies a validated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::Password,
        FieldKey::ConfirmPassword,
    ];
}

/// Raw form values read at submit time.
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a> {
    pub segment: Segment,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Per-attempt mapping from field to error message. A field without an entry passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: BTreeMap<FieldKey, String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in [`FieldKey`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.errors.iter().map(|(key, message)| (*key, message.as_str()))
    }

    /// Records `message` unless the field already failed an earlier rule.
    fn reject(&mut self, field: FieldKey, message: &str) {
        self.errors
            .entry(field)
            .or_insert_with(|| message.to_string());
    }
}

/// The `\s` class used by browser regexes and `String.prototype.trim`:
/// Unicode white space without NEL (U+0085), plus the byte-order mark.
pub(crate) fn is_space(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let clean = |part: &str| !part.is_empty() && !part.chars().any(|c| c == '@' || is_space(c));
    if !clean(local) || !clean(domain) {
        return false;
    }

    // Some dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// Optional `+` followed by 7-15 digits, spaces, hyphens or parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim_matches(is_space);
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let count = body.chars().count();
    (PHONE_MIN_CHARS..=PHONE_MAX_CHARS).contains(&count)
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || is_space(c) || matches!(c, '-' | '(' | ')'))
}

/// 8-30 characters with a lowercase letter, an uppercase letter and a digit,
/// drawn from letters, digits and `!@#$%^&*()_+=-`.
pub fn is_valid_password(password: &str) -> bool {
    let count = password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&count) {
        return false;
    }

    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));

    allowed
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validate the fields relevant to the active segment.
///
/// The inactive identifier is ignored entirely. Password and confirmation are
/// always checked.
pub fn validate_form(snapshot: &FormSnapshot<'_>) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    match snapshot.segment {
        Segment::Email => {
            let email = snapshot.email.trim_matches(is_space);
            if email.is_empty() {
                outcome.reject(FieldKey::Email, messages::EMAIL_REQUIRED);
            } else if !is_valid_email(email) {
                outcome.reject(FieldKey::Email, messages::EMAIL_INVALID);
            }
        }
        Segment::Phone => {
            let phone = snapshot.phone.trim_matches(is_space);
            if phone.is_empty() {
                outcome.reject(FieldKey::Phone, messages::PHONE_REQUIRED);
            } else if !is_valid_phone(phone) {
                outcome.reject(FieldKey::Phone, messages::PHONE_INVALID);
            }
        }
    }

    if !is_valid_password(snapshot.password) {
        outcome.reject(FieldKey::Password, messages::PASSWORD_WEAK);
    }

    if snapshot.confirm_password.trim_matches(is_space).is_empty() {
        outcome.reject(FieldKey::ConfirmPassword, messages::CONFIRM_REQUIRED);
    } else if snapshot.password != snapshot.confirm_password {
        outcome.reject(FieldKey::ConfirmPassword, messages::PASSWORDS_MISMATCH);
    }

    outcome
}
