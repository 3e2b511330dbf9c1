//! # Host Abstraction
//!
//! The page operations the controller needs. `signup-web` implements this over
//! `web_sys::Element`; tests implement it over an in-memory element tree.

/// Rendering mode of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Characters are masked (`type="password"`).
    Password,
    /// Characters are shown as typed (`type="text"`).
    Text,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Password => "password",
            InputKind::Text => "text",
        }
    }
}

/// Caret/selection offsets of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub start: u32,
    pub end: u32,
}

impl SelectionRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Collapsed selection (plain caret) at `offset`.
    pub fn caret(offset: u32) -> Self {
        Self::new(offset, offset)
    }
}

/// Element operations required from the page.
///
/// All methods take `&self`: hosts wrap handles that are themselves shared
/// references into the page (DOM nodes), so mutation happens through them.
pub trait FormHost {
    /// Live element handle.
    type Element: Clone;

    /// Document-wide lookup of the form root.
    fn find_root(&self, selector: &str) -> Option<Self::Element>;

    /// Lookup scoped under `root`. Returns `root` itself when it matches.
    fn query(&self, root: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Nearest ancestor of `element` (inclusive) matching `selector`.
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Add (`on == true`) or remove a marker class.
    fn set_class(&self, element: &Self::Element, class: &str, on: bool);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Inline border colour; an empty string removes the override.
    fn set_border_color(&self, element: &Self::Element, color: &str);

    fn focus(&self, element: &Self::Element);

    /// Current value of an input element (empty for non-inputs).
    fn value(&self, element: &Self::Element) -> String;

    fn set_input_kind(&self, element: &Self::Element, kind: InputKind);

    fn selection(&self, element: &Self::Element) -> Option<SelectionRange>;

    fn set_selection(&self, element: &Self::Element, range: SelectionRange);

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Image source of an icon element.
    fn set_image_source(&self, element: &Self::Element, src: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_attribute_values() {
        assert_eq!(InputKind::Password.as_str(), "password");
        assert_eq!(InputKind::Text.as_str(), "text");
    }

    #[test]
    fn test_caret_is_collapsed() {
        let caret = SelectionRange::caret(4);
        assert_eq!(caret.start, caret.end);
        assert_eq!(caret, SelectionRange::new(4, 4));
    }
}
