//! # Element Resolution
//!
//! The selector configuration is a small tree (root → segment options / field
//! groups → individual elements). [`Resolve`] walks that tree once at startup and
//! produces a matching tree of typed handles, which the controller keeps for its
//! whole lifetime.
//!
//! A selector that matches nothing is logged and resolves to `None`; whatever
//! feature needed the element is skipped later on.

use serde::{Deserialize, Serialize};

use crate::host::FormHost;
use crate::password::PasswordField;
use crate::segment::Segment;
use crate::validation::FieldKey;

/// Segment option selectors. Each option is tagged with its [`Segment`] when resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentSelectors {
    pub email: String,
    pub phone: String,
}

impl Default for SegmentSelectors {
    fn default() -> Self {
        Self {
            email: "[data-js-segmented-button-item-email]".to_string(),
            phone: "[data-js-segmented-button-item-phone]".to_string(),
        }
    }
}

/// Selectors of one field group.
///
/// When a group is overridden from JSON, `field`, `input` and `error` are
/// required; the toggle selectors default to absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroupSelectors {
    pub field: String,
    pub input: String,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle_icon: Option<String>,
}

impl FieldGroupSelectors {
    /// Stock `data-js-*` selectors for a plain field.
    pub fn plain(name: &str) -> Self {
        Self {
            field: format!("[data-js-field-{}]", name),
            input: format!("[data-js-input-{}]", name),
            error: format!("[data-js-error-{}]", name),
            toggle: None,
            toggle_icon: None,
        }
    }

    /// Stock `data-js-*` selectors for a field with a visibility toggle.
    pub fn with_toggle(name: &str) -> Self {
        Self {
            toggle: Some(format!("[data-js-toggle-{}]", name)),
            toggle_icon: Some(format!("[data-js-toggle-{}-icon]", name)),
            ..Self::plain(name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSelectors {
    pub email: FieldGroupSelectors,
    pub phone: FieldGroupSelectors,
    pub password: FieldGroupSelectors,
    pub confirm_password: FieldGroupSelectors,
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            email: FieldGroupSelectors::plain("email"),
            phone: FieldGroupSelectors::plain("phone"),
            password: FieldGroupSelectors::with_toggle("password"),
            confirm_password: FieldGroupSelectors::with_toggle("confirm-password"),
        }
    }
}

/// Root of the selector tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSelectors {
    /// Looked up document-wide; everything else is scoped under it.
    pub root: String,
    pub segmented_button: SegmentSelectors,
    pub fields: FieldSelectors,
}

impl Default for FormSelectors {
    fn default() -> Self {
        Self {
            root: "[data-js-form]".to_string(),
            segmented_button: SegmentSelectors::default(),
            fields: FieldSelectors::default(),
        }
    }
}

impl FormSelectors {
    /// Every configured selector with its dotted path, for validation and logging.
    pub fn entries(&self) -> Vec<(String, &str)> {
        let mut entries = vec![
            ("root".to_string(), self.root.as_str()),
            ("segmentedButton.email".to_string(), self.segmented_button.email.as_str()),
            ("segmentedButton.phone".to_string(), self.segmented_button.phone.as_str()),
        ];

        let groups = [
            ("email", &self.fields.email),
            ("phone", &self.fields.phone),
            ("password", &self.fields.password),
            ("confirmPassword", &self.fields.confirm_password),
        ];
        for (name, group) in groups {
            entries.push((format!("fields.{}.field", name), group.field.as_str()));
            entries.push((format!("fields.{}.input", name), group.input.as_str()));
            entries.push((format!("fields.{}.error", name), group.error.as_str()));
            if let Some(toggle) = &group.toggle {
                entries.push((format!("fields.{}.toggle", name), toggle.as_str()));
            }
            if let Some(icon) = &group.toggle_icon {
                entries.push((format!("fields.{}.toggleIcon", name), icon.as_str()));
            }
        }

        entries
    }
}

// ============================================================================
// RESOLVED HANDLES
// ============================================================================

/// A segment option element carrying the segment it selects.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentOption<E> {
    pub segment: Segment,
    pub element: E,
}

/// Resolved field group. Any member may be missing.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldHandle<E> {
    pub field: Option<E>,
    pub input: Option<E>,
    pub error: Option<E>,
    pub toggle: Option<E>,
    pub toggle_icon: Option<E>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldHandles<E> {
    pub email: FieldHandle<E>,
    pub phone: FieldHandle<E>,
    pub password: FieldHandle<E>,
    pub confirm_password: FieldHandle<E>,
}

impl<E> FieldHandles<E> {
    pub fn get(&self, key: FieldKey) -> &FieldHandle<E> {
        match key {
            FieldKey::Email => &self.email,
            FieldKey::Phone => &self.phone,
            FieldKey::Password => &self.password,
            FieldKey::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn identifier(&self, segment: Segment) -> &FieldHandle<E> {
        match segment {
            Segment::Email => &self.email,
            Segment::Phone => &self.phone,
        }
    }

    pub fn password_field(&self, field: PasswordField) -> &FieldHandle<E> {
        match field {
            PasswordField::Password => &self.password,
            PasswordField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldHandle<E>)> {
        FieldKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Resolved element tree for one controller.
#[derive(Clone, Debug, PartialEq)]
pub struct FormHandles<E> {
    pub root: E,
    pub segment_options: Vec<SegmentOption<E>>,
    pub fields: FieldHandles<E>,
}

impl<E> FormHandles<E> {
    pub fn segment_option(&self, segment: Segment) -> Option<&E> {
        self.segment_options
            .iter()
            .find(|option| option.segment == segment)
            .map(|option| &option.element)
    }
}

// ============================================================================
// TREE WALK
// ============================================================================

/// Looks up selectors under a root and remembers which ones matched nothing.
pub struct Resolver<'a, H: FormHost> {
    host: &'a H,
    root: &'a H::Element,
    missing: Vec<String>,
}

impl<'a, H: FormHost> Resolver<'a, H> {
    pub fn new(host: &'a H, root: &'a H::Element) -> Self {
        Self {
            host,
            root,
            missing: Vec::new(),
        }
    }

    pub fn root(&self) -> H::Element {
        self.root.clone()
    }

    /// Resolve one selector, logging a miss.
    pub fn element(&mut self, selector: &str) -> Option<H::Element> {
        let element = self.host.query(self.root, selector);
        if element.is_none() {
            tracing::error!("[Form] Element not found for selector: {}", selector);
            self.missing.push(selector.to_string());
        }
        element
    }

    /// Selectors that matched nothing, in resolution order.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}

/// A node of the selector tree that resolves to a handle subtree.
pub trait Resolve {
    type Output<E>;

    fn resolve<H: FormHost>(&self, resolver: &mut Resolver<'_, H>) -> Self::Output<H::Element>;
}

impl Resolve for String {
    type Output<E> = Option<E>;

    fn resolve<H: FormHost>(&self, resolver: &mut Resolver<'_, H>) -> Option<H::Element> {
        resolver.element(self)
    }
}

/// Unconfigured selectors resolve to `None` without being reported missing.
impl<T: Resolve> Resolve for Option<T> {
    type Output<E> = Option<T::Output<E>>;

    fn resolve<H: FormHost>(
        &self,
        resolver: &mut Resolver<'_, H>,
    ) -> Option<T::Output<H::Element>> {
        self.as_ref().map(|inner| inner.resolve(resolver))
    }
}

impl Resolve for SegmentSelectors {
    type Output<E> = Vec<SegmentOption<E>>;

    fn resolve<H: FormHost>(&self, resolver: &mut Resolver<'_, H>) -> Vec<SegmentOption<H::Element>> {
        [(Segment::Email, &self.email), (Segment::Phone, &self.phone)]
            .into_iter()
            .filter_map(|(segment, selector)| {
                selector
                    .resolve(resolver)
                    .map(|element| SegmentOption { segment, element })
            })
            .collect()
    }
}

impl Resolve for FieldGroupSelectors {
    type Output<E> = FieldHandle<E>;

    fn resolve<H: FormHost>(&self, resolver: &mut Resolver<'_, H>) -> FieldHandle<H::Element> {
        FieldHandle {
            field: self.field.resolve(resolver),
            input: self.input.resolve(resolver),
            error: self.error.resolve(resolver),
            toggle: self.toggle.resolve(resolver).flatten(),
            toggle_icon: self.toggle_icon.resolve(resolver).flatten(),
        }
    }
}

impl Resolve for FieldSelectors {
    type Output<E> = FieldHandles<E>;

    fn resolve<H: FormHost>(&self, resolver: &mut Resolver<'_, H>) -> FieldHandles<H::Element> {
        FieldHandles {
            email: self.email.resolve(resolver),
            phone: self.phone.resolve(resolver),
            password: self.password.resolve(resolver),
            confirm_password: self.confirm_password.resolve(resolver),
        }
    }
}

/// The root selector itself is not resolved here: the root is found first and
/// scopes everything else.
impl Resolve for FormSelectors {
    type Output<E> = FormHandles<E>;

    fn resolve<H: FormHost>(&self, resolver: &mut Resolver<'_, H>) -> FormHandles<H::Element> {
        FormHandles {
            root: resolver.root(),
            segment_options: self.segmented_button.resolve(resolver),
            fields: self.fields.resolve(resolver),
        }
    }
}
