//! Inline error rendering for field groups.

use crate::config::FormConfig;
use crate::host::FormHost;
use crate::selectors::{FieldHandle, FieldHandles};

/// Writes and clears error text and the error border on inputs.
#[derive(Debug, Clone)]
pub struct ErrorPresenter {
    error_color: String,
    group_selector: String,
    input_selector: String,
    hidden_class: String,
}

impl ErrorPresenter {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            error_color: config.error_color.clone(),
            group_selector: config.field_group_selector(),
            input_selector: config.field_input_selector(),
            hidden_class: config.classes.visually_hidden.clone(),
        }
    }

    /// Show `message` on the field and mark its input.
    ///
    /// The input is located through the error display's enclosing field group.
    /// A failed lookup means the markup and configuration disagree; it is logged
    /// and the message is still shown.
    pub fn show<H: FormHost>(&self, host: &H, field: &FieldHandle<H::Element>, message: &str) {
        let Some(error) = &field.error else {
            tracing::warn!("[Form] Cannot show \"{}\": field has no error display", message);
            return;
        };

        host.set_text(error, message);

        let input = host
            .closest(error, &self.group_selector)
            .and_then(|group| host.query_within(&group, &self.input_selector));

        match input {
            Some(input) => host.set_border_color(&input, &self.error_color),
            None => tracing::error!(
                "[Form] No `{}` inside `{}` enclosing the error display",
                self.input_selector,
                self.group_selector
            ),
        }
    }

    pub fn clear<H: FormHost>(&self, host: &H, field: &FieldHandle<H::Element>) {
        if let Some(error) = &field.error {
            host.set_text(error, "");
        }
        if let Some(input) = &field.input {
            host.set_border_color(input, "");
        }
    }

    /// Clear every known field, visible or not.
    pub fn clear_all<H: FormHost>(&self, host: &H, fields: &FieldHandles<H::Element>) {
        for (_, field) in fields.iter() {
            self.clear(host, field);
        }
    }

    /// Clear only fields whose group is currently hidden.
    pub fn clear_hidden<H: FormHost>(&self, host: &H, fields: &FieldHandles<H::Element>) {
        for (_, field) in fields.iter() {
            let hidden = field
                .field
                .as_ref()
                .is_some_and(|group| host.has_class(group, &self.hidden_class));

            if hidden {
                self.clear(host, field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::{FormSelectors, Resolve, Resolver};
    use crate::testing::FakeDom;
    use crate::validation::FieldKey;

    fn setup(dom: &FakeDom) -> (ErrorPresenter, FieldHandles<usize>) {
        let root = dom.find_root("[data-js-form]").unwrap();
        let mut resolver = Resolver::new(dom, &root);
        let handles = FormSelectors::default().resolve(&mut resolver);
        (ErrorPresenter::from_config(&FormConfig::default()), handles.fields)
    }

    #[test]
    fn test_show_sets_text_and_border() {
        let dom = FakeDom::signup_form();
        let (presenter, fields) = setup(&dom);

        presenter.show(&dom, &fields.email, "Invalid email address");

        assert_eq!(dom.text_of("[data-js-error-email]"), "Invalid email address");
        assert_eq!(dom.border_of("[data-js-input-email]"), "var(--color-red)");
        assert_eq!(dom.border_of("[data-js-input-phone]"), "");
    }

    #[test]
    fn test_show_without_enclosing_input_still_sets_text() {
        let dom = FakeDom::signup_form();
        dom.remove_match("[data-js-input-email]", ".field__input");
        let (presenter, fields) = setup(&dom);

        presenter.show(&dom, &fields.email, "Invalid email address");

        assert_eq!(dom.text_of("[data-js-error-email]"), "Invalid email address");
        assert_eq!(dom.border_of("[data-js-input-email]"), "");
    }

    #[test]
    fn test_clear_all() {
        let dom = FakeDom::signup_form();
        let (presenter, fields) = setup(&dom);
        for key in FieldKey::ALL {
            presenter.show(&dom, fields.get(key), "error");
        }

        presenter.clear_all(&dom, &fields);

        for name in ["email", "phone", "password", "confirm-password"] {
            assert_eq!(dom.text_of(&format!("[data-js-error-{}]", name)), "");
            assert_eq!(dom.border_of(&format!("[data-js-input-{}]", name)), "");
        }
    }

    #[test]
    fn test_clear_hidden_leaves_visible_errors() {
        let dom = FakeDom::signup_form();
        let (presenter, fields) = setup(&dom);
        presenter.show(&dom, &fields.email, "Invalid email address");
        presenter.show(&dom, &fields.phone, "Invalid phone number");
        presenter.show(&dom, &fields.password, "weak");

        // Stock markup starts with the phone group hidden.
        presenter.clear_hidden(&dom, &fields);

        assert_eq!(dom.text_of("[data-js-error-phone]"), "");
        assert_eq!(dom.border_of("[data-js-input-phone]"), "");
        assert_eq!(dom.text_of("[data-js-error-email]"), "Invalid email address");
        assert_eq!(dom.text_of("[data-js-error-password]"), "weak");
    }
}
