//! `FormHost` over the live DOM.
//!
//! Every DOM call that can throw is logged and ignored; nothing is re-thrown
//! into the page.

use lib_form::{FormHost, InputKind, SelectionRange};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

pub struct WebHost {
    document: Document,
}

impl WebHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

fn log_failure(action: &str, result: Result<(), wasm_bindgen::JsValue>) {
    if let Err(err) = result {
        log::error!("[Form] {} failed: {:?}", action, err);
    }
}

impl FormHost for WebHost {
    type Element = Element;

    fn find_root(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query(&self, root: &Element, selector: &str) -> Option<Element> {
        if root.matches(selector).unwrap_or(false) {
            return Some(root.clone());
        }
        self.query_within(root, selector)
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        element.closest(selector).ok().flatten()
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Option<Element> {
        match scope.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::error!("[Form] Invalid selector {}: {:?}", selector, err);
                None
            }
        }
    }

    fn set_class(&self, element: &Element, class: &str, on: bool) {
        let result = element.class_list().toggle_with_force(class, on).map(|_| ());
        log_failure("classList.toggle", result);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_border_color(&self, element: &Element, color: &str) {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        let result = if color.is_empty() {
            style.remove_property("border-color").map(|_| ())
        } else {
            style.set_property("border-color", color)
        };
        log_failure("style.borderColor", result);
    }

    fn focus(&self, element: &Element) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            log_failure("focus", html.focus());
        }
    }

    fn value(&self, element: &Element) -> String {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_input_kind(&self, element: &Element, kind: InputKind) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_type(kind.as_str());
        }
    }

    fn selection(&self, element: &Element) -> Option<SelectionRange> {
        let input = element.dyn_ref::<HtmlInputElement>()?;
        let start = input.selection_start().ok().flatten()?;
        let end = input.selection_end().ok().flatten()?;
        Some(SelectionRange::new(start, end))
    }

    fn set_selection(&self, element: &Element, range: SelectionRange) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            log_failure("setSelectionRange", input.set_selection_range(range.start, range.end));
        }
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        log_failure("setAttribute", element.set_attribute(name, value));
    }

    fn set_image_source(&self, element: &Element, src: &str) {
        match element.dyn_ref::<HtmlImageElement>() {
            Some(image) => image.set_src(src),
            None => self.set_attribute(element, "src", src),
        }
    }
}
