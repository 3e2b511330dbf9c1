//! In-memory element tree implementing [`FormHost`] for unit tests.
//!
//! Elements are indices into a node list. A node matches a selector when the
//! selector is one of its attribute tags (`[data-js-...]`) or `.class` for one of
//! its classes.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::host::{FormHost, InputKind, SelectionRange};

#[derive(Debug, Default)]
struct Node {
    tags: Vec<String>,
    classes: BTreeSet<String>,
    parent: Option<usize>,
    detached: bool,
    text: String,
    value: String,
    kind: Option<InputKind>,
    selection: Option<SelectionRange>,
    attributes: HashMap<String, String>,
    border: String,
    image: String,
}

impl Node {
    fn matches(&self, selector: &str) -> bool {
        self.tags.iter().any(|tag| tag == selector)
            || selector
                .strip_prefix('.')
                .is_some_and(|class| self.classes.contains(class))
    }
}

#[derive(Debug, Default)]
pub struct FakeDom {
    nodes: RefCell<Vec<Node>>,
    focused: Cell<Option<usize>>,
}

impl FakeDom {
    /// Stock signup markup: email segment active, phone group hidden.
    pub fn signup_form() -> Self {
        let dom = FakeDom::default();

        let root = dom.add(None, &["[data-js-form]"], &[]);

        let group = dom.add(Some(root), &["[data-js-segmented-button]"], &["segmented-button"]);
        dom.add(
            Some(group),
            &["[data-js-segmented-button-item-email]"],
            &["segmented-button__item", "segmented-button__item--active"],
        );
        dom.add(
            Some(group),
            &["[data-js-segmented-button-item-phone]"],
            &["segmented-button__item"],
        );

        dom.add_field(root, "email", false, false);
        dom.add_field(root, "phone", false, true);
        dom.add_field(root, "password", true, false);
        dom.add_field(root, "confirm-password", true, false);

        dom
    }

    /// Stock markup with every element matching one of `selectors` detached.
    pub fn signup_form_without(selectors: &[&str]) -> Self {
        let dom = Self::signup_form();
        for node in dom.nodes.borrow_mut().iter_mut() {
            if selectors.iter().any(|selector| node.matches(selector)) {
                node.detached = true;
            }
        }
        dom
    }

    fn add(&self, parent: Option<usize>, tags: &[&str], classes: &[&str]) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent,
            ..Node::default()
        });
        nodes.len() - 1
    }

    fn add_field(&self, root: usize, name: &str, toggle: bool, hidden: bool) {
        let classes: &[&str] = if hidden { &["field", "visually-hidden"] } else { &["field"] };
        let field_tag = format!("[data-js-field-{}]", name);
        let field = self.add(Some(root), &[field_tag.as_str()], classes);

        let input_tag = format!("[data-js-input-{}]", name);
        let input = self.add(Some(field), &[input_tag.as_str()], &["field__input"]);
        self.nodes.borrow_mut()[input].kind = Some(if toggle {
            InputKind::Password
        } else {
            InputKind::Text
        });

        if toggle {
            let toggle_tag = format!("[data-js-toggle-{}]", name);
            let icon_tag = format!("[data-js-toggle-{}-icon]", name);
            let button = self.add(Some(field), &[toggle_tag.as_str()], &[]);
            self.add(Some(button), &[icon_tag.as_str()], &[]);
        }

        let error_tag = format!("[data-js-error-{}]", name);
        self.add(Some(field), &[error_tag.as_str()], &["field__error"]);
    }

    /// Node and all its ancestors are attached.
    fn attached(nodes: &[Node], id: usize) -> bool {
        let mut current = Some(id);
        while let Some(index) = current {
            if nodes[index].detached {
                return false;
            }
            current = nodes[index].parent;
        }
        true
    }

    fn is_descendant(nodes: &[Node], id: usize, ancestor: usize) -> bool {
        let mut current = nodes[id].parent;
        while let Some(index) = current {
            if index == ancestor {
                return true;
            }
            current = nodes[index].parent;
        }
        false
    }

    fn find(&self, selector: &str) -> usize {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .find(|&id| nodes[id].matches(selector))
            .unwrap_or_else(|| panic!("no node for {}", selector))
    }

    // ------------------------------------------------------------------
    // Inspection / simulated user input
    // ------------------------------------------------------------------

    pub fn text_of(&self, selector: &str) -> String {
        self.nodes.borrow()[self.find(selector)].text.clone()
    }

    pub fn border_of(&self, selector: &str) -> String {
        self.nodes.borrow()[self.find(selector)].border.clone()
    }

    pub fn has_class_on(&self, selector: &str, class: &str) -> bool {
        self.nodes.borrow()[self.find(selector)].classes.contains(class)
    }

    pub fn kind_of(&self, selector: &str) -> Option<InputKind> {
        self.nodes.borrow()[self.find(selector)].kind
    }

    pub fn attribute_of(&self, selector: &str, name: &str) -> Option<String> {
        self.nodes.borrow()[self.find(selector)].attributes.get(name).cloned()
    }

    pub fn image_of(&self, selector: &str) -> String {
        self.nodes.borrow()[self.find(selector)].image.clone()
    }

    pub fn selection_of(&self, selector: &str) -> Option<SelectionRange> {
        self.nodes.borrow()[self.find(selector)].selection
    }

    pub fn is_focused(&self, selector: &str) -> bool {
        self.focused.get() == Some(self.find(selector))
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused.get()
    }

    /// Type into an input; the caret lands at the end.
    pub fn type_into(&self, selector: &str, value: &str) {
        let id = self.find(selector);
        let mut nodes = self.nodes.borrow_mut();
        nodes[id].value = value.to_string();
        nodes[id].selection = Some(SelectionRange::caret(value.chars().count() as u32));
    }

    pub fn select_range(&self, selector: &str, range: SelectionRange) {
        let id = self.find(selector);
        self.nodes.borrow_mut()[id].selection = Some(range);
    }

    /// Stop a node from matching `selector` (tag or class).
    pub fn remove_match(&self, node_selector: &str, selector: &str) {
        let id = self.find(node_selector);
        let mut nodes = self.nodes.borrow_mut();
        nodes[id].tags.retain(|tag| tag != selector);
        if let Some(class) = selector.strip_prefix('.') {
            nodes[id].classes.remove(class);
        }
    }
}

impl FormHost for FakeDom {
    type Element = usize;

    fn find_root(&self, selector: &str) -> Option<usize> {
        let nodes = self.nodes.borrow();
        (0..nodes.len()).find(|&id| nodes[id].matches(selector) && Self::attached(&nodes, id))
    }

    fn query(&self, root: &usize, selector: &str) -> Option<usize> {
        let nodes = self.nodes.borrow();
        if nodes[*root].matches(selector) {
            return Some(*root);
        }
        drop(nodes);
        self.query_within(root, selector)
    }

    fn closest(&self, element: &usize, selector: &str) -> Option<usize> {
        let nodes = self.nodes.borrow();
        let mut current = Some(*element);
        while let Some(id) = current {
            if nodes[id].matches(selector) {
                return Some(id);
            }
            current = nodes[id].parent;
        }
        None
    }

    fn query_within(&self, scope: &usize, selector: &str) -> Option<usize> {
        let nodes = self.nodes.borrow();
        (0..nodes.len()).find(|&id| {
            nodes[id].matches(selector)
                && Self::is_descendant(&nodes, id, *scope)
                && Self::attached(&nodes, id)
        })
    }

    fn set_class(&self, element: &usize, class: &str, on: bool) {
        let mut nodes = self.nodes.borrow_mut();
        if on {
            nodes[*element].classes.insert(class.to_string());
        } else {
            nodes[*element].classes.remove(class);
        }
    }

    fn has_class(&self, element: &usize, class: &str) -> bool {
        self.nodes.borrow()[*element].classes.contains(class)
    }

    fn set_text(&self, element: &usize, text: &str) {
        self.nodes.borrow_mut()[*element].text = text.to_string();
    }

    fn set_border_color(&self, element: &usize, color: &str) {
        self.nodes.borrow_mut()[*element].border = color.to_string();
    }

    fn focus(&self, element: &usize) {
        self.focused.set(Some(*element));
    }

    fn value(&self, element: &usize) -> String {
        self.nodes.borrow()[*element].value.clone()
    }

    /// Like a browser, switching the input type drops the selection to a caret
    /// at the end of the value.
    fn set_input_kind(&self, element: &usize, kind: InputKind) {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[*element];
        node.kind = Some(kind);
        node.selection = Some(SelectionRange::caret(node.value.chars().count() as u32));
    }

    fn selection(&self, element: &usize) -> Option<SelectionRange> {
        self.nodes.borrow()[*element].selection
    }

    fn set_selection(&self, element: &usize, range: SelectionRange) {
        self.nodes.borrow_mut()[*element].selection = Some(range);
    }

    fn set_attribute(&self, element: &usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[*element]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_image_source(&self, element: &usize, src: &str) {
        self.nodes.borrow_mut()[*element].image = src.to_string();
    }
}
