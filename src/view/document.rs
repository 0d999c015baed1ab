//! In-memory page: mounted containers, modals, visibility and forms

use std::collections::{BTreeSet, HashMap, HashSet};
use super::form::FormData;
use super::ids::{FormId, ModalId};
use super::node::Node;

/// The page the controller renders into
///
/// Containers are addressed by id and hold the last tree mounted into them.
/// Toggled elements such as the role panels start hidden.
#[derive(Debug, Clone, Default)]
pub struct Document {
    containers: HashMap<String, Node>,
    modal_content: HashMap<ModalId, Node>,
    open_modals: BTreeSet<ModalId>,
    visible: HashSet<String>,
    forms: HashMap<FormId, FormData>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of a container
    pub fn mount(&mut self, container: &str, node: impl Into<Node>) {
        self.containers.insert(container.to_string(), node.into());
    }

    pub fn container(&self, container: &str) -> Option<&Node> {
        self.containers.get(container)
    }

    pub fn container_html(&self, container: &str) -> String {
        self.container(container).map(Node::render_html).unwrap_or_default()
    }

    /// Open a modal, keeping its current content
    pub fn open_modal(&mut self, modal: ModalId) {
        self.open_modals.insert(modal);
    }

    /// Open a modal with freshly built content
    pub fn show_modal_with(&mut self, modal: ModalId, content: impl Into<Node>) {
        self.modal_content.insert(modal, content.into());
        self.open_modals.insert(modal);
    }

    pub fn close_modal(&mut self, modal: ModalId) {
        self.open_modals.remove(&modal);
    }

    pub fn is_modal_open(&self, modal: ModalId) -> bool {
        self.open_modals.contains(&modal)
    }

    pub fn open_modals(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.open_modals.iter().copied()
    }

    pub fn modal(&self, modal: ModalId) -> Option<&Node> {
        self.modal_content.get(&modal)
    }

    pub fn show(&mut self, id: &str) {
        self.visible.insert(id.to_string());
    }

    pub fn hide(&mut self, id: &str) {
        self.visible.remove(id);
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if visible {
            self.show(id);
        } else {
            self.hide(id);
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Current values of a form; never-touched forms read as empty
    pub fn form(&self, form: FormId) -> FormData {
        self.forms.get(&form).cloned().unwrap_or_default()
    }

    pub fn form_mut(&mut self, form: FormId) -> &mut FormData {
        self.forms.entry(form).or_default()
    }

    pub fn reset_form(&mut self, form: FormId) {
        self.forms.remove(&form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::node::el;

    #[test]
    fn test_panels_start_hidden() {
        let mut document = Document::new();
        assert!(!document.is_visible("adminPanel"));
        document.show("adminPanel");
        assert!(document.is_visible("adminPanel"));
        document.set_visible("adminPanel", false);
        assert!(!document.is_visible("adminPanel"));
    }

    #[test]
    fn test_modal_lifecycle() {
        let mut document = Document::new();
        document.show_modal_with(ModalId::GroupInfoModal, el("div").text("info"));
        assert!(document.is_modal_open(ModalId::GroupInfoModal));
        document.close_modal(ModalId::GroupInfoModal);
        assert!(!document.is_modal_open(ModalId::GroupInfoModal));
        assert_eq!(document.modal(ModalId::GroupInfoModal).unwrap().text_content(), "info");
    }

    #[test]
    fn test_form_reset() {
        let mut document = Document::new();
        document.form_mut(FormId::AuthorizationForm).set("authCode", "123456");
        assert_eq!(document.form(FormId::AuthorizationForm).value("authCode"), "123456");
        document.reset_form(FormId::AuthorizationForm);
        assert!(document.form(FormId::AuthorizationForm).is_empty());
    }
}
