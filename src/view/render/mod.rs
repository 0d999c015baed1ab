//! Render functions
//!
//! Pure functions from domain data to view trees. Callers mount the result
//! into a container or a modal; nothing here touches state or the network.

pub mod groups;
pub mod students;
pub mod payments;
pub mod attendance;
pub mod discounts;
pub mod contacts;
pub mod parent;

pub use groups::{render_main, render_directions, render_category, render_group_info, render_group_options};
pub use students::{render_group_students, render_students_table};
pub use payments::{render_payments, render_group_payments};
pub use attendance::{render_attendance_groups, render_attendance_dates, render_attendance_roster, render_attendance_stats};
pub use discounts::render_discounts;
pub use contacts::{render_contact_info, render_dynamic_contacts, ContactCard};
pub use parent::{
    render_authorized_participants, render_parent_participants, render_participant_attendance,
    render_participant_options,
};

use crate::i18n::I18n;
use super::action::Action;
use super::ids::ModalId;
use super::node::{el, text_el, Element, Node};

/// Standard modal frame with a title, a close button and a body
pub fn modal(modal: ModalId, title: &str, body: impl Into<Node>) -> Element {
    el("div").class("modal").id(modal.id()).child(
        el("div")
            .class("modal-content")
            .child(
                el("div")
                    .class("modal-header")
                    .child(text_el("h3", "modal-title", title))
                    .child(
                        el("button")
                            .class("close-btn")
                            .on_click(Action::CloseModal { modal })
                            .text("×"),
                    ),
            )
            .child(el("div").class("modal-body").child(body)),
    )
}

/// `<div class="error">` block used for empty and failed loads
pub fn error_block(text: impl Into<String>) -> Element {
    text_el("div", "error", text)
}

/// Placeholder option followed by `(value, label)` options
pub fn select_options<I>(placeholder: &str, options: I) -> Node
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut nodes = vec![el("option").attr("value", "").text(placeholder).into()];
    nodes.extend(
        options
            .into_iter()
            .map(|(value, label)| el("option").attr("value", value).text(label).into()),
    );
    Node::Fragment(nodes)
}

/// Localized error block for a container whose load failed
pub fn load_error(i18n: &I18n, key: &str) -> Node {
    error_block(i18n.t(key)).into()
}

#[cfg(test)]
pub(crate) fn test_i18n() -> I18n {
    I18n::embedded(&crate::config::Settings::default().i18n).unwrap()
}
