//! Discounts list

use crate::i18n::I18n;
use crate::models::Discount;
use crate::view::action::Action;
use crate::view::node::{el, text_el, Node};

/// ` (c 2025-01-01 по 2025-02-01)`, or empty when neither date is set
fn validity(discount: &Discount, i18n: &I18n) -> String {
    let mut parts = String::new();
    if let Some(start) = discount.start_date.as_deref().filter(|d| !d.is_empty()) {
        parts.push_str(&i18n.tf("discounts.from", &[("date", start)]));
    }
    if let Some(end) = discount.end_date.as_deref().filter(|d| !d.is_empty()) {
        parts.push_str(&i18n.tf("discounts.to", &[("date", end)]));
    }
    if parts.is_empty() {
        parts
    } else {
        format!(" ({})", parts.trim())
    }
}

/// Current offers; admins get a delete button per entry
pub fn render_discounts(discounts: &[Discount], is_admin: bool, i18n: &I18n) -> Node {
    if discounts.is_empty() {
        return el("p").text(i18n.t("discounts.empty")).into();
    }

    let mut nodes: Vec<Node> = vec![el("h4").text(i18n.t("discounts.title")).into()];
    nodes.extend(discounts.iter().map(|discount| {
        let percent = discount
            .discount_percent
            .map(|p| p.to_string())
            .unwrap_or_default();
        el("div")
            .class("schedule-item discount-item")
            .child(text_el("div", "schedule-day", format!("{} — {}%", discount.name, percent)))
            .child(text_el(
                "div",
                "schedule-time",
                format!("{}{}", discount.discount_type, validity(discount, i18n)),
            ))
            .child_opt(is_admin.then(|| {
                el("div").class("discount-actions").child(
                    el("button")
                        .class("btn btn-secondary")
                        .on_click(Action::DeleteDiscount { discount_id: discount.id })
                        .text(i18n.t("discounts.delete")),
                )
            }))
            .into()
    }));
    Node::Fragment(nodes)
}
