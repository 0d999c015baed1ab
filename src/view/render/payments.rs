//! Payment lists

use crate::i18n::I18n;
use crate::models::{Payment, PaymentStatus};
use crate::view::action::Action;
use crate::view::ids::ModalId;
use crate::view::node::{el, text_el, Element, Node};
use super::modal;

/// The admin payments list; pending rows carry approve and reject buttons
pub fn render_payments(payments: &[Payment], i18n: &I18n) -> Node {
    if payments.is_empty() {
        return el("p").text(i18n.t("payments.empty")).into();
    }
    let mut nodes: Vec<Node> = vec![el("h4").text(i18n.t("payments.title")).into()];
    nodes.extend(payments.iter().map(|p| payment_item(p, i18n).into()));
    Node::Fragment(nodes)
}

/// Modal listing the payments of one group, matched by id or by group name
pub fn render_group_payments(payments: &[Payment], group_id: i64, group_name: &str, i18n: &I18n) -> Element {
    let matching: Vec<&Payment> = payments
        .iter()
        .filter(|p| p.belongs_to(group_id, group_name))
        .collect();

    let body: Node = if matching.is_empty() {
        el("p").text(i18n.t("payments.empty")).into()
    } else {
        Node::Fragment(matching.into_iter().map(|p| payment_item(p, i18n).into()).collect())
    };

    modal(
        ModalId::GroupPaymentsModal,
        &i18n.tf("payments.group_title", &[("group", group_name)]),
        body,
    )
}

pub fn status_text(status: &PaymentStatus, i18n: &I18n) -> String {
    match status {
        PaymentStatus::Other(raw) => raw.clone(),
        known => i18n.t(&format!("payments.status.{}", known.as_str())),
    }
}

fn payment_item(payment: &Payment, i18n: &I18n) -> Element {
    let status = payment.status.as_str();

    let details = el("div")
        .class("payment-details")
        .child(el("div").text(format!("📱 {}", payment.participant_phone.as_deref().unwrap_or(""))))
        .child(el("div").text(format!("🏃‍♂️ {} — {}", payment.sport_group, payment.subscription_type)))
        .child(el("div").text(i18n.tf(
            "payments.amount",
            &[
                ("amount", &payment.amount.to_string()),
                ("method", payment.payment_method.as_deref().unwrap_or("")),
            ],
        )))
        .child(el("div").text(i18n.tf(
            "payments.created",
            &[("date", payment.created_at.as_deref().unwrap_or(""))],
        )))
        .child_opt(
            payment
                .payment_date
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|date| el("div").text(i18n.tf("payments.confirmed", &[("date", date)]))),
        )
        .child_opt(
            payment
                .admin_notes
                .as_deref()
                .filter(|n| !n.is_empty())
                .map(|note| el("div").text(i18n.tf("payments.note", &[("note", note)]))),
        );

    let actions = payment.status.is_pending().then(|| {
        el("div")
            .class("payment-actions")
            .child(
                el("button")
                    .class("btn btn-success")
                    .on_click(Action::ApprovePayment { payment_id: payment.id })
                    .text(i18n.t("payments.approve")),
            )
            .child(
                el("button")
                    .class("btn btn-danger")
                    .on_click(Action::RejectPayment { payment_id: payment.id })
                    .text(i18n.t("payments.reject")),
            )
    });

    el("div")
        .class(&format!("schedule-item payment-item {}", status))
        .child(
            el("div")
                .class("payment-header")
                .child(text_el("div", "payment-participant", payment.participant_name.clone()))
                .child(text_el(
                    "div",
                    &format!("payment-status {}", status),
                    status_text(&payment.status, i18n),
                )),
        )
        .child(details)
        .child_opt(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::view::render::test_i18n as i18n;

    fn payments() -> Vec<Payment> {
        serde_json::from_value(json!([
            {"id": 1, "group_id": 2, "participant_name": "Анна", "sport_group": "Дзюдо",
             "subscription_type": "8 занятий", "amount": 4000, "payment_method": "cash", "status": "pending"},
            {"id": 2, "participant_name": "Борис", "sport_group": "ММА",
             "subscription_type": "12 занятий", "amount": 6000, "is_paid": true, "admin_notes": "ok"},
            {"id": 3, "sport_group_id": 9, "participant_name": "Вера", "sport_group": "Дзюдо",
             "subscription_type": "Разовые занятия", "amount": 600, "status": "rejected"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_only_pending_rows_have_actions() {
        let node = render_payments(&payments(), &i18n());
        assert_eq!(
            node.actions(),
            vec![
                &Action::ApprovePayment { payment_id: 1 },
                &Action::RejectPayment { payment_id: 1 },
            ]
        );
        assert_eq!(node.find_by_class("approved").len(), 2);
        assert!(node.text_content().contains("📝 Заметка: ok"));
    }

    #[test]
    fn test_group_payments_match_id_or_name() {
        let node: Node = render_group_payments(&payments(), 2, "Дзюдо", &i18n()).into();
        assert_eq!(node.find_by_class("payment-item").len(), 2);

        let node: Node = render_group_payments(&payments(), 42, "Бокс", &i18n()).into();
        assert!(node.find_by_class("payment-item").is_empty());
        assert!(node.text_content().contains("Платежей пока нет"));
    }

    #[test]
    fn test_unknown_status_shown_raw() {
        let i18n = i18n();
        assert_eq!(status_text(&PaymentStatus::Other("refunded".into()), &i18n), "refunded");
        assert_eq!(status_text(&PaymentStatus::Rejected, &i18n), "❌ Отклонен");
    }
}
