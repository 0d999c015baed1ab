//! Parent views: authorized participants and attendance history

use crate::i18n::I18n;
use crate::models::{AuthorizedParticipant, ParticipantAttendance};
use crate::utils::helpers::format_ru_date;
use crate::view::action::Action;
use crate::view::node::{el, text_el, Node};
use super::{error_block, select_options};

/// Participants the parent has claimed with a code
pub fn render_authorized_participants(participants: &[AuthorizedParticipant], i18n: &I18n) -> Node {
    let title = el("h4").text(i18n.t("auth.list_title"));
    if participants.is_empty() {
        return Node::Fragment(vec![
            title.into(),
            text_el("p", "muted", i18n.t("auth.none")).into(),
        ]);
    }

    let mut nodes: Vec<Node> = vec![title.into()];
    nodes.extend(participants.iter().map(|p| {
        el("div")
            .class("authorized-participant")
            .child(el("h5").text(p.full_name.clone()))
            .child(el("p").text(i18n.tf("auth.phone", &[("phone", p.parent_phone.as_deref().unwrap_or(""))])))
            .child(el("p").text(i18n.tf(
                "auth.authorized_at",
                &[("date", p.authorized_at.as_deref().unwrap_or(""))],
            )))
            .into()
    }));
    Node::Fragment(nodes)
}

/// Picker of the parent's participants for the attendance history
pub fn render_parent_participants(participants: &[AuthorizedParticipant], i18n: &I18n) -> Node {
    if participants.is_empty() {
        return error_block(i18n.t("parent.none")).into();
    }

    let mut nodes: Vec<Node> = vec![el("div")
        .class("section-header")
        .child(el("h4").text(i18n.t("parent.choose_participant")))
        .into()];
    nodes.extend(participants.iter().map(|p| {
        el("div")
            .class("attendance-group")
            .on_click(Action::LoadParticipantAttendance {
                participant_id: p.id,
                participant_name: p.full_name.clone(),
            })
            .child(el("h4").text(p.full_name.clone()))
            .child(text_el("p", "muted", i18n.t("parent.click_hint")))
            .into()
    }));
    Node::Fragment(nodes)
}

/// Attendance history of one participant with a way back to the picker
pub fn render_participant_attendance(records: &[ParticipantAttendance], participant_name: &str, i18n: &I18n) -> Node {
    if records.is_empty() {
        return error_block(i18n.t("attendance.no_stats")).into();
    }

    let mut nodes: Vec<Node> = vec![el("div")
        .class("section-header")
        .child(
            el("button")
                .class("back-btn")
                .on_click(Action::BackToParentAttendance)
                .text(i18n.t("parent.back")),
        )
        .child(el("h4").text(i18n.t("parent.title")))
        .child(text_el("p", "muted", participant_name))
        .into()];

    nodes.extend(records.iter().map(|record| {
        let (status_class, status_key) = if record.is_present {
            ("attendance-status present", "parent.was_present")
        } else {
            ("attendance-status absent", "parent.was_absent")
        };
        el("div")
            .class("stats-item")
            .child(
                el("div")
                    .class("stats-header")
                    .child(text_el(
                        "div",
                        "stats-date",
                        format!("{} {}", record.day_name, format_ru_date(&record.date)),
                    ))
                    .child(text_el("div", status_class, i18n.t(status_key))),
            )
            .child(
                el("div")
                    .class("stats-details")
                    .child(el("span").text(i18n.tf("parent.group", &[("group", &record.sport_group)])))
                    .child(el("span").text(i18n.tf(
                        "parent.time",
                        &[("start", &record.start_time), ("end", &record.end_time)],
                    ))),
            )
            .into()
    }));
    Node::Fragment(nodes)
}

/// `<option>` list of the parent's authorized participants for the payment form
pub fn render_participant_options(participants: &[AuthorizedParticipant], i18n: &I18n) -> Node {
    if participants.is_empty() {
        return select_options(&i18n.t("payment_form.no_participants"), Vec::new());
    }
    select_options(
        &i18n.t("payment_form.choose_participant"),
        participants.iter().map(|p| (p.id.to_string(), p.full_name.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::view::render::test_i18n as i18n;

    fn participants() -> Vec<AuthorizedParticipant> {
        serde_json::from_value(json!([
            {"id": 11, "full_name": "Анна Иванова", "parent_phone": "+7 900", "authorized_at": "2025-09-01"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_authorized_list_and_empty_state() {
        let i18n = i18n();
        let node = render_authorized_participants(&participants(), &i18n);
        assert_eq!(node.find_by_class("authorized-participant").len(), 1);

        let empty = render_authorized_participants(&[], &i18n);
        assert!(empty.text_content().contains("У вас пока нет авторизованных участников"));
    }

    #[test]
    fn test_picker_binds_participant() {
        let node = render_parent_participants(&participants(), &i18n());
        assert_eq!(
            node.actions(),
            vec![&Action::LoadParticipantAttendance {
                participant_id: 11,
                participant_name: "Анна Иванова".to_string(),
            }]
        );
    }

    #[test]
    fn test_history_has_back_button() {
        let records: Vec<ParticipantAttendance> = serde_json::from_value(json!([
            {"date": "2025-09-01", "day_name": "Пн", "sport_group": "Дзюдо",
             "start_time": "18:00", "end_time": "19:00", "is_present": false}
        ]))
        .unwrap();
        let node = render_participant_attendance(&records, "Анна", &i18n());
        assert!(node.actions().contains(&&Action::BackToParentAttendance));
        assert_eq!(node.find_by_class("absent").len(), 1);
        assert!(node.text_content().contains("Время: 18:00 - 19:00"));
    }

    #[test]
    fn test_participant_options() {
        let html = render_participant_options(&participants(), &i18n()).render_html();
        assert!(html.starts_with("<option value=\"\">Выберите участника</option>"));
        assert!(html.contains("<option value=\"11\">Анна Иванова</option>"));
    }
}
