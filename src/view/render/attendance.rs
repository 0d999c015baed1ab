//! Attendance views: groups, dates, roster and statistics

use crate::i18n::I18n;
use crate::models::{AbsenceReason, AttendanceGroup, AttendanceStat, DateState, RosterEntry, ScheduledDate};
use crate::utils::helpers::{format_ru_date, percentage_class};
use crate::view::action::{Action, ChangeAction};
use crate::view::node::{el, text_el, Element, Node};
use super::error_block;

/// Groups available for attendance taking, each with a statistics button
pub fn render_attendance_groups(groups: &[AttendanceGroup], i18n: &I18n) -> Node {
    let mut nodes: Vec<Node> = vec![el("div")
        .class("section-header")
        .child(el("h4").text(i18n.t("attendance.choose_group")))
        .into()];

    nodes.extend(groups.iter().map(|group| {
        el("div")
            .class("attendance-group")
            .child(
                el("div")
                    .class("attendance-group-select")
                    .on_click(Action::SelectAttendanceGroup {
                        group_id: group.id,
                        group_name: group.name.clone(),
                    })
                    .child(el("h4").text(group.name.clone()))
                    .child(el("p").text(group.description.clone().unwrap_or_default())),
            )
            .child(
                el("div").child(
                    el("button")
                        .class("btn btn-secondary btn-small")
                        .on_click(Action::LoadAttendanceStats { group_id: group.id })
                        .text(i18n.t("attendance.stats_button")),
                ),
            )
            .into()
    }));

    Node::Fragment(nodes)
}

/// Scheduled dates of a group, marked new, pending or completed
pub fn render_attendance_dates(dates: &[ScheduledDate], group_id: i64, group_name: &str, i18n: &I18n) -> Node {
    if dates.is_empty() {
        return error_block(i18n.t("attendance.no_dates")).into();
    }

    let mut nodes: Vec<Node> = vec![el("div")
        .class("section-header")
        .child(el("h4").text(group_name))
        .child(el("p").text(i18n.t("attendance.choose_date")))
        .into()];

    nodes.extend(dates.iter().map(|date| {
        let (state_class, state_key) = match date.state() {
            DateState::New => ("", "attendance.state.new"),
            DateState::Pending => ("pending", "attendance.state.pending"),
            DateState::Completed => ("completed", "attendance.state.completed"),
        };

        el("div")
            .class(&format!("attendance-date {}", state_class))
            .on_click(Action::SelectAttendanceDate {
                date: date.date.clone(),
                display: date.full_label(),
            })
            .child(
                el("div")
                    .class("date-row")
                    .child(
                        el("div")
                            .child(text_el("div", "date-label", date.short_label()))
                            .child(text_el(
                                "div",
                                "date-time",
                                format!("{} - {}", date.start_time, date.end_time),
                            )),
                    )
                    .child(text_el("div", "date-state", i18n.t(state_key))),
            )
            .into()
    }));

    nodes.push(
        el("div")
            .child(
                el("button")
                    .class("btn btn-secondary")
                    .on_click(Action::LoadAttendanceStats { group_id })
                    .text(i18n.t("attendance.group_stats")),
            )
            .into(),
    );

    Node::Fragment(nodes)
}

/// Attendance roster for one date
///
/// The absence-reason select of a row is hidden while the participant is
/// present. Completed sessions get a disabled save button with no action.
pub fn render_attendance_roster(
    entries: &[RosterEntry],
    group_name: &str,
    date_display: &str,
    is_completed: bool,
    i18n: &I18n,
) -> Node {
    if entries.is_empty() {
        return error_block(i18n.t("attendance.no_participants")).into();
    }

    let mut nodes: Vec<Node> = vec![el("div")
        .class("section-header")
        .child(el("h4").text(group_name))
        .child(el("p").text(date_display))
        .into()];

    nodes.extend(entries.iter().map(|entry| roster_row(entry, i18n).into()));

    let save_label = if is_completed {
        i18n.t("attendance.already_saved")
    } else {
        i18n.t("attendance.save")
    };
    nodes.push(
        el("div")
            .child(
                el("button")
                    .id("saveAttendanceBtn")
                    .class("btn")
                    .on_click(Action::SaveAttendance)
                    .disabled(is_completed)
                    .text(save_label),
            )
            .into(),
    );

    Node::Fragment(nodes)
}

/// Id of the absence-reason block of a roster row
pub fn absence_reason_id(participant_id: i64) -> String {
    format!("absence-reason-{}", participant_id)
}

fn roster_row(entry: &RosterEntry, i18n: &I18n) -> Element {
    let present = entry.is_present;
    let selected_reason = entry.absence_reason.unwrap_or_default();

    let reason_options = AbsenceReason::ALL.into_iter().map(|reason| {
        let option = el("option")
            .attr("value", reason.key())
            .text(i18n.t(&format!("attendance.reason.{}", reason.key())));
        if reason == selected_reason {
            option.attr("selected", "selected")
        } else {
            option
        }
    });

    el("div")
        .class("participant-item")
        .attr("data-participant-id", entry.id.to_string())
        .child(
            el("div")
                .class("participant-info")
                .child(text_el("div", "participant-name", entry.full_name.clone()))
                .child(text_el("div", "participant-phone", entry.parent_phone.clone())),
        )
        .child(
            el("div")
                .class("attendance-controls")
                .child(
                    el("div")
                        .class("attendance-toggle")
                        .child(
                            el("div")
                                .class(if present { "toggle-switch active" } else { "toggle-switch" })
                                .on_click(Action::ToggleAttendance { participant_id: entry.id }),
                        )
                        .child(text_el(
                            "span",
                            if present { "attendance-status present" } else { "attendance-status absent" },
                            if present { i18n.t("attendance.present") } else { i18n.t("attendance.absent") },
                        )),
                )
                .child(
                    el("div")
                        .id(absence_reason_id(entry.id))
                        .class("absence-reason")
                        .hidden(present)
                        .child(
                            el("select")
                                .class("reason-select")
                                .on_change(ChangeAction::AbsenceReason { participant_id: entry.id })
                                .children(reason_options),
                        ),
                ),
        )
}

/// `85` for whole numbers, `66.7` otherwise
fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{:.0}", percentage)
    } else {
        format!("{}", percentage)
    }
}

/// Per-date attendance statistics of a group
pub fn render_attendance_stats(stats: &[AttendanceStat], i18n: &I18n) -> Node {
    if stats.is_empty() {
        return error_block(i18n.t("attendance.no_stats")).into();
    }

    Node::Fragment(
        stats
            .iter()
            .map(|stat| {
                el("div")
                    .class("stats-item")
                    .child(
                        el("div")
                            .class("stats-header")
                            .child(text_el(
                                "div",
                                "stats-date",
                                format!("{} {}", stat.day_name, format_ru_date(&stat.date)),
                            ))
                            .child(text_el(
                                "div",
                                &format!("stats-percentage {}", percentage_class(stat.percentage)),
                                format!("{}%", format_percentage(stat.percentage)),
                            )),
                    )
                    .child(
                        el("div")
                            .class("stats-details")
                            .child(el("span").text(i18n.tf("attendance.stats.total", &[("count", &stat.total.to_string())])))
                            .child(el("span").text(i18n.tf("attendance.stats.present", &[("count", &stat.present.to_string())])))
                            .child(el("span").text(i18n.tf("attendance.stats.absent", &[("count", &stat.absent.to_string())]))),
                    )
                    .into()
            })
            .collect(),
    )
}
