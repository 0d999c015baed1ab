//! Directions, category and group detail views

use crate::i18n::I18n;
use crate::models::{Category, SportGroup};
use crate::view::action::Action;
use crate::view::ids::ModalId;
use crate::view::node::{el, text_el, Element, Node};
use super::{error_block, modal, select_options};

/// Top-level view: the directions, or an error block when no groups exist
pub fn render_main(groups: &[SportGroup], i18n: &I18n) -> Node {
    if groups.is_empty() {
        return error_block(i18n.t("directions.empty")).into();
    }
    render_directions(i18n)
}

/// The four fixed direction cards
pub fn render_directions(i18n: &I18n) -> Node {
    Node::Fragment(
        Category::ALL
            .iter()
            .map(|category| {
                el("div")
                    .class("sport-group-card direction-card")
                    .on_click(Action::OpenCategory { category: *category })
                    .child(
                        el("div")
                            .class("group-content")
                            .child(el("h3").text(i18n.t(&format!("directions.title.{}", category.key())))),
                    )
                    .into()
            })
            .collect(),
    )
}

/// Groups of one direction, with admin actions when `is_admin`
pub fn render_category(category: Category, groups: &[SportGroup], is_admin: bool, i18n: &I18n) -> Node {
    let header = el("div")
        .class("category-header")
        .child(
            el("button")
                .class("btn secondary")
                .on_click(Action::ShowDirections)
                .text(i18n.t("common.back")),
        )
        .child(text_el(
            "h2",
            "category-title",
            i18n.t(&format!("directions.short.{}", category.key())),
        ));

    let cards = groups
        .iter()
        .filter(|group| group.in_category(category))
        .map(|group| group_card(group, is_admin, i18n));

    Node::Fragment(vec![
        header.into(),
        el("div").class("category-groups").children(cards).into(),
    ])
}

fn group_card(group: &SportGroup, is_admin: bool, i18n: &I18n) -> Element {
    let schedule = group
        .schedule_text
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|schedule| schedule_info(schedule, i18n));

    let content = el("div")
        .class("group-content")
        .on_click(Action::OpenGroupDetails { group_id: group.id })
        .child(el("h3").text(group.name.clone()))
        .child(el("p").text(group.description.clone().unwrap_or_default()))
        .child_opt(schedule)
        .child(
            el("div").class("prices").children(
                price_lines(group, i18n, "groups.price")
                    .into_iter()
                    .map(|text| text_el("span", "price-tag", text)),
            ),
        );

    let actions = is_admin.then(|| {
        let (group_id, group_name) = (group.id, group.name.clone());
        el("div")
            .class("group-actions")
            .child(
                el("button")
                    .class("btn btn-secondary")
                    .on_click(Action::ShowGroupStudents { group_id, group_name: group_name.clone() })
                    .text(i18n.t("groups.actions.students")),
            )
            .child(
                el("button")
                    .class("btn btn-secondary")
                    .on_click(Action::OpenGroupAttendance { group_id, group_name: group_name.clone() })
                    .text(i18n.t("groups.actions.attendance")),
            )
            .child(
                el("button")
                    .class("btn btn-secondary")
                    .on_click(Action::OpenPaymentsForGroup { group_id, group_name })
                    .text(i18n.t("groups.actions.payments")),
            )
    });

    el("div").class("sport-group-card").child(content).child_opt(actions)
}

fn schedule_info(schedule: &str, i18n: &I18n) -> Element {
    el("div")
        .class("schedule-info")
        .child(el("strong").text(i18n.t("groups.schedule")))
        .text(format!(" {}", schedule))
}

/// Price lines for the tiers that are set; `prefix` selects the wording
fn price_lines(group: &SportGroup, i18n: &I18n, prefix: &str) -> Vec<String> {
    [
        ("eight", group.price_8),
        ("twelve", group.price_12),
        ("single", group.price_single),
    ]
    .into_iter()
    .filter_map(|(tier, price)| {
        price
            .filter(|p| *p != 0)
            .map(|p| i18n.tf(&format!("{}.{}", prefix, tier), &[("price", &p.to_string())]))
    })
    .collect()
}

/// Group detail modal with enroll and contacts buttons
pub fn render_group_info(group: &SportGroup, i18n: &I18n) -> Element {
    let detailed = group
        .detailed_description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| el("p").text(d));

    let schedule = group
        .schedule_text
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|schedule| schedule_info(schedule, i18n));

    let trainer = group.trainer_name.as_deref().filter(|t| !t.is_empty()).map(|name| {
        el("div")
            .class("trainer-info")
            .child(el("h4").text(i18n.t("groups.trainer")))
            .child(el("p").child(el("strong").text(name)))
            .child_opt(group.trainer_info.as_deref().filter(|t| !t.is_empty()).map(|info| el("p").text(info)))
    });

    let body = el("div")
        .class("group-info")
        .child(el("p").text(group.description.clone().unwrap_or_default()))
        .child_opt(detailed)
        .child_opt(schedule)
        .child(
            el("div")
                .class("prices")
                .child(el("h4").text(i18n.t("groups.cost")))
                .children(
                    price_lines(group, i18n, "groups.detail_price")
                        .into_iter()
                        .map(|text| el("div").text(text)),
                ),
        )
        .child_opt(trainer)
        .child(
            el("div")
                .class("group-actions")
                .child(
                    el("button")
                        .class("btn")
                        .on_click(Action::RequestEnroll { group_id: group.id, group_name: group.name.clone() })
                        .text(i18n.t("groups.enroll")),
                )
                .child(
                    el("button")
                        .class("btn secondary")
                        .on_click(Action::OpenContacts)
                        .text(i18n.t("groups.contacts")),
                ),
        );

    modal(
        ModalId::GroupInfoModal,
        &i18n.tf("groups.detail_title", &[("name", &group.name)]),
        body,
    )
}

/// `<option>` list of groups for the selects of the forms
pub fn render_group_options(groups: &[SportGroup], i18n: &I18n) -> Node {
    if groups.is_empty() {
        return select_options(&i18n.t("common.no_groups"), Vec::new());
    }
    select_options(
        &i18n.t("common.select_group"),
        groups.iter().map(|g| (g.id.to_string(), g.name.clone())),
    )
}
