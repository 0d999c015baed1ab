//! Group roster and the all-students table

use crate::i18n::I18n;
use crate::models::{GroupStudent, StudentSummary};
use crate::utils::helpers::{balance_class, format_thousands};
use crate::view::action::Action;
use crate::view::node::{el, text_el, Element, Node};

/// Roster of one group with totals: student count, paid amount, remaining lessons
pub fn render_group_students(students: &[GroupStudent], group_name: &str, i18n: &I18n) -> Node {
    if students.is_empty() {
        return el("p").text(i18n.t("students.group_empty")).into();
    }

    let total_paid: i64 = students.iter().map(|s| s.total_paid.unwrap_or(0)).sum();
    let total_remaining: i64 = students.iter().map(|s| s.remaining_lessons.unwrap_or(0)).sum();

    let statistics = el("div")
        .class("group-statistics")
        .child(el("h4").text(i18n.tf("students.stats_title", &[("group", group_name)])))
        .child(
            el("div")
                .class("stats-grid")
                .child(stat_item(students.len().to_string(), i18n.t("students.stat.count")))
                .child(stat_item(
                    format!("{} ₽", format_thousands(total_paid)),
                    i18n.t("students.stat.paid"),
                ))
                .child(stat_item(total_remaining.to_string(), i18n.t("students.stat.remaining"))),
        );

    let count = students.len() as i64;
    let mut nodes: Vec<Node> = vec![
        statistics.into(),
        el("h4")
            .text(i18n.tf("students.list_title", &[("students", &i18n.tp("students.count", count, None))]))
            .into(),
    ];
    nodes.extend(students.iter().map(|s| student_item(s, i18n).into()));
    Node::Fragment(nodes)
}

fn stat_item(number: String, label: String) -> Element {
    el("div")
        .class("stat-item")
        .child(text_el("div", "stat-number", number))
        .child(text_el("div", "stat-label", label))
}

fn student_item(student: &GroupStudent, i18n: &I18n) -> Element {
    let remaining = student.remaining_lessons.unwrap_or(0);

    let certificate = if student.medical_certificate {
        i18n.t("students.medical_yes")
    } else {
        i18n.t("students.medical_no")
    };

    let discount = student.discount_type.as_deref().filter(|d| !d.is_empty()).map(|kind| {
        el("div").text(i18n.tf(
            "students.discount",
            &[
                ("type", kind),
                ("percent", &student.discount_percent.unwrap_or(0).to_string()),
            ],
        ))
    });

    let code = student.authorization_code.as_deref().filter(|c| !c.is_empty()).map(|code| {
        el("div")
            .text(i18n.t("students.auth_code"))
            .child(el("strong").text(code))
    });

    el("div")
        .class("student-item")
        .child(
            el("div")
                .class("student-header")
                .child(text_el("div", "student-name", student.participant_name.clone()))
                .child(text_el("div", "student-phone", format!("📱 {}", student.parent_phone))),
        )
        .child(
            el("div")
                .class("student-info")
                .child(el("div").text(i18n.tf("students.birth_date", &[("date", &student.birth_date)])))
                .child(el("div").text(certificate))
                .child_opt(discount)
                .child_opt(code),
        )
        .child(
            el("div").class("student-financial").child(
                el("div")
                    .class("financial-summary")
                    .child(el("span").text(i18n.tf(
                        "students.paid",
                        &[("amount", &student.total_paid.unwrap_or(0).to_string())],
                    )))
                    .child(
                        el("span")
                            .text(i18n.t("students.remaining"))
                            .child(text_el(
                                "span",
                                &format!("balance-remaining {}", balance_class(remaining)),
                                remaining.to_string(),
                            )),
                    )
                    .child(el("span").text(i18n.tf(
                        "students.subscription",
                        &[("type", student.subscription_type.as_deref().unwrap_or(""))],
                    ))),
            ),
        )
}

/// Table of every student with edit and delete actions
pub fn render_students_table(students: &[StudentSummary], i18n: &I18n) -> Node {
    if students.is_empty() {
        return text_el("div", "no-students", i18n.t("students.table.empty")).into();
    }

    let header = el("div").class("table-header").children(
        ["name", "group", "age", "subscription", "payment", "code", "actions"]
            .iter()
            .map(|column| el("div").text(i18n.t(&format!("students.table.{}", column)))),
    );

    let mut nodes: Vec<Node> = vec![header.into()];
    nodes.extend(students.iter().map(|student| student_row(student, i18n).into()));
    Node::Fragment(nodes)
}

fn student_row(student: &StudentSummary, i18n: &I18n) -> Element {
    let subscription = student.first_subscription();
    let group = subscription
        .and_then(|s| s.sport_group_name.clone())
        .unwrap_or_else(|| i18n.t("students.table.not_enrolled"));
    let subscription_type = subscription
        .and_then(|s| s.subscription_type.clone())
        .unwrap_or_else(|| "-".to_string());
    let age = student
        .age
        .filter(|age| *age > 0)
        .map(|age| age.to_string())
        .unwrap_or_else(|| i18n.t("students.table.age_unknown"));
    let (status_class, status_text) = if student.has_payments {
        ("status-paid", i18n.t("students.table.paid_yes"))
    } else {
        ("status-unpaid", i18n.t("students.table.paid_no"))
    };
    let code = student
        .authorization_code
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| i18n.t("students.table.code_missing"));

    el("div")
        .class("student-row")
        .child(text_el("div", "student-name", student.participant_name.clone()))
        .child(text_el("div", "student-group", group))
        .child(text_el("div", "student-age", age))
        .child(text_el("div", "subscription-type", subscription_type))
        .child(text_el("div", &format!("payment-status {}", status_class), status_text))
        .child(text_el("div", "auth-code", code))
        .child(
            el("div")
                .class("student-actions")
                .child(
                    el("button")
                        .class("btn btn-primary btn-small")
                        .on_click(Action::EditStudent { student_id: student.participant_id })
                        .text("✏️"),
                )
                .child(
                    el("button")
                        .class("btn btn-danger btn-small")
                        .on_click(Action::DeleteStudent { student_id: student.participant_id })
                        .text("🗑️"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::view::render::test_i18n as i18n;

    fn student(name: &str, paid: i64, remaining: i64) -> GroupStudent {
        serde_json::from_value(json!({
            "participant_name": name,
            "parent_phone": "+7 900 000 00 00",
            "birth_date": "2015-04-01",
            "medical_certificate": true,
            "total_paid": paid,
            "remaining_lessons": remaining,
            "subscription_type": "8 занятий"
        }))
        .unwrap()
    }

    #[test]
    fn test_group_statistics_totals() {
        let students = vec![student("Анна", 8000, 3), student("Борис", 4500, 0)];
        let node = render_group_students(&students, "Дзюдо", &i18n());
        let numbers: Vec<String> = node
            .find_by_class("stat-number")
            .into_iter()
            .map(|e| Node::Element(e.clone()).text_content())
            .collect();
        assert_eq!(numbers, vec!["2", "12 500 ₽", "3"]);
        assert_eq!(node.find_by_class("student-item").len(), 2);
    }

    #[test]
    fn test_balance_classes() {
        let students = vec![student("Анна", 0, 0), student("Борис", 0, 1), student("Вера", 0, 3), student("Глеб", 0, 9)];
        let node = render_group_students(&students, "Дзюдо", &i18n());
        let classes: Vec<&str> = node
            .find_by_class("balance-remaining")
            .into_iter()
            .map(|e| e.classes[1].as_str())
            .collect();
        assert_eq!(classes, vec!["zero", "low", "medium", "normal"]);
    }

    #[test]
    fn test_empty_group() {
        let node = render_group_students(&[], "Дзюдо", &i18n());
        assert!(node.find_by_class("group-statistics").is_empty());
    }

    #[test]
    fn test_students_table_rows_and_fallbacks() {
        let students: Vec<StudentSummary> = serde_json::from_value(json!([
            {"participant_id": 4, "participant_name": "Анна", "age": 9, "has_payments": true,
             "authorization_code": "123456",
             "subscriptions": [{"sport_group_name": "Гимнастика", "subscription_type": "12 занятий"}]},
            {"participant_id": 5, "participant_name": "Борис", "has_payments": false, "subscriptions": []}
        ]))
        .unwrap();
        let node = render_students_table(&students, &i18n());
        assert_eq!(node.find_by_class("student-row").len(), 2);
        assert_eq!(node.find_by_class("status-unpaid").len(), 1);
        let text = node.text_content();
        assert!(text.contains("Не записан"));
        assert!(text.contains("Не создан"));
        assert!(node.actions().contains(&&Action::DeleteStudent { student_id: 5 }));
    }
}
