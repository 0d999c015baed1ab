//! Student management: registration, the student form and the students table

use tracing::{debug, info, warn};
use crate::models::{Participant, RegisterParticipantRequest, StudentRequest, SubscriptionType};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{parse_int, parse_int_or};
use crate::utils::logging::{log_admin_action, log_view_render};
use crate::view::ids::{fields, FormId, ModalId, PARTICIPANT_GROUP_SELECT, STUDENTS_TABLE, STUDENT_GROUP_SELECT, STUDENT_MODAL_TITLE};
use crate::view::node::Node;
use crate::view::render::{self, load_error};
use crate::view::FormData;
use super::session::ensure_sport_groups;
use super::{notify_success, report_failure};

/// Required fields of the student form with the label key of each
const REQUIRED_STUDENT_FIELDS: [(&str, &str); 5] = [
    (fields::FULL_NAME, "students.form.field.full_name"),
    (fields::PARENT_PHONE, "students.form.field.parent_phone"),
    (fields::BIRTH_DATE, "students.form.field.birth_date"),
    (fields::STUDENT_GROUP, "students.form.field.group"),
    (fields::SUBSCRIPTION_TYPE, "students.form.field.subscription"),
];

/// Label keys of the required student fields left empty
///
/// A group value that does not parse to a non-zero id counts as missing.
pub fn missing_student_fields(form: &FormData) -> Vec<&'static str> {
    REQUIRED_STUDENT_FIELDS
        .iter()
        .filter(|(field, _)| {
            let value = form.value(field);
            if *field == fields::STUDENT_GROUP {
                matches!(parse_int(value), None | Some(0))
            } else {
                value.is_empty()
            }
        })
        .map(|(_, label)| *label)
        .collect()
}

/// Payload of the student form; call only once required fields are present
pub fn student_request(form: &FormData) -> StudentRequest {
    let subscription_type = form.value(fields::SUBSCRIPTION_TYPE).to_string();
    StudentRequest {
        full_name: form.value(fields::FULL_NAME).to_string(),
        parent_phone: form.value(fields::PARENT_PHONE).to_string(),
        birth_date: form.value(fields::BIRTH_DATE).to_string(),
        sport_group_id: parse_int(form.value(fields::STUDENT_GROUP)),
        total_lessons: SubscriptionType::lessons_for_label(&subscription_type),
        subscription_type,
        medical_certificate: form.checked(fields::MEDICAL_CERTIFICATE),
        discount_type: form.value(fields::DISCOUNT_KIND).to_string(),
        discount_percent: parse_int_or(form.value(fields::DISCOUNT_VALUE), 0),
    }
}

/// Payload of the participant registration form
pub fn participant_request(form: &FormData) -> RegisterParticipantRequest {
    RegisterParticipantRequest {
        full_name: form.value(fields::FULL_NAME).to_string(),
        parent_phone: form.value(fields::PARENT_PHONE).to_string(),
        birth_date: form.value(fields::BIRTH_DATE).to_string(),
        sport_group_id: parse_int(form.value(fields::PARTICIPANT_GROUP)),
        medical_certificate: form.checked(fields::MEDICAL_CERTIFICATE),
        discount_type: form.value(fields::DISCOUNT_KIND).to_string(),
        discount_percent: parse_int_or(form.value(fields::DISCOUNT_VALUE), 0),
    }
}

/// Form values of an existing participant for the edit dialog
fn prefill(participant: &Participant) -> FormData {
    let subscription = participant.subscriptions.first();
    let birth_date = participant.birth_date.split('T').next().unwrap_or_default();

    let mut form = FormData::new()
        .with(fields::FULL_NAME, participant.full_name.as_str())
        .with(fields::PARENT_PHONE, participant.parent_phone.as_str())
        .with(fields::BIRTH_DATE, birth_date)
        .with(
            fields::STUDENT_GROUP,
            subscription
                .and_then(|s| s.sport_group_id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        )
        .with(
            fields::SUBSCRIPTION_TYPE,
            subscription
                .and_then(|s| s.subscription_type.clone())
                .unwrap_or_default(),
        )
        .with(fields::DISCOUNT_KIND, participant.discount_type.clone().unwrap_or_default())
        .with(
            fields::DISCOUNT_VALUE,
            participant.discount_percent.unwrap_or(0).to_string(),
        );
    form.set_checked(fields::MEDICAL_CERTIFICATE, participant.medical_certificate);
    form
}

/// Load every student into the students table
pub async fn load_all_students(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.all_students().await {
        Ok(students) => {
            let view = render::render_students_table(&students, &ctx.i18n);
            ctx.document.mount(STUDENTS_TABLE, view);
            log_view_render(STUDENTS_TABLE, students.len());
        }
        Err(err) => {
            report_failure(ctx, "/api/admin/students", &err, "errors.students_load", "errors.students_load_generic");
            ctx.document.mount(STUDENTS_TABLE, load_error(&ctx.i18n, "errors.students_load_generic"));
        }
    }
    Ok(())
}

/// Fill the group select of the participant registration form
pub async fn load_participant_groups(ctx: &mut AppContext) -> Result<()> {
    ensure_sport_groups(ctx).await;
    let options = render::render_group_options(&ctx.state.sport_groups, &ctx.i18n);
    ctx.document.mount(PARTICIPANT_GROUP_SELECT, options);
    Ok(())
}

/// Fetch the groups afresh for the student form, falling back to the cache
async fn load_student_groups(ctx: &mut AppContext) {
    let options = match ctx.services.api.sport_groups().await {
        Ok(groups) => render::render_group_options(&groups, &ctx.i18n),
        Err(err) => {
            warn!(error = %err, "Using cached groups for the student form");
            render::render_group_options(&ctx.state.sport_groups, &ctx.i18n)
        }
    };
    ctx.document.mount(STUDENT_GROUP_SELECT, options);
}

pub async fn open_add_student(ctx: &mut AppContext) -> Result<()> {
    ctx.state.editing_student = None;
    ctx.document.reset_form(FormId::StudentForm);
    ctx.document
        .mount(STUDENT_MODAL_TITLE, Node::text(ctx.i18n.t("students.form.add_title")));
    load_student_groups(ctx).await;
    ctx.document.open_modal(ModalId::StudentModal);
    Ok(())
}

/// Open the student form pre-filled with an existing participant
pub async fn edit_student(ctx: &mut AppContext, student_id: i64) -> Result<()> {
    let participant = match ctx.services.api.participant(student_id).await {
        Ok(participant) => participant,
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/participants",
                &err,
                "errors.student_load",
                "errors.student_load_generic",
            );
            return Ok(());
        }
    };

    debug!(student_id = student_id, "Editing student");
    ctx.state.editing_student = Some(student_id);
    *ctx.document.form_mut(FormId::StudentForm) = prefill(&participant);
    ctx.document
        .mount(STUDENT_MODAL_TITLE, Node::text(ctx.i18n.t("students.form.edit_title")));
    load_student_groups(ctx).await;
    ctx.document.open_modal(ModalId::StudentModal);
    Ok(())
}

/// Delete a student after the user confirms
pub async fn delete_student(ctx: &mut AppContext, student_id: i64) -> Result<()> {
    if !ctx.services.notifications.confirm(&ctx.i18n.t("students.delete_confirm")) {
        debug!(student_id = student_id, "Student deletion cancelled");
        return Ok(());
    }

    match ctx.services.api.delete_participant(student_id).await {
        Ok(_) => {
            log_admin_action(ctx.state.user_id(), "delete_student", Some(&student_id.to_string()), None);
            notify_success(ctx, "students.deleted");
            load_all_students(ctx).await?;
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/participants",
                &err,
                "students.delete_error",
                "students.delete_error_generic",
            );
        }
    }
    Ok(())
}

/// Create or update a student from the student form
///
/// Missing required fields are reported in one message and nothing is sent.
pub async fn submit_student_form(ctx: &mut AppContext) -> Result<()> {
    let form = ctx.document.form(FormId::StudentForm);

    let missing = missing_student_fields(&form);
    if !missing.is_empty() {
        let labels: Vec<String> = missing.iter().map(|key| ctx.i18n.t(key)).collect();
        let message = ctx
            .i18n
            .tf("students.form.missing", &[("fields", &labels.join(", "))]);
        ctx.services.notifications.error(&message);
        return Ok(());
    }

    let request = student_request(&form);
    let editing = ctx.state.editing_student;
    let result = match editing {
        Some(id) => ctx.services.api.update_participant(id, &request).await,
        None => ctx.services.api.create_participant(&request).await,
    };

    match result {
        Ok(saved) => {
            let action = if editing.is_some() { "update_student" } else { "create_student" };
            log_admin_action(ctx.state.user_id(), action, Some(&request.full_name), None);
            info!(editing = ?editing, "Student saved");

            notify_success(
                ctx,
                if editing.is_some() { "students.form.updated" } else { "students.form.added" },
            );
            if let Some(code) = saved.authorization_code.as_deref() {
                let message = ctx.i18n.tf("students.form.auth_code", &[("code", code)]);
                ctx.services.notifications.success(&message);
            }

            ctx.state.editing_student = None;
            ctx.document.reset_form(FormId::StudentForm);
            ctx.document.close_modal(ModalId::StudentModal);
            load_all_students(ctx).await?;
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/participants",
                &err,
                "students.form.save_error",
                "students.form.save_error_generic",
            );
        }
    }
    Ok(())
}

/// Register a participant from the participants dialog
pub async fn submit_participant_form(ctx: &mut AppContext) -> Result<()> {
    let request = participant_request(&ctx.document.form(FormId::ParticipantForm));

    match ctx.services.api.create_participant(&request).await {
        Ok(saved) => {
            log_admin_action(ctx.state.user_id(), "register_participant", Some(&request.full_name), None);
            let message = match saved.authorization_code.as_deref() {
                Some(code) => ctx.i18n.tf("messages.participant_registered_code", &[("code", code)]),
                None => ctx.i18n.t("messages.participant_registered"),
            };
            ctx.services.notifications.success(&message);
            ctx.document.reset_form(FormId::ParticipantForm);
            ctx.document.close_modal(ModalId::ParticipantsModal);
        }
        Err(err) => {
            report_failure(ctx, "/api/admin/participants", &err, "errors.register", "errors.register_generic");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn complete_form() -> FormData {
        FormData::new()
            .with(fields::FULL_NAME, " Иванов Иван ")
            .with(fields::PARENT_PHONE, "+7 900 000 0000")
            .with(fields::BIRTH_DATE, "2015-03-01")
            .with(fields::STUDENT_GROUP, "3")
            .with(fields::SUBSCRIPTION_TYPE, "12 занятий")
            .with(fields::DISCOUNT_KIND, "Многодетная")
            .with(fields::DISCOUNT_VALUE, "abc")
    }

    #[test]
    fn test_complete_form_has_no_missing_fields() {
        assert!(missing_student_fields(&complete_form()).is_empty());
    }

    #[test]
    fn test_missing_fields_are_listed_in_order() {
        let form = complete_form()
            .with(fields::FULL_NAME, "")
            .with(fields::STUDENT_GROUP, "0")
            .with(fields::SUBSCRIPTION_TYPE, "");

        assert_eq!(
            missing_student_fields(&form),
            vec![
                "students.form.field.full_name",
                "students.form.field.group",
                "students.form.field.subscription",
            ]
        );
    }

    #[test]
    fn test_student_request_defaults() {
        let request = student_request(&complete_form());

        assert_eq!(request.full_name, " Иванов Иван ");
        assert_eq!(request.sport_group_id, Some(3));
        assert_eq!(request.total_lessons, 12);
        assert_eq!(request.discount_percent, 0);
        assert!(!request.medical_certificate);
    }

    #[test]
    fn test_whitespace_only_name_is_sent_as_typed() {
        let form = complete_form().with(fields::FULL_NAME, "  ");
        assert!(missing_student_fields(&form).is_empty());
        assert_eq!(participant_request(&form).full_name, "  ");
    }

    #[test]
    fn test_unknown_subscription_counts_one_lesson() {
        let form = complete_form().with(fields::SUBSCRIPTION_TYPE, "Абонемент");
        assert_eq!(student_request(&form).total_lessons, 1);
    }

    #[test]
    fn test_participant_request_without_group() {
        let form = FormData::new()
            .with(fields::FULL_NAME, "Петров Пётр")
            .with(fields::DISCOUNT_VALUE, "15")
            .with(fields::MEDICAL_CERTIFICATE, "on");

        let request = participant_request(&form);
        assert_matches!(request.sport_group_id, None);
        assert_eq!(request.discount_percent, 15);
        assert!(request.medical_certificate);
    }

    #[test]
    fn test_prefill_takes_first_subscription() {
        let participant: Participant = serde_json::from_value(serde_json::json!({
            "id": 7,
            "full_name": "Сидорова Анна",
            "parent_phone": "+7 911",
            "birth_date": "2014-05-20T00:00:00.000Z",
            "medical_certificate": true,
            "discount_percent": 10,
            "subscriptions": [
                {"sport_group_id": 2, "subscription_type": "8 занятий"}
            ]
        }))
        .unwrap();

        let form = prefill(&participant);
        assert_eq!(form.value(fields::BIRTH_DATE), "2014-05-20");
        assert_eq!(form.value(fields::STUDENT_GROUP), "2");
        assert_eq!(form.value(fields::SUBSCRIPTION_TYPE), "8 занятий");
        assert_eq!(form.value(fields::DISCOUNT_VALUE), "10");
        assert!(form.checked(fields::MEDICAL_CERTIFICATE));
    }
}
