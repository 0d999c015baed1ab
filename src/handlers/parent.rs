//! Parent flows: code authorization and attendance history

use tracing::{debug, warn};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::is_valid_code_length;
use crate::utils::logging::{log_user_action, log_view_render};
use crate::view::ids::{fields, FormId, ModalId, ATTENDANCE_BUTTON, AUTHORIZED_PARTICIPANTS, PARENT_ATTENDANCE_CONTENT, PAYMENT_BUTTON};
use crate::view::render::{self, load_error, modal};
use super::modals::show_modal;
use super::{notify_error, report_failure};

/// List the participants claimed by this parent and toggle the buttons that need one
pub async fn load_authorized_participants(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.authorized_participants().await {
        Ok(participants) => {
            let authorized = !participants.is_empty();
            let view = render::render_authorized_participants(&participants, &ctx.i18n);
            ctx.document.mount(AUTHORIZED_PARTICIPANTS, view);
            ctx.document.set_visible(PAYMENT_BUTTON, authorized);
            ctx.document.set_visible(ATTENDANCE_BUTTON, authorized);
            log_view_render(AUTHORIZED_PARTICIPANTS, participants.len());
        }
        Err(err) => {
            warn!(error = %err, "Could not load authorized participants");
            ctx.document.mount(AUTHORIZED_PARTICIPANTS, load_error(&ctx.i18n, "auth.load_error"));
        }
    }
    Ok(())
}

/// Verify a 6-character authorization code
pub async fn submit_authorization_form(ctx: &mut AppContext) -> Result<()> {
    let form = ctx.document.form(FormId::AuthorizationForm);
    let code = form.value(fields::AUTH_CODE).trim();

    if !is_valid_code_length(code) {
        notify_error(ctx, "messages.code_length");
        return Ok(());
    }

    match ctx.services.api.verify_code(code).await {
        Ok(ack) => {
            log_user_action(ctx.state.user_id(), "code_verified", None);
            let message = ack.message.unwrap_or_else(|| ctx.i18n.t("messages.authorized"));
            ctx.services.notifications.success(&message);
            ctx.document.reset_form(FormId::AuthorizationForm);
            load_authorized_participants(ctx).await?;
        }
        Err(err) => {
            report_failure(ctx, "/api/auth/verify", &err, "errors.auth", "errors.auth_generic");
        }
    }
    Ok(())
}

/// Fill the parent attendance dialog with the participant picker
pub async fn load_parent_attendance(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.my_participants().await {
        Ok(participants) => {
            let view = render::render_parent_participants(&participants, &ctx.i18n);
            ctx.document.mount(PARENT_ATTENDANCE_CONTENT, view);
        }
        Err(err) => {
            report_failure(ctx, "/api/participants", &err, "errors.parent_attendance", "errors.data_load");
            ctx.document.mount(PARENT_ATTENDANCE_CONTENT, load_error(&ctx.i18n, "errors.data_load"));
        }
    }
    Ok(())
}

/// Attendance history of one participant, shown in place of the picker
pub async fn load_participant_attendance(
    ctx: &mut AppContext,
    participant_id: i64,
    participant_name: &str,
) -> Result<()> {
    ctx.document.close_modal(ModalId::ParentAttendanceModal);

    match ctx.services.api.participant_attendance(participant_id).await {
        Ok(records) => {
            debug!(participant_id = participant_id, records = records.len(), "Participant attendance loaded");
            let body = render::render_participant_attendance(&records, participant_name, &ctx.i18n);
            let title = ctx.i18n.t("titles.attendance");
            ctx.document
                .show_modal_with(ModalId::AttendanceStatsModal, modal(ModalId::AttendanceStatsModal, &title, body));
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/parent/attendance",
                &err,
                "errors.parent_attendance",
                "errors.data_load",
            );
        }
    }
    Ok(())
}

pub async fn back_to_parent_attendance(ctx: &mut AppContext) -> Result<()> {
    ctx.document.close_modal(ModalId::AttendanceStatsModal);
    show_modal(ctx, ModalId::ParentAttendanceModal).await
}
