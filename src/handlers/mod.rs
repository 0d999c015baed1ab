//! Action dispatchers
//!
//! This module routes user interactions to their handlers:
//! - clicks on bound elements ([`dispatch`])
//! - value changes of bound selects ([`handle_change`])
//! - form submissions ([`submit_form`])
//!
//! Handlers talk to the backend, update the client state and re-render. API
//! failures are reported to the user and logged, never propagated: a server
//! error is shown after a localized prefix, a transport failure as a generic
//! message.

pub mod session;
pub mod groups;
pub mod contacts;
pub mod students;
pub mod payments;
pub mod attendance;
pub mod discounts;
pub mod parent;
pub mod modals;

// Re-export commonly used handler functions
pub use session::{init, load_sport_groups, ensure_sport_groups, check_authorization};
pub use payments::calculate_amount;
pub use modals::{show_modal, close_modal};

use tracing::{debug, info};
use crate::state::AppContext;
use crate::utils::errors::{Result, SportClubError};
use crate::utils::logging::log_api_error;
use crate::view::{Action, ChangeAction, FormId};

/// Route a click action to its handler
pub async fn dispatch(ctx: &mut AppContext, action: Action) -> Result<()> {
    debug!(user_id = ctx.state.user_id(), action = ?action, "Dispatching action");

    match action {
        Action::ShowDirections => groups::show_directions(ctx),
        Action::OpenCategory { category } => groups::open_category(ctx, category),
        Action::OpenGroupDetails { group_id } => groups::open_group_details(ctx, group_id).await,
        Action::RequestEnroll { group_id, group_name } => {
            groups::request_enroll(ctx, group_id, &group_name).await
        }
        Action::ShowGroupStudents { group_id, group_name } => {
            groups::show_group_students(ctx, group_id, &group_name).await
        }

        Action::OpenContacts => contacts::open_contacts(ctx).await,
        Action::CallPhone { phone } => contacts::call_phone(ctx, &phone),
        Action::OpenTelegram { username } => contacts::open_telegram(ctx, &username),

        Action::OpenGroupAttendance { group_id, group_name } => {
            attendance::select_attendance_group(ctx, group_id, &group_name).await
        }
        Action::SelectAttendanceGroup { group_id, group_name } => {
            attendance::select_attendance_group(ctx, group_id, &group_name).await
        }
        Action::SelectAttendanceDate { date, display } => {
            attendance::select_attendance_date(ctx, &date, &display).await
        }
        Action::ToggleAttendance { participant_id } => attendance::toggle_attendance(ctx, participant_id),
        Action::UpdateAbsenceReason { participant_id, reason } => {
            attendance::update_absence_reason(ctx, participant_id, reason)
        }
        Action::SaveAttendance => attendance::save_attendance(ctx).await,
        Action::LoadAttendanceStats { group_id } => attendance::load_attendance_stats(ctx, group_id).await,

        Action::OpenPaymentsForGroup { group_id, group_name } => {
            payments::open_payments_for_group(ctx, group_id, &group_name).await
        }
        Action::ApprovePayment { payment_id } => payments::approve_payment(ctx, payment_id).await,
        Action::RejectPayment { payment_id } => payments::reject_payment(ctx, payment_id).await,
        Action::SelectPaymentGroup { value } => payments::select_payment_group(ctx, &value),
        Action::SelectPaymentType { value } => payments::select_payment_type(ctx, &value),

        Action::DeleteDiscount { discount_id } => discounts::delete_discount(ctx, discount_id).await,

        Action::LoadParticipantAttendance { participant_id, participant_name } => {
            parent::load_participant_attendance(ctx, participant_id, &participant_name).await
        }
        Action::BackToParentAttendance => parent::back_to_parent_attendance(ctx).await,

        Action::OpenAddStudent => students::open_add_student(ctx).await,
        Action::EditStudent { student_id } => students::edit_student(ctx, student_id).await,
        Action::DeleteStudent { student_id } => students::delete_student(ctx, student_id).await,
        Action::RefreshStudents => students::load_all_students(ctx).await,

        Action::ShowModal { modal } => modals::show_modal(ctx, modal).await,
        Action::CloseModal { modal } => {
            modals::close_modal(ctx, modal);
            Ok(())
        }
    }
}

/// Route a select change to its handler; unknown values are ignored
pub async fn handle_change(ctx: &mut AppContext, change: &ChangeAction, value: &str) -> Result<()> {
    match change.with_value(value) {
        Some(action) => dispatch(ctx, action).await,
        None => {
            debug!(change = ?change, value = value, "Ignoring change with unknown value");
            Ok(())
        }
    }
}

/// Submit one of the page forms with its current field values
pub async fn submit_form(ctx: &mut AppContext, form: FormId) -> Result<()> {
    info!(user_id = ctx.state.user_id(), form = ?form, "Form submitted");

    match form {
        FormId::DiscountForm => discounts::submit_discount_form(ctx).await,
        FormId::ParticipantForm => students::submit_participant_form(ctx).await,
        FormId::PaymentForm => payments::submit_payment_form(ctx).await,
        FormId::AuthorizationForm => parent::submit_authorization_form(ctx).await,
        FormId::StudentForm => students::submit_student_form(ctx).await,
    }
}

/// Log a failed API call and tell the user about it
///
/// `prefix_key` takes the server's message as `{error}`; `generic_key` is
/// used for transport failures.
pub(crate) fn report_failure(
    ctx: &AppContext,
    endpoint: &str,
    err: &SportClubError,
    prefix_key: &str,
    generic_key: &str,
) {
    log_api_error(endpoint, err, None);
    let message = match err {
        SportClubError::Api(server_error) => ctx.i18n.tf(prefix_key, &[("error", server_error)]),
        _ => ctx.i18n.t(generic_key),
    };
    ctx.services.notifications.error(&message);
}

/// Show a localized success message
pub(crate) fn notify_success(ctx: &AppContext, key: &str) {
    ctx.services.notifications.success(&ctx.i18n.t(key));
}

/// Show a localized error message
pub(crate) fn notify_error(ctx: &AppContext, key: &str) {
    ctx.services.notifications.error(&ctx.i18n.t(key));
}
