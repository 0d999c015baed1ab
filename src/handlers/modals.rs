//! Static dialogs of the page and their loaders

use tracing::debug;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::view::ids::ModalId;
use super::{attendance, contacts, discounts, parent, payments, students};

/// Open a dialog and load its content
pub async fn show_modal(ctx: &mut AppContext, modal: ModalId) -> Result<()> {
    debug!(modal = modal.id(), "Opening modal");
    ctx.document.open_modal(modal);

    match modal {
        ModalId::PaymentsModal => payments::load_payments(ctx).await,
        ModalId::AttendanceModal => attendance::load_attendance_groups(ctx).await,
        ModalId::DiscountsModal => {
            discounts::toggle_discount_form_for_role(ctx);
            discounts::load_discounts(ctx).await
        }
        ModalId::ParentAttendanceModal => parent::load_parent_attendance(ctx).await,
        ModalId::AuthorizationModal => parent::load_authorized_participants(ctx).await,
        ModalId::ParticipantsModal => students::load_participant_groups(ctx).await,
        ModalId::ContactModal => contacts::load_contact_data(ctx).await,
        ModalId::PaymentModal => payments::load_payment_data(ctx).await,
        _ => Ok(()),
    }
}

/// Close a dialog; closing the student form also ends editing
pub fn close_modal(ctx: &mut AppContext, modal: ModalId) {
    debug!(modal = modal.id(), "Closing modal");
    ctx.document.close_modal(modal);
    if modal == ModalId::StudentModal {
        ctx.state.editing_student = None;
    }
}
