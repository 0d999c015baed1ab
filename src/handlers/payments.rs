//! Payments: admin approval and the parent payment form

use tracing::{debug, info, warn};
use crate::models::{CreatePaymentRequest, SportGroup, SubscriptionType};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{non_empty, parse_int};
use crate::utils::logging::{log_admin_action, log_user_action, log_view_render};
use crate::view::ids::{fields, FormId, ModalId, PAYMENTS_LIST, PAYMENT_GROUP_SELECT, PAYMENT_PARTICIPANT_SELECT};
use crate::view::render::{self, load_error};
use super::session::ensure_sport_groups;
use super::{notify_error, notify_success, report_failure};

/// Price of a subscription label for the group selected by `group_value`
///
/// 0 when the value matches no cached group or the label is unknown.
pub fn calculate_amount(groups: &[SportGroup], group_value: &str, label: &str) -> i64 {
    let group_value = group_value.trim();
    let group = groups.iter().find(|g| g.id.to_string() == group_value);

    match (group, SubscriptionType::from_label(label)) {
        (Some(group), Some(subscription)) => group.price_for(subscription),
        _ => 0,
    }
}

fn recalculate_amount(ctx: &mut AppContext) {
    let form = ctx.document.form(FormId::PaymentForm);
    let amount = calculate_amount(
        &ctx.state.sport_groups,
        form.value(fields::PAYMENT_GROUP),
        form.value(fields::PAYMENT_TYPE),
    );
    debug!(amount = amount, "Payment amount recalculated");
    ctx.document
        .form_mut(FormId::PaymentForm)
        .set(fields::PAYMENT_AMOUNT, amount.to_string());
}

pub fn select_payment_group(ctx: &mut AppContext, value: &str) -> Result<()> {
    ctx.document.form_mut(FormId::PaymentForm).set(fields::PAYMENT_GROUP, value);
    recalculate_amount(ctx);
    Ok(())
}

pub fn select_payment_type(ctx: &mut AppContext, value: &str) -> Result<()> {
    ctx.document.form_mut(FormId::PaymentForm).set(fields::PAYMENT_TYPE, value);
    recalculate_amount(ctx);
    Ok(())
}

/// Fill the participant and group selects of the payment form
pub async fn load_payment_data(ctx: &mut AppContext) -> Result<()> {
    let participants = match ctx.services.api.my_participants().await {
        Ok(participants) => participants,
        Err(err) => {
            warn!(error = %err, "Could not load participants for the payment form");
            Vec::new()
        }
    };
    let options = render::render_participant_options(&participants, &ctx.i18n);
    ctx.document.mount(PAYMENT_PARTICIPANT_SELECT, options);

    ensure_sport_groups(ctx).await;
    let options = render::render_group_options(&ctx.state.sport_groups, &ctx.i18n);
    ctx.document.mount(PAYMENT_GROUP_SELECT, options);
    Ok(())
}

/// Submit the parent payment form; a participant must be selected
pub async fn submit_payment_form(ctx: &mut AppContext) -> Result<()> {
    let form = ctx.document.form(FormId::PaymentForm);

    let Some(participant_id) = parse_int(form.value(fields::PAYMENT_PARTICIPANT)) else {
        notify_error(ctx, "messages.select_participant");
        return Ok(());
    };

    let subscription_type = form.value(fields::PAYMENT_TYPE).trim().to_string();
    let request = CreatePaymentRequest {
        participant_id,
        sport_group_id: parse_int(form.value(fields::PAYMENT_GROUP)),
        total_lessons: SubscriptionType::lessons_for_label(&subscription_type),
        subscription_type,
        amount: parse_int(form.value(fields::PAYMENT_AMOUNT)),
        payment_method: "cash".to_string(),
    };

    match ctx.services.api.create_payment(&request).await {
        Ok(ack) => {
            log_user_action(ctx.state.user_id(), "payment_created", Some(&participant_id.to_string()));
            let message = ack
                .message
                .unwrap_or_else(|| ctx.i18n.t("messages.payment_created"));
            ctx.services.notifications.success(&message);
            ctx.document.reset_form(FormId::PaymentForm);
            ctx.document.close_modal(ModalId::PaymentModal);
        }
        Err(err) => {
            report_failure(ctx, "/api/parent/payment", &err, "errors.payment_create", "errors.payment_create_generic");
        }
    }
    Ok(())
}

/// Fill the payments dialog of the admin panel
pub async fn load_payments(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.payments().await {
        Ok(payments) => {
            let view = render::render_payments(&payments, &ctx.i18n);
            ctx.document.mount(PAYMENTS_LIST, view);
            log_view_render(PAYMENTS_LIST, payments.len());
        }
        Err(err) => {
            report_failure(ctx, "/api/admin/payments", &err, "errors.payments_load", "payments.load_error");
            ctx.document.mount(PAYMENTS_LIST, load_error(&ctx.i18n, "payments.load_error"));
        }
    }
    Ok(())
}

pub async fn open_payments_for_group(ctx: &mut AppContext, group_id: i64, group_name: &str) -> Result<()> {
    match ctx.services.api.payments().await {
        Ok(payments) => {
            let view = render::render_group_payments(&payments, group_id, group_name, &ctx.i18n);
            ctx.document.show_modal_with(ModalId::GroupPaymentsModal, view);
        }
        Err(err) => {
            report_failure(ctx, "/api/admin/payments", &err, "errors.payments_load", "payments.load_error");
        }
    }
    Ok(())
}

/// Approve a payment with an optional note
pub async fn approve_payment(ctx: &mut AppContext, payment_id: i64) -> Result<()> {
    let note = ctx
        .services
        .notifications
        .prompt(&ctx.i18n.t("prompts.approve_note"))
        .unwrap_or_default();

    match ctx.services.api.approve_payment(payment_id, note.trim()).await {
        Ok(_) => {
            log_admin_action(ctx.state.user_id(), "approve_payment", Some(&payment_id.to_string()), non_empty(&note).as_deref());
            info!(payment_id = payment_id, "Payment approved");
            notify_success(ctx, "messages.payment_approved");
            load_payments(ctx).await?;
        }
        Err(err) => {
            report_failure(ctx, "/api/admin/payments/approve", &err, "errors.approve", "errors.approve_generic");
        }
    }
    Ok(())
}

/// Reject a payment; a reason is required and nothing is sent without one
pub async fn reject_payment(ctx: &mut AppContext, payment_id: i64) -> Result<()> {
    let reason = ctx
        .services
        .notifications
        .prompt(&ctx.i18n.t("prompts.reject_reason"))
        .and_then(|reason| non_empty(&reason));

    let Some(reason) = reason else {
        notify_error(ctx, "messages.reject_reason_required");
        return Ok(());
    };

    match ctx.services.api.reject_payment(payment_id, &reason).await {
        Ok(_) => {
            log_admin_action(ctx.state.user_id(), "reject_payment", Some(&payment_id.to_string()), Some(&reason));
            info!(payment_id = payment_id, "Payment rejected");
            notify_success(ctx, "messages.payment_rejected");
            load_payments(ctx).await?;
        }
        Err(err) => {
            report_failure(ctx, "/api/admin/payments/reject", &err, "errors.reject", "errors.reject_generic");
        }
    }
    Ok(())
}
