//! Discount list and the admin discount form

use tracing::{debug, info};
use crate::models::CreateDiscountRequest;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{non_empty, parse_int};
use crate::utils::logging::{log_admin_action, log_view_render};
use crate::view::ids::{fields, FormId, DISCOUNTS_LIST, DISCOUNT_FORM};
use crate::view::render::{self, load_error};
use crate::view::FormData;
use super::{notify_success, report_failure};

/// Payload of the discount form
///
/// A non-numeric percentage is sent as `null`; empty dates are omitted.
pub fn discount_request(form: &FormData) -> CreateDiscountRequest {
    CreateDiscountRequest {
        name: form.value(fields::DISCOUNT_NAME).to_string(),
        description: form.value(fields::DISCOUNT_DESCRIPTION).to_string(),
        discount_type: form.value(fields::DISCOUNT_TYPE).to_string(),
        discount_percent: parse_int(form.value(fields::DISCOUNT_PERCENT)),
        start_date: non_empty(form.value(fields::DISCOUNT_START)),
        end_date: non_empty(form.value(fields::DISCOUNT_END)),
        is_active: true,
    }
}

/// Fill the discounts dialog from the public list
pub async fn load_discounts(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.discounts().await {
        Ok(discounts) => {
            let view = render::render_discounts(&discounts, ctx.is_admin(), &ctx.i18n);
            ctx.document.mount(DISCOUNTS_LIST, view);
            log_view_render(DISCOUNTS_LIST, discounts.len());
        }
        Err(err) => {
            report_failure(ctx, "/api/discounts", &err, "errors.discounts_load", "discounts.load_error");
            ctx.document.mount(DISCOUNTS_LIST, load_error(&ctx.i18n, "discounts.load_error"));
        }
    }
    Ok(())
}

/// Only admins see the form for adding discounts
pub fn toggle_discount_form_for_role(ctx: &mut AppContext) {
    let is_admin = ctx.is_admin();
    ctx.document.set_visible(DISCOUNT_FORM, is_admin);
}

pub async fn submit_discount_form(ctx: &mut AppContext) -> Result<()> {
    let request = discount_request(&ctx.document.form(FormId::DiscountForm));
    debug!(name = %request.name, percent = ?request.discount_percent, "Creating discount");

    match ctx.services.api.create_discount(&request).await {
        Ok(_) => {
            log_admin_action(ctx.state.user_id(), "create_discount", Some(&request.name), None);
            notify_success(ctx, "messages.discount_added");
            ctx.document.reset_form(FormId::DiscountForm);
            load_discounts(ctx).await?;
        }
        Err(err) => {
            report_failure(ctx, "/api/admin/discounts", &err, "errors.discount_add", "errors.discount_add_generic");
        }
    }
    Ok(())
}

/// Delete a discount after the user confirms
pub async fn delete_discount(ctx: &mut AppContext, discount_id: i64) -> Result<()> {
    if !ctx.services.notifications.confirm(&ctx.i18n.t("prompts.delete_discount")) {
        return Ok(());
    }

    match ctx.services.api.delete_discount(discount_id).await {
        Ok(_) => {
            log_admin_action(ctx.state.user_id(), "delete_discount", Some(&discount_id.to_string()), None);
            info!(discount_id = discount_id, "Discount deleted");
            notify_success(ctx, "messages.discount_deleted");
            load_discounts(ctx).await?;
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/discounts",
                &err,
                "errors.discount_delete",
                "errors.discount_delete_generic",
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discount_request_fields() {
        let form = FormData::new()
            .with(fields::DISCOUNT_NAME, "Семейная")
            .with(fields::DISCOUNT_TYPE, "family")
            .with(fields::DISCOUNT_PERCENT, "10")
            .with(fields::DISCOUNT_START, "2025-09-01");

        let body = serde_json::to_value(discount_request(&form)).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Семейная",
                "description": "",
                "discount_type": "family",
                "discount_percent": 10,
                "start_date": "2025-09-01",
                "end_date": null,
                "is_active": true
            })
        );
    }

    #[test]
    fn test_discount_text_is_sent_as_typed() {
        let form = FormData::new()
            .with(fields::DISCOUNT_NAME, " Семейная ")
            .with(fields::DISCOUNT_DESCRIPTION, "для троих детей\n");

        let request = discount_request(&form);
        assert_eq!(request.name, " Семейная ");
        assert_eq!(request.description, "для троих детей\n");
    }

    #[test]
    fn test_non_numeric_percent_is_null() {
        let form = FormData::new().with(fields::DISCOUNT_PERCENT, "много");
        let body = serde_json::to_value(discount_request(&form)).unwrap();
        assert_eq!(body["discount_percent"], serde_json::Value::Null);
    }
}
