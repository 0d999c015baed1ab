//! Session start-up and the sport-group cache

use tracing::{debug, info, warn};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::logging::{log_user_action, log_view_render};
use crate::view::ids::{ADMIN_PANEL, ATTENDANCE_BUTTON, PARENT_PANEL, PAYMENT_BUTTON, SPORT_GROUPS};
use crate::view::render;
use super::report_failure;

/// Establish the session and reveal the panel of the user's role
///
/// On any failure both panels stay hidden and nothing is retried.
pub async fn init(ctx: &mut AppContext) -> Result<()> {
    let identity = ctx.services.identity();
    let language = ctx.i18n.detect_user_language(identity.language_code.as_deref());
    ctx.i18n.set_language(&language);

    info!(telegram_id = identity.id, language = %language, "Initializing session");

    ctx.document.hide(ADMIN_PANEL);
    ctx.document.hide(PARENT_PANEL);

    let session = match ctx.services.api.init(&identity).await {
        Ok(session) => session,
        Err(err) => {
            report_failure(ctx, "/api/init", &err, "errors.init", "errors.connection");
            return Ok(());
        }
    };

    let is_admin = session.is_admin();
    log_user_action(
        session.id,
        "session_started",
        Some(if is_admin { "admin" } else { "parent" }),
    );
    info!(user_id = session.id, name = %session.display_name(), is_admin = is_admin, "Session established");

    ctx.state.session = Some(session);
    ctx.document.set_visible(ADMIN_PANEL, is_admin);
    ctx.document.set_visible(PARENT_PANEL, !is_admin);

    load_sport_groups(ctx).await?;
    if !is_admin {
        check_authorization(ctx).await?;
    }
    Ok(())
}

/// Fetch the groups, replace the cache and re-render the main view
pub async fn load_sport_groups(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.sport_groups().await {
        Ok(groups) => {
            debug!(count = groups.len(), "Sport groups loaded");
            ctx.state.sport_groups = groups;
            let view = render::render_main(&ctx.state.sport_groups, &ctx.i18n);
            ctx.document.mount(SPORT_GROUPS, view);
            log_view_render(SPORT_GROUPS, ctx.state.sport_groups.len());
        }
        Err(err) => {
            report_failure(ctx, "/api/sport-groups", &err, "errors.groups_load", "errors.groups_load_generic");
        }
    }
    Ok(())
}

/// Fill the cache when it is empty; failures are only logged
pub async fn ensure_sport_groups(ctx: &mut AppContext) {
    if !ctx.state.sport_groups.is_empty() {
        return;
    }

    match ctx.services.api.sport_groups().await {
        Ok(groups) => {
            debug!(count = groups.len(), "Sport group cache filled");
            ctx.state.sport_groups = groups;
        }
        Err(err) => warn!(error = %err, "Could not fill sport group cache"),
    }
}

/// Show the payment and attendance buttons only to parents with authorized participants
pub async fn check_authorization(ctx: &mut AppContext) -> Result<()> {
    let authorized = match ctx.services.api.authorized_participants().await {
        Ok(participants) => !participants.is_empty(),
        Err(err) => {
            warn!(error = %err, "Authorization check failed");
            false
        }
    };

    debug!(authorized = authorized, "Authorization checked");
    ctx.document.set_visible(PAYMENT_BUTTON, authorized);
    ctx.document.set_visible(ATTENDANCE_BUTTON, authorized);
    Ok(())
}
