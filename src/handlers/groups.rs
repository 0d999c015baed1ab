//! Directions, categories and group cards

use tracing::info;
use crate::models::Category;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::logging::{log_admin_action, log_user_action, log_view_render};
use crate::view::ids::{ModalId, SPORT_GROUPS};
use crate::view::render::{self, modal};
use super::{notify_success, report_failure};

/// Back to the four direction cards
pub fn show_directions(ctx: &mut AppContext) -> Result<()> {
    let view = render::render_directions(&ctx.i18n);
    ctx.document.mount(SPORT_GROUPS, view);
    Ok(())
}

/// Drill down into one direction, listing its cached groups
pub fn open_category(ctx: &mut AppContext, category: Category) -> Result<()> {
    let is_admin = ctx.is_admin();
    let view = render::render_category(category, &ctx.state.sport_groups, is_admin, &ctx.i18n);
    let count = ctx.state.sport_groups.iter().filter(|g| g.in_category(category)).count();
    ctx.document.mount(SPORT_GROUPS, view);
    log_view_render(category.key(), count);
    Ok(())
}

/// Show the detail modal of a group, fetching it when it is not cached
pub async fn open_group_details(ctx: &mut AppContext, group_id: i64) -> Result<()> {
    let group = match ctx.state.find_group(group_id) {
        Some(group) => group.clone(),
        None => match ctx.services.api.sport_group(group_id).await {
            Ok(group) => group,
            Err(err) => {
                report_failure(
                    ctx,
                    "/api/sport-group",
                    &err,
                    "errors.group_details",
                    "errors.group_details_generic",
                );
                return Ok(());
            }
        },
    };

    let view = render::render_group_info(&group, &ctx.i18n);
    ctx.document.show_modal_with(ModalId::GroupInfoModal, view);
    Ok(())
}

pub async fn request_enroll(ctx: &mut AppContext, group_id: i64, group_name: &str) -> Result<()> {
    match ctx.services.api.enroll_request(group_id, group_name).await {
        Ok(_) => {
            log_user_action(ctx.state.user_id(), "enroll_request", Some(group_name));
            notify_success(ctx, "messages.enroll_sent");
            ctx.document.close_modal(ModalId::GroupInfoModal);
        }
        Err(err) => {
            report_failure(ctx, "/api/enroll-request", &err, "errors.enroll", "errors.enroll_generic");
        }
    }
    Ok(())
}

/// Roster modal of one group with its totals
pub async fn show_group_students(ctx: &mut AppContext, group_id: i64, group_name: &str) -> Result<()> {
    match ctx.services.api.group_students(group_id).await {
        Ok(students) => {
            log_admin_action(ctx.state.user_id(), "view_group_students", Some(group_name), None);
            let title = ctx.i18n.tf("students.group_title", &[("group", group_name)]);
            let body = render::render_group_students(&students, group_name, &ctx.i18n);
            ctx.document
                .show_modal_with(ModalId::GroupStudentsModal, modal(ModalId::GroupStudentsModal, &title, body));
            info!(group_id = group_id, students = students.len(), "Group students shown");
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/group/students",
                &err,
                "errors.group_students",
                "errors.group_students_generic",
            );
        }
    }
    Ok(())
}
