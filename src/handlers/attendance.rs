//! Attendance taking: group, date, roster, save and statistics

use tracing::{debug, info, warn};
use crate::models::AbsenceReason;
use crate::state::{AppContext, AttendanceSheet, SelectedDate};
use crate::utils::errors::Result;
use crate::utils::logging::{log_admin_action, log_view_render};
use crate::view::ids::{ModalId, ATTENDANCE_CONTENT};
use crate::view::render::{self, load_error, modal};
use super::{notify_success, report_failure};

/// Fill the attendance dialog with the groups to pick from
pub async fn load_attendance_groups(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.attendance_groups().await {
        Ok(groups) => {
            let view = render::render_attendance_groups(&groups, &ctx.i18n);
            ctx.document.mount(ATTENDANCE_CONTENT, view);
            log_view_render(ATTENDANCE_CONTENT, groups.len());
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/attendance/groups",
                &err,
                "errors.attendance_groups",
                "errors.attendance_groups_generic",
            );
            ctx.document.mount(ATTENDANCE_CONTENT, load_error(&ctx.i18n, "errors.attendance_groups_generic"));
        }
    }
    Ok(())
}

/// Record the group and list its scheduled dates
pub async fn select_attendance_group(ctx: &mut AppContext, group_id: i64, group_name: &str) -> Result<()> {
    ctx.state.attendance.select_group(group_id, group_name);
    ctx.document.close_modal(ModalId::AttendanceModal);

    match ctx.services.api.attendance_schedule(group_id).await {
        Ok(dates) => {
            debug!(group_id = group_id, dates = dates.len(), "Attendance schedule loaded");
            let body = render::render_attendance_dates(&dates, group_id, group_name, &ctx.i18n);
            let title = ctx.i18n.t("titles.attendance_date");
            ctx.document
                .show_modal_with(ModalId::AttendanceDateModal, modal(ModalId::AttendanceDateModal, &title, body));
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/attendance/schedule",
                &err,
                "errors.schedule",
                "errors.schedule_generic",
            );
        }
    }
    Ok(())
}

/// Fetch the roster of the selected group on `date` and open it for marking
pub async fn select_attendance_date(ctx: &mut AppContext, date: &str, display: &str) -> Result<()> {
    let Some(group) = ctx.state.attendance.group.clone() else {
        warn!(date = date, "Attendance date selected without a group");
        return Ok(());
    };

    match ctx.services.api.attendance_roster(group.id, date).await {
        Ok(roster) => {
            let sheet = AttendanceSheet::from(roster);
            info!(
                group_id = group.id,
                date = date,
                attendance_id = sheet.attendance_id,
                completed = sheet.is_completed,
                "Attendance roster loaded"
            );
            ctx.state.attendance.date = Some(SelectedDate {
                date: date.to_string(),
                display: display.to_string(),
            });
            ctx.state.attendance.sheet = Some(sheet);
            ctx.document.close_modal(ModalId::AttendanceDateModal);
            render_sheet(ctx);
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/attendance/participants",
                &err,
                "errors.roster",
                "errors.roster_generic",
            );
        }
    }
    Ok(())
}

/// Re-render the roster dialog from the sheet being edited
fn render_sheet(ctx: &mut AppContext) {
    let selection = &ctx.state.attendance;
    let (Some(group), Some(date), Some(sheet)) = (&selection.group, &selection.date, &selection.sheet) else {
        return;
    };

    let body = render::render_attendance_roster(
        &sheet.entries,
        &group.name,
        &date.display,
        sheet.is_completed,
        &ctx.i18n,
    );
    let view = modal(ModalId::AttendanceRecordModal, &ctx.i18n.t("titles.attendance_record"), body);
    ctx.document.show_modal_with(ModalId::AttendanceRecordModal, view);
}

pub fn toggle_attendance(ctx: &mut AppContext, participant_id: i64) -> Result<()> {
    let toggled = ctx
        .state
        .attendance
        .sheet
        .as_mut()
        .and_then(|sheet| sheet.toggle(participant_id));

    match toggled {
        Some(present) => {
            debug!(participant_id = participant_id, present = present, "Attendance toggled");
            render_sheet(ctx);
        }
        None => debug!(participant_id = participant_id, "Toggle for participant not on the roster"),
    }
    Ok(())
}

pub fn update_absence_reason(ctx: &mut AppContext, participant_id: i64, reason: AbsenceReason) -> Result<()> {
    let updated = ctx
        .state
        .attendance
        .sheet
        .as_mut()
        .is_some_and(|sheet| sheet.set_reason(participant_id, reason));

    if updated {
        debug!(participant_id = participant_id, reason = reason.key(), "Absence reason recorded");
        render_sheet(ctx);
    }
    Ok(())
}

/// Post the marks of the open roster, then go back to the group's dates
///
/// Completed sessions are never saved again.
pub async fn save_attendance(ctx: &mut AppContext) -> Result<()> {
    let Some(sheet) = ctx.state.attendance.sheet.as_ref() else {
        debug!("No attendance roster to save");
        return Ok(());
    };
    if sheet.is_completed {
        debug!(attendance_id = sheet.attendance_id, "Attendance already completed");
        return Ok(());
    }

    let request = sheet.save_request();
    match ctx.services.api.save_attendance(&request).await {
        Ok(_) => {
            let present = request.participants.iter().filter(|m| m.is_present).count();
            log_admin_action(
                ctx.state.user_id(),
                "save_attendance",
                Some(&request.attendance_id.to_string()),
                Some(&format!("{}/{} present", present, request.participants.len())),
            );
            notify_success(ctx, "messages.attendance_saved");
            ctx.document.close_modal(ModalId::AttendanceRecordModal);
            ctx.state.attendance.sheet = None;
            ctx.state.attendance.date = None;

            if let Some(group) = ctx.state.attendance.group.clone() {
                select_attendance_group(ctx, group.id, &group.name).await?;
            }
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/attendance/save",
                &err,
                "errors.attendance_save",
                "errors.attendance_save_generic",
            );
        }
    }
    Ok(())
}

pub async fn load_attendance_stats(ctx: &mut AppContext, group_id: i64) -> Result<()> {
    match ctx.services.api.attendance_stats(group_id).await {
        Ok(stats) => {
            let body = render::render_attendance_stats(&stats, &ctx.i18n);
            let title = ctx.i18n.t("titles.attendance_stats");
            ctx.document
                .show_modal_with(ModalId::AttendanceStatsModal, modal(ModalId::AttendanceStatsModal, &title, body));
        }
        Err(err) => {
            report_failure(
                ctx,
                "/api/admin/attendance/stats",
                &err,
                "errors.stats",
                "errors.stats_generic",
            );
        }
    }
    Ok(())
}
