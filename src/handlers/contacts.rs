//! Club contacts and outgoing links

use tracing::{debug, warn};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{tel_link, telegram_link};
use crate::utils::logging::log_api_error;
use crate::view::ids::{ModalId, CONTACT_INFO};
use crate::view::render::{self, load_error, ContactCard};

/// Fill the contact modal of the parent panel
pub async fn load_contact_data(ctx: &mut AppContext) -> Result<()> {
    match ctx.services.api.contact().await {
        Ok(info) => {
            let view = render::render_contact_info(&info, &ctx.i18n);
            ctx.document.mount(CONTACT_INFO, view);
        }
        Err(err) => {
            log_api_error("/api/parent/contact", &err, None);
            ctx.document.mount(CONTACT_INFO, load_error(&ctx.i18n, "contacts.load_error"));
        }
    }
    Ok(())
}

/// Contacts modal opened from a group card; falls back to the director's contact
pub async fn open_contacts(ctx: &mut AppContext) -> Result<()> {
    let info = match ctx.services.api.contact().await {
        Ok(info) => Some(info),
        Err(err) => {
            warn!(error = %err, "Contact data unavailable, using fallback");
            None
        }
    };

    let card = ContactCard::from_info(info.as_ref(), &ctx.i18n);
    let view = render::render_dynamic_contacts(&card, &ctx.i18n);
    ctx.document.show_modal_with(ModalId::DynamicContactModal, view);
    Ok(())
}

pub fn call_phone(ctx: &mut AppContext, phone: &str) -> Result<()> {
    let link = tel_link(phone);
    debug!(link = %link, "Calling");
    ctx.services.open_link(&link);
    Ok(())
}

pub fn open_telegram(ctx: &mut AppContext, username: &str) -> Result<()> {
    let link = telegram_link(username);
    debug!(link = %link, "Opening Telegram");
    ctx.services.open_link(&link);
    Ok(())
}
