//! Club contact views

use crate::i18n::I18n;
use crate::models::ContactInfo;
use crate::utils::helpers::telegram_username;
use crate::view::action::Action;
use crate::view::ids::ModalId;
use crate::view::node::{el, Element, Node};
use super::modal;

const FALLBACK_PHONE: &str = "+7 902 923 7193";
const FALLBACK_TELEGRAM: &str = "Taiky_admin";

/// Contact shown in the dynamic contacts modal, with fallbacks applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub name: String,
    pub phone: String,
    /// Without a leading `@`
    pub telegram: String,
}

impl ContactCard {
    /// Fill missing fields with the club director's contact
    pub fn from_info(info: Option<&ContactInfo>, i18n: &I18n) -> Self {
        let pick = |value: Option<&String>| value.filter(|v| !v.is_empty()).cloned();
        let info = info.cloned().unwrap_or_default();
        Self {
            name: pick(info.name.as_ref()).unwrap_or_else(|| i18n.t("contacts.director")),
            phone: pick(info.phone.as_ref()).unwrap_or_else(|| FALLBACK_PHONE.to_string()),
            telegram: telegram_username(
                &pick(info.telegram.as_ref()).unwrap_or_else(|| FALLBACK_TELEGRAM.to_string()),
            ),
        }
    }
}

fn contact_buttons(phone: &str, telegram: &str, i18n: &I18n) -> Element {
    el("div")
        .class("contact-actions")
        .child(
            el("button")
                .class("btn")
                .on_click(Action::CallPhone { phone: phone.to_string() })
                .text(i18n.t("contacts.call")),
        )
        .child(
            el("button")
                .class("btn btn-secondary")
                .on_click(Action::OpenTelegram { username: telegram.to_string() })
                .text(i18n.t("contacts.telegram_button")),
        )
}

/// Contents of the parent contact modal
pub fn render_contact_info(info: &ContactInfo, i18n: &I18n) -> Node {
    let line = |key: &str, value: Option<&String>| {
        el("p")
            .child(el("strong").text(i18n.t(key)))
            .text(format!(" {}", value.map(String::as_str).unwrap_or("")))
    };

    let phone = info.phone.clone().unwrap_or_default();
    let telegram = telegram_username(info.telegram.as_deref().unwrap_or(""));

    el("div")
        .class("contact-info")
        .child(el("h4").text(i18n.t("contacts.title")))
        .child(line("contacts.phone", info.phone.as_ref()))
        .child(line("contacts.telegram", info.telegram.as_ref()))
        .child_opt(info.email.as_ref().filter(|e| !e.is_empty()).map(|_| line("contacts.email", info.email.as_ref())))
        .child(line("contacts.address", info.address.as_ref()))
        .child(contact_buttons(&phone, &telegram, i18n))
        .into()
}

/// Contacts modal opened from a group card
pub fn render_dynamic_contacts(card: &ContactCard, i18n: &I18n) -> Element {
    let body = el("div")
        .class("group-info")
        .child(el("h4").text(i18n.t("contacts.director")))
        .child(el("p").text(card.name.clone()))
        .child(contact_buttons(&card.phone, &card.telegram, i18n))
        .child(
            el("div")
                .class("contact-lines")
                .child(el("div").text(i18n.tf("contacts.phone_line", &[("phone", &card.phone)])))
                .child(el("div").text(i18n.tf("contacts.telegram_line", &[("username", &card.telegram)]))),
        );

    modal(ModalId::DynamicContactModal, &i18n.t("contacts.modal_title"), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::render::test_i18n as i18n;

    #[test]
    fn test_contact_card_fallbacks() {
        let card = ContactCard::from_info(None, &i18n());
        assert_eq!(card.phone, "+7 902 923 7193");
        assert_eq!(card.telegram, "Taiky_admin");
        assert_eq!(card.name, "Директор клуба");
    }

    #[test]
    fn test_contact_card_strips_at() {
        let info = ContactInfo {
            name: Some("Ольга".into()),
            phone: Some("+7 (900) 111-22-33".into()),
            telegram: Some("@club_admin".into()),
            ..Default::default()
        };
        let card = ContactCard::from_info(Some(&info), &i18n());
        assert_eq!(card.telegram, "club_admin");

        let node: Node = render_dynamic_contacts(&card, &i18n()).into();
        assert!(node.actions().contains(&&Action::CallPhone { phone: "+7 (900) 111-22-33".into() }));
        assert!(node.actions().contains(&&Action::OpenTelegram { username: "club_admin".into() }));
        assert!(node.text_content().contains("Telegram: @club_admin"));
    }
}
