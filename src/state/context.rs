//! Controller context
//!
//! Everything the dispatchers need travels in one [`AppContext`]: settings,
//! services, translations, the client-held state and the page being rendered.
//! Dispatchers borrow it mutably, so there is a single logical thread of control.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Settings;
use crate::i18n::I18n;
use crate::models::{Session, SportGroup};
use crate::services::{HostPlatform, Notifier, ServiceFactory};
use crate::state::attendance::AttendanceSelection;
use crate::utils::errors::Result;
use crate::view::Document;

/// Client-held state of the controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Set once by a successful init
    pub session: Option<Session>,
    /// Cached sport groups; the source of truth for price lookups
    pub sport_groups: Vec<SportGroup>,
    pub attendance: AttendanceSelection,
    /// Participant being edited in the student form, `None` when adding
    pub editing_student: Option<i64>,
}

impl AppState {
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn user_id(&self) -> i64 {
        self.session.as_ref().map_or(0, |s| s.id)
    }

    pub fn find_group(&self, group_id: i64) -> Option<&SportGroup> {
        self.sport_groups.iter().find(|g| g.id == group_id)
    }
}

/// Application-wide context passed to every dispatcher
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub services: Arc<ServiceFactory>,
    pub i18n: I18n,
    pub state: AppState,
    pub document: Document,
}

impl AppContext {
    /// Create a new AppContext from already built parts
    pub fn new(settings: Settings, services: ServiceFactory, i18n: I18n) -> Self {
        Self {
            settings,
            services: Arc::new(services),
            i18n,
            state: AppState::default(),
            document: Document::new(),
        }
    }

    /// Build services and translations from settings
    ///
    /// The notifier follows host availability unless one is given.
    pub async fn from_settings(
        settings: Settings,
        host: Option<Arc<dyn HostPlatform>>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Result<Self> {
        let services = match notifier {
            Some(notifier) => ServiceFactory::with_notifier(&settings, host, notifier)?,
            None => ServiceFactory::new(&settings, host)?,
        };

        let mut i18n = I18n::embedded(&settings.i18n)?;
        if let Some(dir) = settings.i18n.translations_dir.as_deref() {
            debug!(dir = dir, "Loading translation overrides");
            i18n.load_translations(Path::new(dir)).await?;
        }
        let stats = i18n.get_stats();
        debug!(
            languages = stats.languages.len(),
            keys = stats.total_keys,
            "Translations ready"
        );

        info!(base_url = services.api.base_url(), "Controller context created");
        Ok(Self::new(settings, services, i18n))
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_role_helpers() {
        let mut state = AppState::default();
        assert!(!state.is_admin());
        assert_eq!(state.user_id(), 0);

        state.session = Some(
            serde_json::from_value(json!({"id": 5, "role": "admin"})).unwrap(),
        );
        assert!(state.is_admin());
        assert_eq!(state.user_id(), 5);
    }

    #[test]
    fn test_find_group() {
        let state = AppState {
            sport_groups: serde_json::from_value(json!([{"id": 1, "name": "Дзюдо"}])).unwrap(),
            ..Default::default()
        };
        assert_eq!(state.find_group(1).map(|g| g.name.as_str()), Some("Дзюдо"));
        assert!(state.find_group(2).is_none());
    }

    #[tokio::test]
    async fn test_context_from_default_settings() {
        let settings = Settings::default();
        let notifier: Arc<dyn Notifier> = Arc::new(crate::services::ConsoleNotifier::new(
            Box::new(std::io::empty()),
            Box::new(std::io::sink()),
        ));
        let ctx = AppContext::from_settings(settings, None, Some(notifier)).await.unwrap();
        assert!(ctx.state.session.is_none());
        assert!(!ctx.document.is_visible(crate::view::ids::ADMIN_PANEL));
        assert_eq!(ctx.i18n.language(), "ru");
    }
}
