//! Test context for unified test setup
//!
//! Builds an [`AppContext`] wired to a mock backend, a recording notifier and
//! a recording host.

use std::sync::Arc;
use SportClub::config::Settings;
use SportClub::models::HostIdentity;
use SportClub::services::{HostPlatform, Notifier, ServiceFactory};
use SportClub::state::AppContext;
use SportClub::I18n;

use super::{backend_mock::BackendMockServer, recording::{RecordingHost, RecordingNotifier}};

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub notifier: Arc<RecordingNotifier>,
    pub host: Arc<RecordingHost>,
    pub ctx: AppContext,
}

impl TestContext {
    /// Context whose host reports no identity, so the configured stub is used
    pub async fn new() -> Self {
        Self::with_identity(None).await
    }

    pub async fn with_identity(identity: Option<HostIdentity>) -> Self {
        let _ = tracing_subscriber::fmt::try_init();

        let backend = BackendMockServer::new().await;
        let settings = Self::create_test_settings(&backend.uri());

        let notifier = Arc::new(RecordingNotifier::new());
        let host = Arc::new(RecordingHost::new(identity));

        let services = ServiceFactory::with_notifier(
            &settings,
            Some(host.clone() as Arc<dyn HostPlatform>),
            notifier.clone() as Arc<dyn Notifier>,
        )
        .expect("Failed to create services");
        let i18n = I18n::embedded(&settings.i18n).expect("Failed to load translations");

        Self {
            backend,
            notifier,
            host,
            ctx: AppContext::new(settings, services, i18n),
        }
    }

    /// Test settings pointing at the mock backend
    pub fn create_test_settings(base_url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = base_url.to_string();
        settings
    }
}
