//! Services module
//!
//! This module contains the collaborators the view controller talks to:
//! the backend API, the host platform and the notification shim.

pub mod api;
pub mod host;
pub mod notification;

// Re-export commonly used services
pub use api::{ApiClient, Ack};
pub use host::{HostPlatform, LaunchParams};
pub use notification::{Notifier, HostNotifier, ConsoleNotifier, NotificationService, select_notifier};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::models::HostIdentity;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub api: ApiClient,
    pub notifications: NotificationService,
    pub host: Option<Arc<dyn HostPlatform>>,
    stub_identity: HostIdentity,
}

impl ServiceFactory {
    /// Create a new ServiceFactory; the notifier is chosen from host availability
    pub fn new(settings: &Settings, host: Option<Arc<dyn HostPlatform>>) -> Result<Self> {
        let notifier = select_notifier(host.clone());
        Self::with_notifier(settings, host, notifier)
    }

    /// Create a ServiceFactory with an explicit notifier
    pub fn with_notifier(
        settings: &Settings,
        host: Option<Arc<dyn HostPlatform>>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(&settings.api)?,
            notifications: NotificationService::new(notifier),
            host,
            stub_identity: HostIdentity::from(&settings.stub_user),
        })
    }

    /// Identity for `/api/init`: the host's launch user, else the configured stub
    pub fn identity(&self) -> HostIdentity {
        self.host
            .as_ref()
            .and_then(|host| host.identity())
            .unwrap_or_else(|| self.stub_identity.clone())
    }

    /// Open an external link through the host, or log it when there is none
    pub fn open_link(&self, url: &str) {
        match &self.host {
            Some(host) => host.open_link(url),
            None => tracing::info!(url = url, "Open link"),
        }
    }
}

impl std::fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceFactory")
            .field("api", &self.api)
            .field("host", &self.host.is_some())
            .finish()
    }
}
