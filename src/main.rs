//! SportClub Mini App client
//!
//! Console entry point: runs the session start-up against the configured
//! backend and prints the rendered main view.

use std::sync::Arc;
use tracing::{info, warn};

use SportClub::{
    config::Settings,
    handlers,
    models::{Category, HostIdentity},
    services::{ConsoleNotifier, HostPlatform, LaunchParams, Notifier},
    state::AppContext,
    utils::logging,
    view::ids::{ADMIN_PANEL, PARENT_PANEL, SPORT_GROUPS},
};

/// Host built from a Telegram `initData` string passed through the environment
struct LaunchHost {
    params: LaunchParams,
}

impl HostPlatform for LaunchHost {
    fn identity(&self) -> Option<HostIdentity> {
        self.params.user.clone()
    }

    fn show_alert(&self, message: &str) {
        println!("{}", message);
    }

    fn show_confirm(&self, _message: &str) -> bool {
        false
    }

    fn show_prompt(&self, _message: &str) -> Option<String> {
        None
    }

    fn open_link(&self, url: &str) {
        println!("{}", url);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", SportClub::info());

    let host: Option<Arc<dyn HostPlatform>> = match std::env::var("SPORTCLUB_INIT_DATA") {
        Ok(init_data) => {
            let params = LaunchParams::parse(&init_data)?;
            Some(Arc::new(LaunchHost { params }))
        }
        Err(_) => None,
    };

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::stdio());
    let mut ctx = AppContext::from_settings(settings, host, Some(notifier)).await?;

    handlers::init(&mut ctx).await?;

    if let Some(key) = std::env::args().nth(1) {
        match Category::from_key(&key) {
            Some(category) => handlers::groups::open_category(&mut ctx, category)?,
            None => warn!(category = %key, "Unknown category"),
        }
    }

    info!(
        admin_panel = ctx.document.is_visible(ADMIN_PANEL),
        parent_panel = ctx.document.is_visible(PARENT_PANEL),
        "Session ready"
    );
    println!("{}", ctx.document.container_html(SPORT_GROUPS));

    Ok(())
}
