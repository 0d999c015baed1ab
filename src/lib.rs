//! SportClub Mini App client
//!
//! View controller for a sports club's Telegram Mini App. This library
//! provides the backend API client, client-side state, the declarative view
//! layer and the action dispatchers for the admin and parent panels, with
//! multi-language support.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod i18n;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{SportClubError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{AppContext, AppState};
pub use view::{Action, Document, FormId, ModalId};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
