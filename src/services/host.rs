//! Host platform capability
//!
//! The Mini App runs inside Telegram, which hands over the launch identity and
//! native alert/confirm/prompt primitives. Outside Telegram none of this
//! exists, so the host is optional everywhere it is used.

use url::form_urlencoded;
use crate::models::HostIdentity;
use crate::utils::errors::{SportClubError, Result};

/// Primitives the host platform exposes to the client
pub trait HostPlatform: Send + Sync {
    /// Identity of the user who launched the app, when the host knows it
    fn identity(&self) -> Option<HostIdentity>;

    fn show_alert(&self, message: &str);

    fn show_confirm(&self, message: &str) -> bool;

    /// `None` when the user cancels
    fn show_prompt(&self, message: &str) -> Option<String>;

    fn open_link(&self, url: &str);
}

/// Launch parameters passed by Telegram as URL-encoded `initData`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    pub user: Option<HostIdentity>,
    pub auth_date: Option<i64>,
    pub query_id: Option<String>,
    pub hash: Option<String>,
}

impl LaunchParams {
    /// Parse an `initData` string such as
    /// `query_id=...&user=%7B%22id%22%3A1%7D&auth_date=...&hash=...`
    ///
    /// The hash is kept but not verified; that is the backend's job.
    pub fn parse(init_data: &str) -> Result<Self> {
        let mut params = LaunchParams {
            user: None,
            auth_date: None,
            query_id: None,
            hash: None,
        };

        for (key, value) in form_urlencoded::parse(init_data.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "user" => {
                    let user: HostIdentity = serde_json::from_str(&value)
                        .map_err(|e| SportClubError::InvalidInput(format!("Invalid initData user: {}", e)))?;
                    params.user = Some(user);
                }
                "auth_date" => params.auth_date = value.parse().ok(),
                "query_id" => params.query_id = Some(value.into_owned()),
                "hash" => params.hash = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(params)
    }
}
