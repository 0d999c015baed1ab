//! Session and identity models

use serde::{Deserialize, Serialize};
use crate::config::StubUserConfig;

/// Identity reported by the host platform at launch; posted to `/api/init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIdentity {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl From<&StubUserConfig> for HostIdentity {
    fn from(stub: &StubUserConfig) -> Self {
        Self {
            id: stub.id,
            username: Some(stub.username.clone()),
            first_name: Some(stub.first_name.clone()),
            last_name: Some(stub.last_name.clone()),
            language_code: None,
        }
    }
}

/// Server-assigned role of the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(other)]
    Parent,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// Session returned by `/api/init`, immutable for the controller lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Best-effort name for logs and greetings
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) if !last.is_empty() => format!("{} {}", first, last),
            (Some(first), _) => first.clone(),
            _ => self.username.clone().unwrap_or_else(|| self.id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_deserialization() {
        let json = r#"{"id": 1, "telegram_id": 123456789, "role": "admin", "first_name": "Анна"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.is_admin());
        assert_eq!(session.display_name(), "Анна");
    }

    #[test]
    fn test_unknown_role_is_parent() {
        let json = r#"{"id": 2, "role": "coach"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.role, Role::Parent);
        assert_eq!(session.display_name(), "2");
    }

    #[test]
    fn test_stub_identity_omits_language() {
        let stub = crate::config::Settings::default().stub_user;
        let identity = HostIdentity::from(&stub);
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["id"], 123456789);
        assert_eq!(value["username"], "test_user");
        assert!(value.get("language_code").is_none());
    }
}
