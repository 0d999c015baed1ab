//! Participant models

use serde::{Deserialize, Serialize};
use super::null_as_default;

/// Subscription attached to a participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub sport_group_id: Option<i64>,
    #[serde(default)]
    pub sport_group_name: Option<String>,
    #[serde(default)]
    pub subscription_type: Option<String>,
    #[serde(default)]
    pub remaining_lessons: Option<i64>,
}

/// A registered child/athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medical_certificate: bool,
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default)]
    pub discount_percent: Option<i64>,
    #[serde(default)]
    pub authorization_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriptions: Vec<Subscription>,
}

/// Roster row of `/api/admin/group/:id/students`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStudent {
    pub participant_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medical_certificate: bool,
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default)]
    pub discount_percent: Option<i64>,
    #[serde(default)]
    pub authorization_code: Option<String>,
    #[serde(default)]
    pub total_paid: Option<i64>,
    #[serde(default)]
    pub remaining_lessons: Option<i64>,
    #[serde(default)]
    pub subscription_type: Option<String>,
}

/// Row of the admin students table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub participant_id: i64,
    pub participant_name: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_payments: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriptions: Vec<Subscription>,
}

impl StudentSummary {
    pub fn first_subscription(&self) -> Option<&Subscription> {
        self.subscriptions.first()
    }
}

/// Participant a parent has claimed with an authorization code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedParticipant {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub authorized_at: Option<String>,
}

/// Body of the participant registration form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterParticipantRequest {
    pub full_name: String,
    pub parent_phone: String,
    pub birth_date: String,
    pub sport_group_id: Option<i64>,
    pub medical_certificate: bool,
    pub discount_type: String,
    pub discount_percent: i64,
}

/// Body of the admin student form (create and edit)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRequest {
    pub full_name: String,
    pub parent_phone: String,
    pub birth_date: String,
    pub sport_group_id: Option<i64>,
    pub subscription_type: String,
    pub total_lessons: i64,
    pub medical_certificate: bool,
    pub discount_type: String,
    pub discount_percent: i64,
}

/// Result of creating or updating a participant
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParticipantSaved {
    #[serde(default)]
    pub participant_id: Option<i64>,
    #[serde(default)]
    pub authorization_code: Option<String>,
}

/// Body of `POST /api/auth/verify`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyCodeRequest {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_summary_defaults() {
        let json = r#"{"participant_id": 4, "participant_name": "Мария"}"#;
        let student: StudentSummary = serde_json::from_str(json).unwrap();
        assert!(!student.has_payments);
        assert!(student.first_subscription().is_none());
    }

    #[test]
    fn test_participant_with_subscription() {
        let json = r#"{"id": 4, "full_name": "Мария", "parent_phone": "+7900",
            "birth_date": "2015-01-01", "medical_certificate": true,
            "subscriptions": [{"sport_group_id": 2, "subscription_type": "8 занятий"}]}"#;
        let participant: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(participant.subscriptions[0].sport_group_id, Some(2));
        assert!(participant.discount_type.is_none());
    }

    #[test]
    fn test_null_columns_read_as_defaults() {
        let json = r#"[{"participant_name": "A", "parent_phone": "1", "birth_date": null,
            "medical_certificate": null}]"#;
        let students: Vec<GroupStudent> = serde_json::from_str(json).unwrap();
        assert_eq!(students[0].birth_date, "");
        assert!(!students[0].medical_certificate);

        let json = r#"{"id": 4, "full_name": "Мария", "parent_phone": null, "birth_date": null,
            "medical_certificate": null, "subscriptions": null}"#;
        let participant: Participant = serde_json::from_str(json).unwrap();
        assert!(participant.parent_phone.is_empty());
        assert!(participant.subscriptions.is_empty());
    }
}
