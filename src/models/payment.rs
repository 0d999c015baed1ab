//! Payment and subscription models

use serde::{Deserialize, Serialize};
use super::null_as_default;

/// Purchased lesson package; the Russian label is the wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionType {
    #[serde(rename = "8 занятий")]
    Eight,
    #[serde(rename = "12 занятий")]
    Twelve,
    #[serde(rename = "Разовые занятия")]
    Single,
}

impl SubscriptionType {
    pub const ALL: [SubscriptionType; 3] = [
        SubscriptionType::Eight,
        SubscriptionType::Twelve,
        SubscriptionType::Single,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubscriptionType::Eight => "8 занятий",
            SubscriptionType::Twelve => "12 занятий",
            SubscriptionType::Single => "Разовые занятия",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label.trim())
    }

    pub fn lessons(self) -> i64 {
        match self {
            SubscriptionType::Eight => 8,
            SubscriptionType::Twelve => 12,
            SubscriptionType::Single => 1,
        }
    }

    /// Lessons for a raw form label; anything unrecognised counts as one lesson
    pub fn lessons_for_label(label: &str) -> i64 {
        Self::from_label(label).map_or(1, Self::lessons)
    }
}

/// Approval state of a payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
    /// A status string this client does not know; shown as-is
    Other(String),
}

impl PaymentStatus {
    pub fn from_wire(status: &str) -> Self {
        match status {
            "pending" => PaymentStatus::Pending,
            "approved" => PaymentStatus::Approved,
            "rejected" => PaymentStatus::Rejected,
            other => PaymentStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Rejected => "rejected",
            PaymentStatus::Other(other) => other,
        }
    }

    pub fn is_pending(&self) -> bool {
        *self == PaymentStatus::Pending
    }
}

/// A parent's payment as listed for admins
///
/// Older backends report a boolean `is_paid` instead of `status`;
/// it is mapped onto the status enum (`true` approved, `false` pending).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PaymentWire")]
pub struct Payment {
    pub id: i64,
    pub group_id: Option<i64>,
    pub participant_name: String,
    pub participant_phone: Option<String>,
    pub sport_group: String,
    pub subscription_type: String,
    pub amount: i64,
    pub payment_method: Option<String>,
    pub status: PaymentStatus,
    pub created_at: Option<String>,
    pub payment_date: Option<String>,
    pub admin_notes: Option<String>,
}

#[derive(Deserialize)]
struct PaymentWire {
    id: i64,
    #[serde(default, alias = "sport_group_id")]
    group_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    participant_name: String,
    #[serde(default)]
    participant_phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    sport_group: String,
    #[serde(default, deserialize_with = "null_as_default")]
    subscription_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    amount: i64,
    #[serde(default)]
    payment_method: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    is_paid: Option<bool>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    payment_date: Option<String>,
    #[serde(default)]
    admin_notes: Option<String>,
}

impl From<PaymentWire> for Payment {
    fn from(wire: PaymentWire) -> Self {
        let status = match (wire.status.as_deref(), wire.is_paid) {
            (Some(status), _) => PaymentStatus::from_wire(status),
            (None, Some(true)) => PaymentStatus::Approved,
            (None, _) => PaymentStatus::Pending,
        };

        Self {
            id: wire.id,
            group_id: wire.group_id,
            participant_name: wire.participant_name,
            participant_phone: wire.participant_phone,
            sport_group: wire.sport_group,
            subscription_type: wire.subscription_type,
            amount: wire.amount,
            payment_method: wire.payment_method,
            status,
            created_at: wire.created_at,
            payment_date: wire.payment_date,
            admin_notes: wire.admin_notes,
        }
    }
}

impl Payment {
    /// Payments of one group; matched by id when the backend reports it, else by name
    pub fn belongs_to(&self, group_id: i64, group_name: &str) -> bool {
        self.group_id == Some(group_id) || self.sport_group == group_name
    }
}

/// Body of `POST /api/parent/payment`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentRequest {
    pub participant_id: i64,
    pub sport_group_id: Option<i64>,
    pub subscription_type: String,
    pub total_lessons: i64,
    pub amount: Option<i64>,
    pub payment_method: String,
}

/// Body of the approve/reject endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentDecision {
    pub admin_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_labels() {
        assert_eq!(SubscriptionType::from_label("12 занятий"), Some(SubscriptionType::Twelve));
        assert_eq!(SubscriptionType::lessons_for_label("Разовые занятия"), 1);
        assert_eq!(SubscriptionType::lessons_for_label("8 занятий"), 8);
        assert_eq!(SubscriptionType::lessons_for_label(""), 1);
        assert_eq!(
            serde_json::to_string(&SubscriptionType::Eight).unwrap(),
            "\"8 занятий\""
        );
    }

    #[test]
    fn test_status_payment() {
        let json = r#"{"id": 7, "participant_name": "Иван", "sport_group": "Дзюдо",
            "subscription_type": "8 занятий", "amount": 4000, "status": "rejected"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.status, PaymentStatus::Rejected);
    }

    #[test]
    fn test_legacy_is_paid_payment() {
        let json = r#"{"id": 7, "participant_name": "Иван", "sport_group": "Дзюдо",
            "subscription_type": "8 занятий", "amount": 4000, "is_paid": true}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.status, PaymentStatus::Approved);

        let json = r#"{"id": 8, "amount": 100, "is_paid": false}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert!(payment.status.is_pending());
    }

    #[test]
    fn test_unknown_status_kept() {
        let json = r#"{"id": 9, "status": "refunded"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.status.as_str(), "refunded");
    }

    #[test]
    fn test_belongs_to_group() {
        let json = r#"{"id": 9, "group_id": 3, "sport_group": "Дзюдо"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert!(payment.belongs_to(3, "другое"));
        assert!(payment.belongs_to(4, "Дзюдо"));
        assert!(!payment.belongs_to(4, "ММА"));
    }

    #[test]
    fn test_null_columns_read_as_defaults() {
        let json = r#"{"id": 10, "participant_name": null, "sport_group": null,
            "subscription_type": null, "amount": null, "status": "pending"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.amount, 0);
        assert!(payment.participant_name.is_empty());
    }
}
