//! Typed event bindings
//!
//! Elements carry an [`Action`] instead of inline script. When a tree is
//! rendered to HTML the action is written as an escaped JSON attribute, so
//! interpolated names and ids can never break out into markup or script.

use serde::{Deserialize, Serialize};
use crate::models::{AbsenceReason, Category};
use super::ids::ModalId;

/// Something the user can trigger by clicking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ShowDirections,
    OpenCategory { category: Category },
    OpenGroupDetails { group_id: i64 },
    RequestEnroll { group_id: i64, group_name: String },
    OpenContacts,
    CallPhone { phone: String },
    OpenTelegram { username: String },

    ShowGroupStudents { group_id: i64, group_name: String },
    OpenGroupAttendance { group_id: i64, group_name: String },
    OpenPaymentsForGroup { group_id: i64, group_name: String },

    ApprovePayment { payment_id: i64 },
    RejectPayment { payment_id: i64 },
    DeleteDiscount { discount_id: i64 },

    SelectAttendanceGroup { group_id: i64, group_name: String },
    SelectAttendanceDate { date: String, display: String },
    ToggleAttendance { participant_id: i64 },
    UpdateAbsenceReason { participant_id: i64, reason: AbsenceReason },
    SaveAttendance,
    LoadAttendanceStats { group_id: i64 },

    LoadParticipantAttendance { participant_id: i64, participant_name: String },
    BackToParentAttendance,

    OpenAddStudent,
    EditStudent { student_id: i64 },
    DeleteStudent { student_id: i64 },
    RefreshStudents,

    SelectPaymentGroup { value: String },
    SelectPaymentType { value: String },

    ShowModal { modal: ModalId },
    CloseModal { modal: ModalId },
}

/// Binding for `change` events; the selected value completes the action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ChangeAction {
    AbsenceReason { participant_id: i64 },
    PaymentGroup,
    PaymentType,
}

impl ChangeAction {
    /// Combine the binding with the control's new value
    pub fn with_value(&self, value: &str) -> Option<Action> {
        match self {
            ChangeAction::AbsenceReason { participant_id } => {
                AbsenceReason::from_key(value).map(|reason| Action::UpdateAbsenceReason {
                    participant_id: *participant_id,
                    reason,
                })
            }
            ChangeAction::PaymentGroup => Some(Action::SelectPaymentGroup { value: value.to_string() }),
            ChangeAction::PaymentType => Some(Action::SelectPaymentType { value: value.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_payload() {
        let action = Action::ShowGroupStudents { group_id: 3, group_name: "O'Brien".to_string() };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"action":"show_group_students","group_id":3,"group_name":"O'Brien"}"#);
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_change_with_value() {
        let change = ChangeAction::AbsenceReason { participant_id: 5 };
        assert_eq!(
            change.with_value("excused"),
            Some(Action::UpdateAbsenceReason { participant_id: 5, reason: AbsenceReason::Excused })
        );
        assert_eq!(change.with_value("bogus"), None);
        assert_eq!(
            ChangeAction::PaymentType.with_value("8 занятий"),
            Some(Action::SelectPaymentType { value: "8 занятий".to_string() })
        );
    }
}
