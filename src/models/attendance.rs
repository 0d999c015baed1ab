//! Attendance models

use serde::{Deserialize, Serialize};
use super::null_as_default;

/// Why a participant missed a lesson
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceReason {
    #[default]
    Unexcused,
    Excused,
}

impl AbsenceReason {
    pub const ALL: [AbsenceReason; 2] = [AbsenceReason::Unexcused, AbsenceReason::Excused];

    pub fn key(self) -> &'static str {
        match self {
            AbsenceReason::Unexcused => "unexcused",
            AbsenceReason::Excused => "excused",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }
}

/// Group offered in the attendance picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A scheduled lesson date of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledDate {
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day_name: String,
    #[serde(default)]
    pub day_number: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub month: String,
    #[serde(default)]
    pub year: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_attendance: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_completed: bool,
}

fn scalar_text(value: &Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

impl ScheduledDate {
    /// `day_name day_number month`
    pub fn short_label(&self) -> String {
        format!("{} {} {}", self.day_name, scalar_text(&self.day_number), self.month)
    }

    /// `day_name day_number month year`, used as the roster heading
    pub fn full_label(&self) -> String {
        format!("{} {}", self.short_label(), scalar_text(&self.year))
    }

    pub fn state(&self) -> DateState {
        match (self.has_attendance, self.is_completed) {
            (false, _) => DateState::New,
            (true, false) => DateState::Pending,
            (true, true) => DateState::Completed,
        }
    }
}

/// Progress of attendance taking for one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateState {
    New,
    Pending,
    Completed,
}

/// Roster row with the current presence flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: i64,
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_present: bool,
    #[serde(default)]
    pub absence_reason: Option<AbsenceReason>,
}

/// Response of `/api/admin/attendance/participants/:groupId/:date`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendanceRoster {
    pub attendance_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_completed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<RosterEntry>,
}

/// One participant's mark in a save request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceMark {
    pub id: i64,
    pub is_present: bool,
    pub absence_reason: Option<AbsenceReason>,
}

/// Body of `POST /api/admin/attendance/save`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveAttendanceRequest {
    pub attendance_id: i64,
    pub participants: Vec<AttendanceMark>,
}

/// Per-date statistics of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceStat {
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub present: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub absent: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percentage: f64,
}

/// One lesson in a participant's attendance history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantAttendance {
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sport_group: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_present: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_labels_and_state() {
        let json = r#"{"date": "2024-03-05", "day_name": "Вторник", "day_number": 5,
            "month": "марта", "year": 2024, "start_time": "18:00", "end_time": "19:00",
            "has_attendance": true, "is_completed": false}"#;
        let date: ScheduledDate = serde_json::from_str(json).unwrap();
        assert_eq!(date.short_label(), "Вторник 5 марта");
        assert_eq!(date.full_label(), "Вторник 5 марта 2024");
        assert_eq!(date.state(), DateState::Pending);
    }

    #[test]
    fn test_mark_serializes_null_reason_when_present() {
        let mark = AttendanceMark { id: 1, is_present: true, absence_reason: None };
        let value = serde_json::to_value(&mark).unwrap();
        assert!(value["absence_reason"].is_null());

        let mark = AttendanceMark { id: 2, is_present: false, absence_reason: Some(AbsenceReason::Excused) };
        let value = serde_json::to_value(&mark).unwrap();
        assert_eq!(value["absence_reason"], "excused");
    }

    #[test]
    fn test_null_columns_read_as_defaults() {
        let json = r#"{"date": "2024-03-05", "day_name": null, "month": null,
            "start_time": null, "end_time": null, "has_attendance": null, "is_completed": null}"#;
        let date: ScheduledDate = serde_json::from_str(json).unwrap();
        assert!(date.day_name.is_empty());
        assert!(!date.is_completed);

        let json = r#"{"attendance_id": 3, "is_completed": null, "participants": [
            {"id": 1, "full_name": "Миша", "parent_phone": null, "is_present": null}]}"#;
        let roster: AttendanceRoster = serde_json::from_str(json).unwrap();
        assert!(!roster.is_completed);
        assert!(!roster.participants[0].is_present);
    }
}
