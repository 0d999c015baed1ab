//! Attendance selection and the roster being edited

use crate::models::{AbsenceReason, AttendanceMark, AttendanceRoster, RosterEntry, SaveAttendanceRequest};

/// Group chosen in the attendance flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedGroup {
    pub id: i64,
    pub name: String,
}

/// Date chosen in the attendance flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDate {
    /// `YYYY-MM-DD` as sent to the backend
    pub date: String,
    /// Heading shown above the roster
    pub display: String,
}

/// Roster of one `(group, date)` session with the marks made so far
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSheet {
    pub attendance_id: i64,
    pub is_completed: bool,
    pub entries: Vec<RosterEntry>,
}

impl From<AttendanceRoster> for AttendanceSheet {
    fn from(roster: AttendanceRoster) -> Self {
        Self {
            attendance_id: roster.attendance_id,
            is_completed: roster.is_completed,
            entries: roster.participants,
        }
    }
}

impl AttendanceSheet {
    fn entry_mut(&mut self, participant_id: i64) -> Option<&mut RosterEntry> {
        self.entries.iter_mut().find(|e| e.id == participant_id)
    }

    /// Flip presence; returns the new value, or `None` for unknown participants
    pub fn toggle(&mut self, participant_id: i64) -> Option<bool> {
        let entry = self.entry_mut(participant_id)?;
        entry.is_present = !entry.is_present;
        Some(entry.is_present)
    }

    /// Record why a participant was absent
    pub fn set_reason(&mut self, participant_id: i64, reason: AbsenceReason) -> bool {
        match self.entry_mut(participant_id) {
            Some(entry) => {
                entry.absence_reason = Some(reason);
                true
            }
            None => false,
        }
    }

    /// Whether the absence-reason select of a participant is shown
    pub fn reason_visible(&self, participant_id: i64) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.id == participant_id)
            .map(|e| !e.is_present)
    }

    /// Marks to save: no reason for present participants, `unexcused` when unset
    pub fn marks(&self) -> Vec<AttendanceMark> {
        self.entries
            .iter()
            .map(|entry| AttendanceMark {
                id: entry.id,
                is_present: entry.is_present,
                absence_reason: if entry.is_present {
                    None
                } else {
                    Some(entry.absence_reason.unwrap_or_default())
                },
            })
            .collect()
    }

    pub fn save_request(&self) -> SaveAttendanceRequest {
        SaveAttendanceRequest {
            attendance_id: self.attendance_id,
            participants: self.marks(),
        }
    }
}

/// Current position in the attendance flow; overwritten on each navigation
#[derive(Debug, Clone, Default)]
pub struct AttendanceSelection {
    pub group: Option<SelectedGroup>,
    pub date: Option<SelectedDate>,
    pub sheet: Option<AttendanceSheet>,
}

impl AttendanceSelection {
    /// Select a group and forget any date picked for the previous one
    pub fn select_group(&mut self, id: i64, name: &str) {
        self.group = Some(SelectedGroup { id, name: name.to_string() });
        self.date = None;
        self.sheet = None;
    }
}
