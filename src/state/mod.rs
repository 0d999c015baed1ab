//! State management module
//!
//! This module holds the controller context and the client-side state the
//! dispatchers mutate.

pub mod attendance;
pub mod context;

// Re-export commonly used state components
pub use attendance::{AttendanceSelection, AttendanceSheet, SelectedDate, SelectedGroup};
pub use context::{AppContext, AppState};
