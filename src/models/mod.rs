//! Data models module
//!
//! Transient, client-held records deserialized from backend responses
//! and the request bodies sent back.

pub mod user;
pub mod group;
pub mod participant;
pub mod payment;
pub mod attendance;
pub mod discount;

// Re-export commonly used models
pub use user::{HostIdentity, Role, Session};
pub use group::{Category, SportGroup};
pub use participant::{
    Participant, Subscription, GroupStudent, StudentSummary, AuthorizedParticipant,
    RegisterParticipantRequest, StudentRequest, ParticipantSaved, VerifyCodeRequest,
};
pub use payment::{Payment, PaymentStatus, SubscriptionType, CreatePaymentRequest, PaymentDecision};
pub use attendance::{
    AbsenceReason, AttendanceGroup, ScheduledDate, DateState, RosterEntry, AttendanceRoster,
    AttendanceMark, SaveAttendanceRequest, AttendanceStat, ParticipantAttendance,
};
pub use discount::{Discount, CreateDiscountRequest, ContactInfo};

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the type's default, like a missing key
///
/// The backend emits `null` for nullable columns.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
