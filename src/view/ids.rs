//! Container, control and modal identifiers of the page

use serde::{Deserialize, Serialize};

pub const SPORT_GROUPS: &str = "sportGroups";
pub const ADMIN_PANEL: &str = "adminPanel";
pub const PARENT_PANEL: &str = "parentPanel";
pub const PAYMENT_BUTTON: &str = "paymentBtn";
pub const ATTENDANCE_BUTTON: &str = "attendanceBtn";
pub const DISCOUNT_FORM: &str = "discountForm";
pub const STUDENT_MODAL_TITLE: &str = "modalTitle";

pub const DISCOUNTS_LIST: &str = "discountsList";
pub const CONTACT_INFO: &str = "contactInfo";
pub const PAYMENTS_LIST: &str = "paymentsList";
pub const ATTENDANCE_CONTENT: &str = "attendanceContent";
pub const AUTHORIZED_PARTICIPANTS: &str = "authorizedParticipants";
pub const PARENT_ATTENDANCE_CONTENT: &str = "parentAttendanceContent";
pub const STUDENTS_TABLE: &str = "studentsTable";

/// `<select>` option containers
pub const PARTICIPANT_GROUP_SELECT: &str = "participantGroup";
pub const PAYMENT_PARTICIPANT_SELECT: &str = "paymentParticipant";
pub const PAYMENT_GROUP_SELECT: &str = "paymentGroup";
pub const STUDENT_GROUP_SELECT: &str = "sportGroup";

/// Modal dialogs, both the static ones of the page and those built on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalId {
    PaymentsModal,
    AttendanceModal,
    DiscountsModal,
    ParentAttendanceModal,
    AuthorizationModal,
    ParticipantsModal,
    ContactModal,
    PaymentModal,
    StudentModal,
    GroupStudentsModal,
    GroupInfoModal,
    DynamicContactModal,
    GroupPaymentsModal,
    AttendanceDateModal,
    AttendanceRecordModal,
    AttendanceStatsModal,
}

impl ModalId {
    pub fn id(self) -> &'static str {
        match self {
            ModalId::PaymentsModal => "paymentsModal",
            ModalId::AttendanceModal => "attendanceModal",
            ModalId::DiscountsModal => "discountsModal",
            ModalId::ParentAttendanceModal => "parentAttendanceModal",
            ModalId::AuthorizationModal => "authorizationModal",
            ModalId::ParticipantsModal => "participantsModal",
            ModalId::ContactModal => "contactModal",
            ModalId::PaymentModal => "paymentModal",
            ModalId::StudentModal => "studentModal",
            ModalId::GroupStudentsModal => "groupStudentsModal",
            ModalId::GroupInfoModal => "groupInfoModal",
            ModalId::DynamicContactModal => "dynamicContactModal",
            ModalId::GroupPaymentsModal => "groupPaymentsModal",
            ModalId::AttendanceDateModal => "attendanceDateModal",
            ModalId::AttendanceRecordModal => "attendanceRecordModal",
            ModalId::AttendanceStatsModal => "attendanceStatsModal",
        }
    }
}

/// Forms whose field values the dispatchers read on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormId {
    DiscountForm,
    ParticipantForm,
    PaymentForm,
    AuthorizationForm,
    StudentForm,
}

/// Field names shared by the dispatchers and the form pre-fill code
pub mod fields {
    pub const DISCOUNT_NAME: &str = "discountName";
    pub const DISCOUNT_DESCRIPTION: &str = "discountDescription";
    pub const DISCOUNT_TYPE: &str = "discountTypeSelect";
    pub const DISCOUNT_PERCENT: &str = "discountPercentInput";
    pub const DISCOUNT_START: &str = "discountStartDate";
    pub const DISCOUNT_END: &str = "discountEndDate";

    pub const FULL_NAME: &str = "fullName";
    pub const PARENT_PHONE: &str = "parentPhone";
    pub const BIRTH_DATE: &str = "birthDate";
    pub const PARTICIPANT_GROUP: &str = "participantGroup";
    pub const STUDENT_GROUP: &str = "sportGroup";
    pub const SUBSCRIPTION_TYPE: &str = "subscriptionType";
    pub const MEDICAL_CERTIFICATE: &str = "medicalCertificate";
    pub const DISCOUNT_KIND: &str = "discountType";
    pub const DISCOUNT_VALUE: &str = "discountPercent";

    pub const PAYMENT_PARTICIPANT: &str = "paymentParticipant";
    pub const PAYMENT_GROUP: &str = "paymentGroup";
    pub const PAYMENT_TYPE: &str = "paymentType";
    pub const PAYMENT_AMOUNT: &str = "paymentAmount";

    pub const AUTH_CODE: &str = "authCode";
}
