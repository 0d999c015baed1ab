//! Backend API client
//!
//! Typed wrappers over the club backend's JSON endpoints. Every response is an
//! envelope carrying `success` and either a payload or an `error` string; any
//! answer without `success: true` becomes [`SportClubError::Api`] with the
//! server's message, while connection failures and non-JSON bodies are
//! transport errors. HTTP status codes are not inspected.

use std::time::Duration;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;
use crate::config::ApiConfig;
use crate::models::*;
use crate::utils::errors::{SportClubError, Result};

/// Response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    payload: serde_json::Map<String, Value>,
}

/// Payload of endpoints that only acknowledge
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct InitPayload {
    user: Session,
}

#[derive(Deserialize)]
struct GroupsPayload {
    #[serde(default)]
    groups: Vec<SportGroup>,
}

#[derive(Deserialize)]
struct GroupPayload {
    group: SportGroup,
}

#[derive(Deserialize)]
struct StudentsPayload<T> {
    #[serde(default = "Vec::new")]
    students: Vec<T>,
}

#[derive(Deserialize)]
struct ParticipantPayload {
    participant: Participant,
}

#[derive(Deserialize)]
struct ParticipantsPayload<T> {
    #[serde(default = "Vec::new")]
    participants: Vec<T>,
}

#[derive(Deserialize)]
struct PaymentsPayload {
    #[serde(default)]
    payments: Vec<Payment>,
}

#[derive(Deserialize)]
struct DiscountsPayload {
    #[serde(default)]
    discounts: Vec<Discount>,
}

#[derive(Deserialize)]
struct AttendanceGroupsPayload {
    #[serde(default)]
    groups: Vec<AttendanceGroup>,
}

#[derive(Deserialize)]
struct DatesPayload {
    #[serde(default)]
    dates: Vec<ScheduledDate>,
}

#[derive(Deserialize)]
struct StatsPayload<T> {
    #[serde(default = "Vec::new")]
    stats: Vec<T>,
}

#[derive(Deserialize)]
struct ContactPayload {
    #[serde(default)]
    contact_info: ContactInfo,
}

#[derive(Serialize)]
struct EnrollRequest<'a> {
    group_id: i64,
    group_name: &'a str,
}

/// HTTP client for the club backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // The backend keeps the identity from `/api/init` in a session cookie
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .cookie_store(true);
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(SportClubError::Http)?;

        Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Send a request and unwrap the response envelope into `T`
    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!(method = %method, url = %url, "Sending API request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: Envelope = serde_json::from_str(&text).map_err(|e| {
            SportClubError::InvalidResponse(format!("HTTP {} from {}: {}", status, path, e))
        })?;

        if !envelope.success {
            return Err(SportClubError::api(envelope.error));
        }

        serde_json::from_value(Value::Object(envelope.payload))
            .map_err(|e| SportClubError::InvalidResponse(format!("{}: {}", path, e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<Value, T>(Method::GET, path, None).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<Value, T>(Method::DELETE, path, None).await
    }

    // ===== Session and groups =====

    /// `POST /api/init`
    pub async fn init(&self, identity: &HostIdentity) -> Result<Session> {
        let payload: InitPayload = self.post("/api/init", identity).await?;
        Ok(payload.user)
    }

    /// `GET /api/sport-groups`
    pub async fn sport_groups(&self) -> Result<Vec<SportGroup>> {
        let payload: GroupsPayload = self.get("/api/sport-groups").await?;
        Ok(payload.groups)
    }

    /// `GET /api/sport-group/:id`
    pub async fn sport_group(&self, group_id: i64) -> Result<SportGroup> {
        let payload: GroupPayload = self.get(&format!("/api/sport-group/{}", group_id)).await?;
        Ok(payload.group)
    }

    /// `POST /api/enroll-request`
    pub async fn enroll_request(&self, group_id: i64, group_name: &str) -> Result<Ack> {
        self.post("/api/enroll-request", &EnrollRequest { group_id, group_name }).await
    }

    // ===== Admin: students and participants =====

    /// `GET /api/admin/group/:id/students`
    pub async fn group_students(&self, group_id: i64) -> Result<Vec<GroupStudent>> {
        let payload: StudentsPayload<GroupStudent> =
            self.get(&format!("/api/admin/group/{}/students", group_id)).await?;
        Ok(payload.students)
    }

    /// `GET /api/admin/students`
    pub async fn all_students(&self) -> Result<Vec<StudentSummary>> {
        let payload: StudentsPayload<StudentSummary> = self.get("/api/admin/students").await?;
        Ok(payload.students)
    }

    /// `GET /api/admin/participants`
    pub async fn participants(&self) -> Result<Vec<Participant>> {
        let payload: ParticipantsPayload<Participant> = self.get("/api/admin/participants").await?;
        Ok(payload.participants)
    }

    /// `GET /api/admin/participants/:id`
    pub async fn participant(&self, participant_id: i64) -> Result<Participant> {
        let payload: ParticipantPayload =
            self.get(&format!("/api/admin/participants/{}", participant_id)).await?;
        Ok(payload.participant)
    }

    /// `POST /api/admin/participants`
    pub async fn create_participant<B: Serialize>(&self, body: &B) -> Result<ParticipantSaved> {
        self.post("/api/admin/participants", body).await
    }

    /// `PUT /api/admin/participants/:id`
    pub async fn update_participant<B: Serialize>(&self, participant_id: i64, body: &B) -> Result<ParticipantSaved> {
        self.put(&format!("/api/admin/participants/{}", participant_id), body).await
    }

    /// `DELETE /api/admin/participants/:id`
    pub async fn delete_participant(&self, participant_id: i64) -> Result<Ack> {
        self.delete(&format!("/api/admin/participants/{}", participant_id)).await
    }

    // ===== Admin: payments =====

    /// `GET /api/admin/payments`
    pub async fn payments(&self) -> Result<Vec<Payment>> {
        let payload: PaymentsPayload = self.get("/api/admin/payments").await?;
        Ok(payload.payments)
    }

    /// `POST /api/admin/payments/:id/approve`
    pub async fn approve_payment(&self, payment_id: i64, admin_notes: &str) -> Result<Ack> {
        let body = PaymentDecision { admin_notes: admin_notes.to_string() };
        self.post(&format!("/api/admin/payments/{}/approve", payment_id), &body).await
    }

    /// `POST /api/admin/payments/:id/reject`
    pub async fn reject_payment(&self, payment_id: i64, admin_notes: &str) -> Result<Ack> {
        let body = PaymentDecision { admin_notes: admin_notes.to_string() };
        self.post(&format!("/api/admin/payments/{}/reject", payment_id), &body).await
    }

    // ===== Discounts =====

    /// `GET /api/discounts` (active discounts, any role)
    pub async fn discounts(&self) -> Result<Vec<Discount>> {
        let payload: DiscountsPayload = self.get("/api/discounts").await?;
        Ok(payload.discounts)
    }

    /// `GET /api/admin/discounts` (all discounts)
    pub async fn admin_discounts(&self) -> Result<Vec<Discount>> {
        let payload: DiscountsPayload = self.get("/api/admin/discounts").await?;
        Ok(payload.discounts)
    }

    /// `POST /api/admin/discounts`
    pub async fn create_discount(&self, body: &CreateDiscountRequest) -> Result<Ack> {
        self.post("/api/admin/discounts", body).await
    }

    /// `DELETE /api/admin/discounts/:id`
    pub async fn delete_discount(&self, discount_id: i64) -> Result<Ack> {
        self.delete(&format!("/api/admin/discounts/{}", discount_id)).await
    }

    // ===== Admin: attendance =====

    /// `GET /api/admin/attendance/groups`
    pub async fn attendance_groups(&self) -> Result<Vec<AttendanceGroup>> {
        let payload: AttendanceGroupsPayload = self.get("/api/admin/attendance/groups").await?;
        Ok(payload.groups)
    }

    /// `GET /api/admin/attendance/schedule/:groupId`
    pub async fn attendance_schedule(&self, group_id: i64) -> Result<Vec<ScheduledDate>> {
        let payload: DatesPayload =
            self.get(&format!("/api/admin/attendance/schedule/{}", group_id)).await?;
        Ok(payload.dates)
    }

    /// `GET /api/admin/attendance/participants/:groupId/:date`
    pub async fn attendance_roster(&self, group_id: i64, date: &str) -> Result<AttendanceRoster> {
        self.get(&format!(
            "/api/admin/attendance/participants/{}/{}",
            group_id,
            urlencoding::encode(date)
        ))
        .await
    }

    /// `POST /api/admin/attendance/save`
    pub async fn save_attendance(&self, body: &SaveAttendanceRequest) -> Result<Ack> {
        self.post("/api/admin/attendance/save", body).await
    }

    /// `GET /api/admin/attendance/stats/:groupId`
    pub async fn attendance_stats(&self, group_id: i64) -> Result<Vec<AttendanceStat>> {
        let payload: StatsPayload<AttendanceStat> =
            self.get(&format!("/api/admin/attendance/stats/{}", group_id)).await?;
        Ok(payload.stats)
    }

    // ===== Parent =====

    /// `GET /api/auth/participants`
    pub async fn authorized_participants(&self) -> Result<Vec<AuthorizedParticipant>> {
        let payload: ParticipantsPayload<AuthorizedParticipant> =
            self.get("/api/auth/participants").await?;
        Ok(payload.participants)
    }

    /// `POST /api/auth/verify`
    pub async fn verify_code(&self, code: &str) -> Result<Ack> {
        self.post("/api/auth/verify", &VerifyCodeRequest { code: code.to_string() }).await
    }

    /// `GET /api/participants`
    pub async fn my_participants(&self) -> Result<Vec<AuthorizedParticipant>> {
        let payload: ParticipantsPayload<AuthorizedParticipant> = self.get("/api/participants").await?;
        Ok(payload.participants)
    }

    /// `GET /api/parent/attendance/:id`
    pub async fn participant_attendance(&self, participant_id: i64) -> Result<Vec<ParticipantAttendance>> {
        let payload: StatsPayload<ParticipantAttendance> =
            self.get(&format!("/api/parent/attendance/{}", participant_id)).await?;
        Ok(payload.stats)
    }

    /// `POST /api/parent/payment`
    pub async fn create_payment(&self, body: &CreatePaymentRequest) -> Result<Ack> {
        self.post("/api/parent/payment", body).await
    }

    /// `GET /api/parent/contact`
    pub async fn contact(&self) -> Result<ContactInfo> {
        let payload: ContactPayload = self.get("/api/parent/contact").await?;
        Ok(payload.contact_info)
    }
}
