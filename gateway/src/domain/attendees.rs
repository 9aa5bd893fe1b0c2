//! Attendance payloads mirroring backend JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One user's attendance of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendeeDto {
    /// Backend attendance record id.
    pub id: i64,
    /// Attended event id.
    pub event_id: i64,
    /// Attending user id.
    pub user_id: i64,
    /// Attending user's username.
    pub username: String,
    /// Attended event title, when the backend includes it.
    #[serde(default)]
    pub event_title: Option<String>,
    /// Attending user's email.
    #[serde(default)]
    pub user_email: Option<String>,
    /// Attending user's avatar URL.
    #[serde(default)]
    pub user_avatar_url: Option<String>,
    /// Join instant.
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    /// Attendance status label.
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn attendee_decodes_from_backend_payload() {
        let payload = r#"{
            "id": 11,
            "eventId": 42,
            "userId": 7,
            "username": "kasia",
            "joinedAt": "2026-08-01T12:00:00Z"
        }"#;

        let attendee: EventAttendeeDto = serde_json::from_str(payload).expect("attendee decodes");
        assert_eq!(attendee.event_id, 42);
        assert_eq!(attendee.username, "kasia");
        assert!(attendee.status.is_none());
    }
}
