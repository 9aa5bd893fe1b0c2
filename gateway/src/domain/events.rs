//! Event payloads mirroring backend JSON.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Event category labels as the backend spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    /// Film screenings and discussion clubs.
    FilmClub,
    /// Hobby and interest groups.
    HobbyGroup,
    /// Sports meetups.
    Sports,
    /// Study circles.
    StudyCircle,
    /// General social gatherings.
    Social,
    /// Anything else.
    Other,
}

impl EventCategory {
    /// Wire spelling of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FilmClub => "FILM_CLUB",
            Self::HobbyGroup => "HOBBY_GROUP",
            Self::Sports => "SPORTS",
            Self::StudyCircle => "STUDY_CIRCLE",
            Self::Social => "SOCIAL",
            Self::Other => "OTHER",
        }
    }
}

/// Error for category labels the backend does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event category: {0}")]
pub struct UnknownEventCategory(pub String);

impl FromStr for EventCategory {
    type Err = UnknownEventCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "FILM_CLUB" => Ok(Self::FilmClub),
            "HOBBY_GROUP" => Ok(Self::HobbyGroup),
            "SPORTS" => Ok(Self::Sports),
            "STUDY_CIRCLE" => Ok(Self::StudyCircle),
            "SOCIAL" => Ok(Self::Social),
            "OTHER" => Ok(Self::Other),
            other => Err(UnknownEventCategory(other.to_owned())),
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    /// Backend event id.
    pub id: i64,
    /// Event title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Venue or address.
    pub location: String,
    /// Start of the event.
    pub start_time: NaiveDateTime,
    /// End of the event.
    pub end_time: NaiveDateTime,
    /// Calendar date of the event.
    pub date_event: NaiveDate,
    /// Maximum number of attendees.
    pub max_capacity: i32,
    /// Current number of attendees.
    #[serde(default)]
    pub current_capacity: i32,
    /// Category label.
    pub category: EventCategory,
    /// Header image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creator's user id.
    #[serde(default)]
    pub created_by_id: i64,
    /// Creator's username.
    #[serde(default)]
    pub created_by_username: String,
    /// Approving institution id, when the event is institution-backed.
    #[serde(default)]
    pub approved_institution_id: Option<i64>,
    /// Approving institution name.
    #[serde(default)]
    pub approved_institution_name: Option<String>,
    /// Minimum attendee age.
    #[serde(default)]
    pub min_age: i32,
    /// Maximum attendee age.
    #[serde(default)]
    pub max_age: i32,
    /// Record creation instant.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update instant.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventDto {
    /// Whether no more attendees can join.
    pub fn is_full(&self) -> bool {
        self.current_capacity >= self.max_capacity
    }
}

/// Payload for creating or replacing an event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Venue or address.
    pub location: String,
    /// Start of the event.
    pub start_time: NaiveDateTime,
    /// End of the event.
    pub end_time: NaiveDateTime,
    /// Calendar date of the event.
    pub date_event: NaiveDate,
    /// Maximum number of attendees.
    pub max_capacity: i32,
    /// Category label.
    pub category: EventCategory,
    /// Header image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Approving institution id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_institution_id: Option<i64>,
    /// Minimum attendee age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i32>,
    /// Maximum attendee age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn event_decodes_from_backend_payload() {
        let payload = r#"{
            "id": 42,
            "title": "Wieczór filmowy",
            "description": "Klasyka polskiego kina",
            "location": "Kino Muranów",
            "startTime": "2026-09-01T18:00:00",
            "endTime": "2026-09-01T21:00:00",
            "dateEvent": "2026-09-01",
            "maxCapacity": 30,
            "currentCapacity": 12,
            "category": "FILM_CLUB",
            "createdById": 7,
            "createdByUsername": "kasia",
            "minAge": 16,
            "maxAge": 99
        }"#;

        let event: EventDto = serde_json::from_str(payload).expect("event decodes");
        assert_eq!(event.id, 42);
        assert_eq!(event.category, EventCategory::FilmClub);
        assert!(!event.is_full());
        assert!(event.created_at.is_none());
    }

    #[rstest]
    fn full_event_reports_as_full() {
        let payload = r#"{
            "id": 1, "title": "t", "description": "d", "location": "l",
            "startTime": "2026-09-01T18:00:00", "endTime": "2026-09-01T19:00:00",
            "dateEvent": "2026-09-01", "maxCapacity": 5, "currentCapacity": 5,
            "category": "SOCIAL"
        }"#;
        let event: EventDto = serde_json::from_str(payload).expect("event decodes");
        assert!(event.is_full());
    }

    #[rstest]
    #[case("FILM_CLUB", EventCategory::FilmClub)]
    #[case("STUDY_CIRCLE", EventCategory::StudyCircle)]
    #[case("OTHER", EventCategory::Other)]
    fn category_parses_wire_spelling(#[case] label: &str, #[case] expected: EventCategory) {
        assert_eq!(label.parse::<EventCategory>().expect("known label"), expected);
        assert_eq!(expected.as_str(), label);
    }

    #[rstest]
    fn unknown_category_is_rejected() {
        let error = "KARAOKE".parse::<EventCategory>().expect_err("unknown label");
        assert_eq!(error, UnknownEventCategory("KARAOKE".to_owned()));
    }
}
