//! Institution payloads mirroring backend JSON.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Institution category labels as the backend spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstitutionCategory {
    /// Primary or secondary school.
    School,
    /// University or college.
    University,
    /// Non-governmental organization.
    Ngo,
    /// Sports club.
    SportsClub,
    /// Cultural centre.
    CulturalCenter,
    /// Public library.
    Library,
    /// Anything else.
    Other,
}

impl InstitutionCategory {
    /// Wire spelling of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::School => "SCHOOL",
            Self::University => "UNIVERSITY",
            Self::Ngo => "NGO",
            Self::SportsClub => "SPORTS_CLUB",
            Self::CulturalCenter => "CULTURAL_CENTER",
            Self::Library => "LIBRARY",
            Self::Other => "OTHER",
        }
    }
}

/// Error for category labels the backend does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown institution category: {0}")]
pub struct UnknownInstitutionCategory(pub String);

impl FromStr for InstitutionCategory {
    type Err = UnknownInstitutionCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SCHOOL" => Ok(Self::School),
            "UNIVERSITY" => Ok(Self::University),
            "NGO" => Ok(Self::Ngo),
            "SPORTS_CLUB" => Ok(Self::SportsClub),
            "CULTURAL_CENTER" => Ok(Self::CulturalCenter),
            "LIBRARY" => Ok(Self::Library),
            "OTHER" => Ok(Self::Other),
            other => Err(UnknownInstitutionCategory(other.to_owned())),
        }
    }
}

impl std::fmt::Display for InstitutionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of an institution registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Awaiting review.
    Pending,
    /// Approved and allowed to back events.
    Approved,
    /// Rejected by review.
    Rejected,
}

/// Institution record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionDto {
    /// Backend institution id.
    pub id: i64,
    /// Institution name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Category label.
    pub category: InstitutionCategory,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Logo image URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website_url: Option<String>,
    /// Review state.
    pub verification_status: VerificationStatus,
    /// Record creation instant.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update instant.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for registering or updating an institution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstitutionRequest {
    /// Institution name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Category label.
    pub category: InstitutionCategory,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}
