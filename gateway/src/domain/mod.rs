//! Transport-agnostic domain types and services.
//!
//! Inbound adapters map these into HTTP responses; outbound adapters
//! implement the ports defined in [`ports`].

pub mod attendees;
pub mod error;
pub mod events;
pub mod identity;
pub mod institutions;
pub mod ports;
pub mod session;
pub mod users;

pub use attendees::EventAttendeeDto;
pub use error::{ApiError, ApiErrorDetails, ApiResult};
pub use events::{CreateEventRequest, EventCategory, EventDto};
pub use identity::{LoginCredentials, LoginValidationError, SessionIdentity};
pub use institutions::{
    CreateInstitutionRequest, InstitutionCategory, InstitutionDto, VerificationStatus,
};
pub use session::{SessionVerifier, VerifySession};
pub use users::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, UserDto};
