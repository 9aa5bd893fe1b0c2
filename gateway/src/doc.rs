//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer along
//! with the schemas they exchange, plus the `authToken` cookie security
//! scheme. Export the document with `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    ApiError, ApiErrorDetails, AuthResponse, CreateEventRequest, CreateInstitutionRequest,
    EventAttendeeDto, EventCategory, EventDto, InstitutionCategory, InstitutionDto, LoginRequest,
    RegisterRequest, SessionIdentity, UpdateProfileRequest, UserDto, VerificationStatus,
};
use crate::inbound::http::pages::{DashboardView, EventDetailView, ServiceInfo};

/// Enrich the generated document with the credential cookie scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AuthTokenCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "authToken",
                "Bearer credential issued by POST /api/auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the gateway's HTTP surface.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Community-events gateway API",
        description = "Session-gated page endpoints and credential-forwarding proxies for the community-events backend."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("AuthTokenCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::profile,
        crate::inbound::http::auth::update_profile,
        crate::inbound::http::events::list,
        crate::inbound::http::events::upcoming,
        crate::inbound::http::events::available,
        crate::inbound::http::events::search,
        crate::inbound::http::events::my_events,
        crate::inbound::http::events::by_category,
        crate::inbound::http::events::get,
        crate::inbound::http::events::create,
        crate::inbound::http::events::update,
        crate::inbound::http::events::delete,
        crate::inbound::http::institutions::list,
        crate::inbound::http::institutions::verified,
        crate::inbound::http::institutions::by_category,
        crate::inbound::http::institutions::get,
        crate::inbound::http::institutions::create,
        crate::inbound::http::institutions::update,
        crate::inbound::http::institutions::delete,
        crate::inbound::http::attendees::join,
        crate::inbound::http::attendees::leave,
        crate::inbound::http::attendees::for_event,
        crate::inbound::http::attendees::my_events,
        crate::inbound::http::pages::index,
        crate::inbound::http::pages::dashboard,
        crate::inbound::http::pages::event_detail,
        crate::inbound::http::pages::profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApiError,
        ApiErrorDetails,
        AuthResponse,
        LoginRequest,
        RegisterRequest,
        UpdateProfileRequest,
        UserDto,
        SessionIdentity,
        EventDto,
        CreateEventRequest,
        EventCategory,
        EventAttendeeDto,
        InstitutionDto,
        CreateInstitutionRequest,
        InstitutionCategory,
        VerificationStatus,
        ServiceInfo,
        DashboardView,
        EventDetailView,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_includes_gateway_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/auth/login"));
        assert!(doc.paths.paths.contains_key("/api/events/{id}"));
        assert!(doc.paths.paths.contains_key("/dashboard"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
    }
}
