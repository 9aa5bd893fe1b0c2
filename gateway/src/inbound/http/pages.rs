//! Gated page endpoints.
//!
//! These stand in for the application's pages: the route gate has already
//! verified the session by the time they run, so they only assemble the
//! view data a page needs. Event detail fetches the event and its attendee
//! list concurrently — both reads are independent and order-free.

use actix_web::{get, web};
use futures_util::future::try_join;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ApiResult, EventAttendeeDto, EventDto, UserDto};
use crate::inbound::http::credentials::Credentials;
use crate::inbound::http::state::HttpState;

/// Service banner returned at the site root.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// Dashboard view data: the events a user can browse and join.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Upcoming events.
    pub events: Vec<EventDto>,
}

/// Event detail view data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailView {
    /// The event itself.
    pub event: EventDto,
    /// Everyone attending it.
    pub attendees: Vec<EventAttendeeDto>,
}

/// Public site root.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = ServiceInfo)),
    tags = ["pages"],
    security([])
)]
#[get("/")]
pub async fn index() -> web::Json<ServiceInfo> {
    web::Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME").to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// Dashboard: upcoming events for the verified caller.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard data", body = DashboardView),
        (status = 307, description = "Not authenticated; redirected to login")
    ),
    tags = ["pages"]
)]
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<DashboardView>> {
    let events = state.events.upcoming(&credentials).await?;
    Ok(web::Json(DashboardView { events }))
}

/// Event detail: the event plus its attendee list.
#[utoipa::path(
    get,
    path = "/event/{id}",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event detail data", body = EventDetailView),
        (status = 307, description = "Not authenticated; redirected to login"),
        (status = 404, description = "Unknown event", body = crate::domain::ApiError)
    ),
    tags = ["pages"]
)]
#[get("/event/{id}")]
pub async fn event_detail(
    state: web::Data<HttpState>,
    credentials: Credentials,
    id: web::Path<i64>,
) -> ApiResult<web::Json<EventDetailView>> {
    let id = id.into_inner();
    let (event, attendees) = try_join(
        state.events.get_by_id(&credentials, id),
        state.attendees.for_event(&credentials, id),
    )
    .await?;
    Ok(web::Json(EventDetailView { event, attendees }))
}

/// Profile page data for the verified caller.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Profile data", body = UserDto),
        (status = 307, description = "Not authenticated; redirected to login")
    ),
    tags = ["pages"]
)]
#[get("/profile")]
pub async fn profile(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<UserDto>> {
    Ok(web::Json(state.auth.profile(&credentials).await?))
}
