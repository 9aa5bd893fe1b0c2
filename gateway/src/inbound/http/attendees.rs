//! Attendance proxy handlers under `/api/event-attendees`.

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{ApiResult, EventAttendeeDto};
use crate::inbound::http::credentials::Credentials;
use crate::inbound::http::state::HttpState;

/// Join an event as the calling user.
#[utoipa::path(
    post,
    path = "/api/event-attendees/join/{event_id}",
    params(("event_id" = i64, Path, description = "Event id")),
    responses(
        (status = 204, description = "Joined"),
        (status = 409, description = "Event is full", body = crate::domain::ApiError)
    ),
    tags = ["attendees"]
)]
#[post("/event-attendees/join/{event_id}")]
pub async fn join(
    state: web::Data<HttpState>,
    credentials: Credentials,
    event_id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .attendees
        .join(&credentials, event_id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Leave an event as the calling user.
#[utoipa::path(
    delete,
    path = "/api/event-attendees/leave/{event_id}",
    params(("event_id" = i64, Path, description = "Event id")),
    responses((status = 204, description = "Left")),
    tags = ["attendees"]
)]
#[delete("/event-attendees/leave/{event_id}")]
pub async fn leave(
    state: web::Data<HttpState>,
    credentials: Credentials,
    event_id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .attendees
        .leave(&credentials, event_id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Attendees of one event.
#[utoipa::path(
    get,
    path = "/api/event-attendees/event/{event_id}",
    params(("event_id" = i64, Path, description = "Event id")),
    responses((status = 200, description = "Attendees", body = [EventAttendeeDto])),
    tags = ["attendees"]
)]
#[get("/event-attendees/event/{event_id}")]
pub async fn for_event(
    state: web::Data<HttpState>,
    credentials: Credentials,
    event_id: web::Path<i64>,
) -> ApiResult<web::Json<Vec<EventAttendeeDto>>> {
    Ok(web::Json(
        state
            .attendees
            .for_event(&credentials, event_id.into_inner())
            .await?,
    ))
}

/// The caller's own attendance records.
#[utoipa::path(
    get,
    path = "/api/event-attendees/my-events",
    responses((status = 200, description = "Caller's attendance", body = [EventAttendeeDto])),
    tags = ["attendees"]
)]
#[get("/event-attendees/my-events")]
pub async fn my_events(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<Vec<EventAttendeeDto>>> {
    Ok(web::Json(state.attendees.my_events(&credentials).await?))
}
