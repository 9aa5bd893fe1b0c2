//! Event proxy handlers under `/api/events`.
//!
//! Thin forwards to the typed events client with the caller's credential
//! attached; the backend stays the source of truth for authorization and
//! validation.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{ApiError, ApiResult, CreateEventRequest, EventCategory, EventDto};
use crate::inbound::http::credentials::Credentials;
use crate::inbound::http::state::HttpState;

/// Search parameters for [`search`].
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Free-text query.
    pub query: String,
}

/// All events.
#[utoipa::path(
    get,
    path = "/api/events",
    responses((status = 200, description = "All events", body = [EventDto])),
    tags = ["events"]
)]
#[get("/events")]
pub async fn list(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<Vec<EventDto>>> {
    Ok(web::Json(state.events.get_all(&credentials).await?))
}

/// Events that have not started yet.
#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    responses((status = 200, description = "Upcoming events", body = [EventDto])),
    tags = ["events"]
)]
#[get("/events/upcoming")]
pub async fn upcoming(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<Vec<EventDto>>> {
    Ok(web::Json(state.events.upcoming(&credentials).await?))
}

/// Events with free capacity.
#[utoipa::path(
    get,
    path = "/api/events/available",
    responses((status = 200, description = "Events with free capacity", body = [EventDto])),
    tags = ["events"]
)]
#[get("/events/available")]
pub async fn available(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<Vec<EventDto>>> {
    Ok(web::Json(state.events.available(&credentials).await?))
}

/// Full-text search over events.
#[utoipa::path(
    get,
    path = "/api/events/search",
    params(SearchParams),
    responses((status = 200, description = "Matching events", body = [EventDto])),
    tags = ["events"]
)]
#[get("/events/search")]
pub async fn search(
    state: web::Data<HttpState>,
    credentials: Credentials,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<EventDto>>> {
    Ok(web::Json(
        state.events.search(&credentials, &params.query).await?,
    ))
}

/// Events created by the caller.
#[utoipa::path(
    get,
    path = "/api/events/my-events",
    responses((status = 200, description = "Caller's events", body = [EventDto])),
    tags = ["events"]
)]
#[get("/events/my-events")]
pub async fn my_events(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<Vec<EventDto>>> {
    Ok(web::Json(state.events.my_events(&credentials).await?))
}

/// Events in one category.
#[utoipa::path(
    get,
    path = "/api/events/category/{category}",
    params(("category" = String, Path, description = "Category label, e.g. FILM_CLUB")),
    responses(
        (status = 200, description = "Events in the category", body = [EventDto]),
        (status = 400, description = "Unknown category label", body = ApiError)
    ),
    tags = ["events"]
)]
#[get("/events/category/{category}")]
pub async fn by_category(
    state: web::Data<HttpState>,
    credentials: Credentials,
    category: web::Path<String>,
) -> ApiResult<web::Json<Vec<EventDto>>> {
    let category: EventCategory = category
        .parse()
        .map_err(|error: crate::domain::events::UnknownEventCategory| {
            ApiError::invalid_request("/api/events", error.to_string())
        })?;
    Ok(web::Json(
        state.events.by_category(&credentials, category).await?,
    ))
}

/// One event by id.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Unknown event", body = ApiError)
    ),
    tags = ["events"]
)]
#[get("/events/{id}")]
pub async fn get(
    state: web::Data<HttpState>,
    credentials: Credentials,
    id: web::Path<i64>,
) -> ApiResult<web::Json<EventDto>> {
    Ok(web::Json(
        state.events.get_by_id(&credentials, id.into_inner()).await?,
    ))
}

/// Create an event.
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Created event", body = EventDto),
        (status = 400, description = "Validation failure with per-field messages", body = ApiError)
    ),
    tags = ["events"]
)]
#[post("/events")]
pub async fn create(
    state: web::Data<HttpState>,
    credentials: Credentials,
    payload: web::Json<CreateEventRequest>,
) -> ApiResult<web::Json<EventDto>> {
    Ok(web::Json(
        state
            .events
            .create(&credentials, &payload.into_inner())
            .await?,
    ))
}

/// Replace an event.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = i64, Path, description = "Event id")),
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Validation failure", body = ApiError)
    ),
    tags = ["events"]
)]
#[put("/events/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    credentials: Credentials,
    id: web::Path<i64>,
    payload: web::Json<CreateEventRequest>,
) -> ApiResult<web::Json<EventDto>> {
    Ok(web::Json(
        state
            .events
            .update(&credentials, id.into_inner(), &payload.into_inner())
            .await?,
    ))
}

/// Delete an event.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = i64, Path, description = "Event id")),
    responses((status = 204, description = "Event deleted")),
    tags = ["events"]
)]
#[delete("/events/{id}")]
pub async fn delete(
    state: web::Data<HttpState>,
    credentials: Credentials,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.events.delete(&credentials, id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
