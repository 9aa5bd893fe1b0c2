//! Institution proxy handlers under `/api/institutions`.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{ApiError, ApiResult, CreateInstitutionRequest, InstitutionCategory, InstitutionDto};
use crate::inbound::http::credentials::Credentials;
use crate::inbound::http::state::HttpState;

/// All institutions.
#[utoipa::path(
    get,
    path = "/api/institutions",
    responses((status = 200, description = "All institutions", body = [InstitutionDto])),
    tags = ["institutions"]
)]
#[get("/institutions")]
pub async fn list(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<Vec<InstitutionDto>>> {
    Ok(web::Json(state.institutions.get_all(&credentials).await?))
}

/// Institutions whose registration was approved.
#[utoipa::path(
    get,
    path = "/api/institutions/verified",
    responses((status = 200, description = "Approved institutions", body = [InstitutionDto])),
    tags = ["institutions"]
)]
#[get("/institutions/verified")]
pub async fn verified(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<Vec<InstitutionDto>>> {
    Ok(web::Json(state.institutions.verified(&credentials).await?))
}

/// Institutions in one category.
#[utoipa::path(
    get,
    path = "/api/institutions/category/{category}",
    params(("category" = String, Path, description = "Category label, e.g. LIBRARY")),
    responses(
        (status = 200, description = "Institutions in the category", body = [InstitutionDto]),
        (status = 400, description = "Unknown category label", body = ApiError)
    ),
    tags = ["institutions"]
)]
#[get("/institutions/category/{category}")]
pub async fn by_category(
    state: web::Data<HttpState>,
    credentials: Credentials,
    category: web::Path<String>,
) -> ApiResult<web::Json<Vec<InstitutionDto>>> {
    let category: InstitutionCategory = category
        .parse()
        .map_err(|error: crate::domain::institutions::UnknownInstitutionCategory| {
            ApiError::invalid_request("/api/institutions", error.to_string())
        })?;
    Ok(web::Json(
        state.institutions.by_category(&credentials, category).await?,
    ))
}

/// One institution by id.
#[utoipa::path(
    get,
    path = "/api/institutions/{id}",
    params(("id" = i64, Path, description = "Institution id")),
    responses(
        (status = 200, description = "The institution", body = InstitutionDto),
        (status = 404, description = "Unknown institution", body = ApiError)
    ),
    tags = ["institutions"]
)]
#[get("/institutions/{id}")]
pub async fn get(
    state: web::Data<HttpState>,
    credentials: Credentials,
    id: web::Path<i64>,
) -> ApiResult<web::Json<InstitutionDto>> {
    Ok(web::Json(
        state
            .institutions
            .get_by_id(&credentials, id.into_inner())
            .await?,
    ))
}

/// Register an institution.
#[utoipa::path(
    post,
    path = "/api/institutions",
    request_body = CreateInstitutionRequest,
    responses(
        (status = 200, description = "Registered institution", body = InstitutionDto),
        (status = 400, description = "Validation failure with per-field messages", body = ApiError)
    ),
    tags = ["institutions"]
)]
#[post("/institutions")]
pub async fn create(
    state: web::Data<HttpState>,
    credentials: Credentials,
    payload: web::Json<CreateInstitutionRequest>,
) -> ApiResult<web::Json<InstitutionDto>> {
    Ok(web::Json(
        state
            .institutions
            .create(&credentials, &payload.into_inner())
            .await?,
    ))
}

/// Replace an institution.
#[utoipa::path(
    put,
    path = "/api/institutions/{id}",
    params(("id" = i64, Path, description = "Institution id")),
    request_body = CreateInstitutionRequest,
    responses(
        (status = 200, description = "Updated institution", body = InstitutionDto),
        (status = 400, description = "Validation failure", body = ApiError)
    ),
    tags = ["institutions"]
)]
#[put("/institutions/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    credentials: Credentials,
    id: web::Path<i64>,
    payload: web::Json<CreateInstitutionRequest>,
) -> ApiResult<web::Json<InstitutionDto>> {
    Ok(web::Json(
        state
            .institutions
            .update(&credentials, id.into_inner(), &payload.into_inner())
            .await?,
    ))
}

/// Delete an institution.
#[utoipa::path(
    delete,
    path = "/api/institutions/{id}",
    params(("id" = i64, Path, description = "Institution id")),
    responses((status = 204, description = "Institution deleted")),
    tags = ["institutions"]
)]
#[delete("/institutions/{id}")]
pub async fn delete(
    state: web::Data<HttpState>,
    credentials: Credentials,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .institutions
        .delete(&credentials, id.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
