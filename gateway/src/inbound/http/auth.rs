//! Authentication handlers.
//!
//! ```text
//! POST /api/auth/login    {"username":"kasia","password":"secret"}
//! POST /api/auth/register {"username":"kasia","email":"k@example.com", ...}
//! GET  /api/logout
//! ```
//!
//! Login and registration exchange credentials for a token without assuming
//! a prior session, then persist the token in the `authToken` cookie.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, put, web};
use tracing::{info, warn};

use crate::domain::{
    ApiError, ApiResult, LoginCredentials, LoginRequest, LoginValidationError, RegisterRequest,
    UpdateProfileRequest, UserDto,
};
use crate::inbound::http::credentials::Credentials;
use crate::inbound::http::state::HttpState;

/// Authenticate against the backend and persist the issued token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success; token cookie set", body = crate::domain::AuthResponse),
        (status = 400, description = "Blank username or password", body = ApiError),
        (status = 401, description = "Invalid credentials", body = ApiError)
    ),
    tags = ["auth"],
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&request.username, &request.password)
        .map_err(|error| map_login_validation_error(&error))?;
    let auth = state.auth.login(&credentials).await?;
    info!(user_id = auth.user_id, username = %auth.username, "login succeeded");
    Ok(HttpResponse::Ok()
        .cookie(Credentials::issue(&auth.token))
        .json(auth))
}

/// Create an account and persist the issued token.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created; token cookie set", body = crate::domain::AuthResponse),
        (status = 400, description = "Validation failure with per-field messages", body = ApiError)
    ),
    tags = ["auth"],
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let auth = state.auth.register(&payload.into_inner()).await?;
    info!(user_id = auth.user_id, username = %auth.username, "registration succeeded");
    Ok(HttpResponse::Ok()
        .cookie(Credentials::issue(&auth.token))
        .json(auth))
}

/// End the session: best-effort backend invalidation, then clear the cookie
/// and send the caller back to the site root.
#[utoipa::path(
    get,
    path = "/api/logout",
    responses(
        (status = 307, description = "Cookie cleared; redirect to the site root")
    ),
    tags = ["auth"]
)]
#[get("/logout")]
pub async fn logout(state: web::Data<HttpState>, credentials: Credentials) -> HttpResponse {
    if credentials.token().is_some() {
        if let Err(error) = state.auth.logout(&credentials).await {
            warn!(
                error = %error,
                credential = ?credentials.fingerprint(),
                "backend session invalidation failed; clearing the cookie anyway"
            );
        }
    }
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, "/"))
        .cookie(Credentials::removal())
        .finish()
}

/// Fetch the caller's profile.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Current profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ApiError)
    ),
    tags = ["auth"]
)]
#[get("/auth/profile")]
pub async fn profile(
    state: web::Data<HttpState>,
    credentials: Credentials,
) -> ApiResult<web::Json<UserDto>> {
    Ok(web::Json(state.auth.profile(&credentials).await?))
}

/// Update the caller's profile.
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Validation failure", body = ApiError)
    ),
    tags = ["auth"]
)]
#[put("/auth/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    credentials: Credentials,
    payload: web::Json<UpdateProfileRequest>,
) -> ApiResult<web::Json<UserDto>> {
    Ok(web::Json(
        state
            .auth
            .update_profile(&credentials, &payload.into_inner())
            .await?,
    ))
}

fn map_login_validation_error(error: &LoginValidationError) -> ApiError {
    let field = match error {
        LoginValidationError::EmptyUsername => "username",
        LoginValidationError::EmptyPassword => "password",
    };
    ApiError::field_errors(
        "/api/auth/login",
        [(field.to_owned(), error.to_string())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LoginValidationError::EmptyUsername, "username")]
    #[case(LoginValidationError::EmptyPassword, "password")]
    fn login_validation_maps_to_field_errors(
        #[case] error: LoginValidationError,
        #[case] field: &str,
    ) {
        let mapped = map_login_validation_error(&error);
        assert_eq!(mapped.status, 400);
        let fields = mapped.details.fields().expect("field errors expected");
        assert!(fields.contains_key(field), "missing field {field}: {fields:?}");
    }
}
