//! Session endpoints.
//!
//! ```text
//! POST /api/v1/login  {"username":"cashier","password":"password"}
//! POST /api/v1/logout
//! ```

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;
use crate::domain::{Actor, Error, LoginCredentials, LoginValidationError};

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::validation("username", err.to_string()),
        LoginValidationError::EmptyPassword => Error::validation("password", err.to_string()),
    }
}

/// Authenticate against the identity collaborator and establish a session.
///
/// The response body is the actor (id, username, role) so a front-end can
/// shape its menu; the rule table stays the backend's single source of
/// truth for what those menu entries may actually do.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = Actor,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<Actor>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let actor = state.login.authenticate(&credentials).await?;
    session.persist_actor(&actor)?;
    Ok(web::Json(actor))
}

/// Drop the session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.clear();
    Ok(HttpResponse::NoContent().finish())
}
