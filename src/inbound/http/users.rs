//! Staff administration endpoints.
//!
//! ```text
//! GET    /api/v1/users
//! DELETE /api/v1/users/{id}
//! ```

use actix_web::{delete, get, web, HttpResponse};
use uuid::Uuid;

use super::guard;
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;
use crate::domain::rbac::ResourceAction;
use crate::domain::{Error, User, UserId};

/// List every user record.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<User>>> {
    let actor = guard::require(&session, ResourceAction::UsersList)?;
    Ok(web::Json(state.users.list(&actor).await?))
}

/// Delete a user record.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error),
        (status = 404, description = "No such user", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let actor = guard::require(&session, ResourceAction::UsersDelete)?;
    state
        .users
        .delete(&actor, UserId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::inbound::http::auth::login;
    use crate::inbound::http::test_utils::{login_cookie, test_session_middleware};
    use crate::outbound::persistence::MemoryStore;
    use crate::server::build_state;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = build_state(Arc::new(MemoryStore::with_demo_data()));
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(login)
                    .service(list_users)
                    .service(delete_user),
            )
    }

    #[actix_web::test]
    async fn director_lists_and_deletes_users() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "director").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("users payload");
        let rows = value.as_array().expect("array");
        let bob = rows
            .iter()
            .find(|row| row["username"] == "Bob")
            .expect("Bob is seeded");
        let bob_id = bob["id"].as_str().expect("uuid string").to_owned();

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/users/{bob_id}"))
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Deleting again is a NotFound, not a silent success.
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/users/{bob_id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn doctor_may_not_manage_users() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "dr_wang").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
