//! Doctor roster endpoint feeding the booking form's cascade.
//!
//! ```text
//! GET /api/v1/doctors[?department=surgery]
//! ```
//!
//! The department filter is a convenience for the client; the pairing of a
//! submitted booking is still validated server-side.

use actix_web::{get, web};
use serde::Deserialize;

use super::guard;
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;
use crate::domain::rbac::ResourceAction;
use crate::domain::{Department, Doctor, Error};

/// Query parameters for the roster listing.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DoctorsQueryParams {
    /// Restrict the roster to one department.
    pub department: Option<Department>,
}

/// List the doctor roster in stable identifier order.
#[utoipa::path(
    get,
    path = "/api/v1/doctors",
    params(DoctorsQueryParams),
    responses(
        (status = 200, description = "Doctor roster", body = [Doctor]),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["doctors"],
    operation_id = "listDoctors"
)]
#[get("/doctors")]
pub async fn list_doctors(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<DoctorsQueryParams>,
) -> ApiResult<web::Json<Vec<Doctor>>> {
    let actor = guard::require(&session, ResourceAction::DoctorsList)?;
    let doctors = state
        .doctors
        .list_doctors(&actor, query.into_inner().department)
        .await?;
    Ok(web::Json(doctors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::inbound::http::auth::login;
    use crate::inbound::http::test_utils::{login_cookie, test_session_middleware};
    use crate::outbound::persistence::MemoryStore;
    use crate::server::build_state;

    #[actix_web::test]
    async fn roster_filters_by_department() {
        let state = build_state(Arc::new(MemoryStore::with_demo_data()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(login).service(list_doctors)),
        )
        .await;
        let cookie = login_cookie(&app, "Alice").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/doctors?department=surgery")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("roster payload");
        let rows = value.as_array().expect("array");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["department"], "surgery");
    }
}
