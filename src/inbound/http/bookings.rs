//! Booking endpoints.
//!
//! ```text
//! GET  /api/v1/bookings
//! POST /api/v1/bookings
//! POST /api/v1/bookings/{id}/complete
//! ```

use actix_web::{get, post, web, HttpResponse};

use super::guard;
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;
use crate::domain::ports::{AdvanceOutcome, CreateBookingRequest};
use crate::domain::rbac::ResourceAction;
use crate::domain::{Booking, BookingId, Error};

/// List bookings visible to the session actor.
///
/// Staff roles receive every booking; a general user only ever receives
/// rows filed under their own name.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    responses(
        (status = 200, description = "Bookings visible to the actor", body = [Booking]),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Booking>>> {
    let actor = guard::require(&session, ResourceAction::BookingsList)?;
    Ok(web::Json(state.bookings.list(&actor).await?))
}

/// Create a booking (self-service or front-desk registration).
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Validation failed", body = Error),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingRequest>,
) -> ApiResult<HttpResponse> {
    let actor = guard::require(&session, ResourceAction::BookingsCreate)?;
    let booking = state.bookings.create(&actor, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(booking))
}

/// Mark a booking as seen (Pending → Completed).
///
/// Idempotent: completing an already-Completed booking succeeds with
/// `changed: false`.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/complete",
    params(("id" = u64, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking is Completed", body = AdvanceOutcome),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error),
        (status = 404, description = "No such booking", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "completeBooking"
)]
#[post("/bookings/{id}/complete")]
pub async fn complete_booking(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<AdvanceOutcome>> {
    let actor = guard::require(&session, ResourceAction::BookingsAdvance)?;
    let outcome = state
        .bookings
        .advance(&actor, BookingId::new(path.into_inner()))
        .await?;
    Ok(web::Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};
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
                    .service(list_bookings)
                    .service(create_booking)
                    .service(complete_booking),
            )
    }

    #[actix_web::test]
    async fn anonymous_listing_redirects_to_login() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/bookings")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(value["details"]["redirect"], "/login");
    }

    #[actix_web::test]
    async fn general_user_sees_only_their_own_bookings() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "Alice").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/bookings")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("bookings payload");
        let rows = value.as_array().expect("array");
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row["patientName"] == "Alice"));
    }

    #[actix_web::test]
    async fn mismatched_pairing_is_rejected_with_the_offending_field() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "Alice").await;

        // Doctor 2 is a surgeon; the request names internal medicine.
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/bookings")
                .cookie(cookie)
                .set_json(json!({
                    "patientName": "Alice",
                    "age": 34,
                    "gender": "female",
                    "department": "internal_medicine",
                    "doctorId": 2
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(value["details"]["field"], "doctorId");
    }

    #[actix_web::test]
    async fn doctor_completes_a_pending_booking() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "dr_wang").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/bookings/1/complete")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("outcome payload");
        assert_eq!(value["status"], "Completed");
        assert_eq!(value["changed"], true);

        // Second completion is a no-op success.
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/bookings/1/complete")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("outcome payload");
        assert_eq!(value["changed"], false);
    }

    #[actix_web::test]
    async fn reception_may_not_complete_bookings() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "reception").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/bookings/1/complete")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(value["details"]["redirect"], "/dashboard");
    }
}
