//! End-to-end dashboard flows over the production routing: session login,
//! the route gate, and role-scoped endpoint outcomes.

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use hospital_core::outbound::persistence::MemoryStore;
use hospital_core::server::{api_services, build_state};

fn dashboard_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = build_state(Arc::new(MemoryStore::with_demo_data()));
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").configure(api_services).wrap(session))
}

async fn login_cookie<S, B>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": "password" }))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success(), "login for {username} failed");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

#[actix_web::test]
async fn anonymous_requests_are_directed_to_the_login_surface() {
    let app = actix_test::init_service(dashboard_app()).await;

    for uri in [
        "/api/v1/bookings",
        "/api/v1/payments/unpaid",
        "/api/v1/stats",
        "/api/v1/users",
    ] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(value["details"]["redirect"], "/login", "{uri}");
    }
}

#[actix_web::test]
async fn global_admin_reaches_every_protected_surface() {
    let app = actix_test::init_service(dashboard_app()).await;
    let cookie = login_cookie(&app, "admin").await;

    for uri in [
        "/api/v1/bookings",
        "/api/v1/doctors",
        "/api/v1/payments/unpaid",
        "/api/v1/payments/history",
        "/api/v1/stats",
        "/api/v1/medicines",
        "/api/v1/users",
    ] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(uri)
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert!(response.status().is_success(), "{uri}");
    }

    // The admin snapshot carries all four figures.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/stats")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("stats payload");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 4);
}

#[actix_web::test]
async fn menu_surfaces_match_the_rule_table_per_role() {
    let app = actix_test::init_service(dashboard_app()).await;

    // (username, endpoint, expected) spot checks mirroring the rule table.
    let cases = [
        ("reception", "/api/v1/bookings", StatusCode::OK),
        ("reception", "/api/v1/payments/unpaid", StatusCode::OK),
        ("reception", "/api/v1/medicines", StatusCode::FORBIDDEN),
        ("dr_wang", "/api/v1/doctors", StatusCode::OK),
        ("dr_wang", "/api/v1/payments/unpaid", StatusCode::FORBIDDEN),
        ("cashier", "/api/v1/payments/history", StatusCode::OK),
        ("cashier", "/api/v1/bookings", StatusCode::FORBIDDEN),
        ("keeper", "/api/v1/medicines", StatusCode::OK),
        ("keeper", "/api/v1/users", StatusCode::FORBIDDEN),
        ("Alice", "/api/v1/bookings", StatusCode::OK),
        ("Alice", "/api/v1/users", StatusCode::FORBIDDEN),
        ("director", "/api/v1/users", StatusCode::OK),
    ];

    for (username, uri, expected) in cases {
        let cookie = login_cookie(&app, username).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(uri)
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), expected, "{username} on {uri}");
    }
}

#[actix_web::test]
async fn patient_books_and_pays_through_the_full_flow() {
    let app = actix_test::init_service(dashboard_app()).await;
    let alice = login_cookie(&app, "Alice").await;

    // The roster cascade: pick an internist.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/doctors?department=internal_medicine")
            .cookie(alice.clone())
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());
    let body = actix_test::read_body(response).await;
    let roster: Value = serde_json::from_slice(&body).expect("roster payload");
    let doctor_id = roster[0]["id"].as_u64().expect("doctor id");

    // Booking under a forged name still lands on Alice's own identity.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/bookings")
            .cookie(alice.clone())
            .set_json(json!({
                "patientName": "Somebody Else",
                "age": 34,
                "gender": "female",
                "department": "internal_medicine",
                "doctorId": doctor_id
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = actix_test::read_body(response).await;
    let booking: Value = serde_json::from_slice(&body).expect("booking payload");
    assert_eq!(booking["patientName"], "Alice");
    assert_eq!(booking["status"], "Pending");

    // Alice settles her seeded unpaid order (#1), then sees it in history.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/payments/1/settle")
            .cookie(alice.clone())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/payments/history")
            .cookie(alice)
            .to_request(),
    )
    .await;
    let body = actix_test::read_body(response).await;
    let history: Value = serde_json::from_slice(&body).expect("history payload");
    let rows = history.as_array().expect("array");
    assert!(rows.iter().all(|row| row["patientName"] == "Alice"));
    assert!(rows.iter().any(|row| row["id"] == 1));
}

#[actix_web::test]
async fn logout_clears_the_session() {
    let app = actix_test::init_service(dashboard_app()).await;
    let cookie = login_cookie(&app, "reception").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cleared = response
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .map(|c| c.value().is_empty());
    assert_eq!(cleared, Some(true), "session cookie must be emptied");
}
