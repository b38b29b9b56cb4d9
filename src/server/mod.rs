//! Server construction and wiring.
//!
//! `build_state` and `api_services` are public so integration tests drive
//! the exact routing and service graph that production uses.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::SameSite;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

use crate::domain::admin_service::AdminService;
use crate::domain::booking_service::BookingService;
use crate::domain::directory_service::DirectoryService;
use crate::domain::inventory_service::InventoryService;
use crate::domain::payment_service::PaymentService;
use crate::domain::ports::SeededLoginService;
use crate::domain::stats_service::StatsService;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{auth, bookings, doctors, medicines, payments, stats, users};
use crate::outbound::persistence::MemoryStore;

/// Wire the workflow services over a shared store into the handler state.
pub fn build_state(store: Arc<MemoryStore>) -> HttpState {
    HttpState {
        login: Arc::new(SeededLoginService::new(store.clone())),
        bookings: Arc::new(BookingService::new(store.clone(), store.clone())),
        payments: Arc::new(PaymentService::new(store.clone())),
        doctors: Arc::new(DirectoryService::new(store.clone())),
        stats: Arc::new(StatsService::new(store.clone())),
        medicines: Arc::new(InventoryService::new(store.clone())),
        users: Arc::new(AdminService::new(store)),
    }
}

/// Register every `/api/v1` handler on a service config.
pub fn api_services(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::logout)
        .service(bookings::list_bookings)
        .service(bookings::create_booking)
        .service(bookings::complete_booking)
        .service(doctors::list_doctors)
        .service(payments::list_unpaid)
        .service(payments::list_history)
        .service(payments::settle)
        .service(stats::get_stats)
        .service(medicines::list_medicines)
        .service(users::list_users)
        .service(users::delete_user);
}

/// Build and start the HTTP server.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let store = if config.demo_data {
        MemoryStore::with_demo_data()
    } else {
        MemoryStore::new()
    };
    let state = build_state(Arc::new(store));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let session_key = config.session_key.clone();
    let cookie_secure = config.cookie_secure;

    let server = HttpServer::new(move || {
        let session =
            SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                .cookie_name("session".to_owned())
                .cookie_path("/".to_owned())
                .cookie_secure(cookie_secure)
                .cookie_http_only(true)
                .cookie_same_site(SameSite::Lax)
                .build();

        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health_state.clone())
            .service(
                web::scope("/api/v1")
                    .configure(api_services)
                    .wrap(session),
            )
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = {
            use utoipa::OpenApi;
            app.route(
                "/api-docs/openapi.json",
                web::get().to(|| async { web::Json(crate::ApiDoc::openapi()) }),
            )
        };

        app
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    Ok(server.run())
}
