//! OpenAPI document aggregate.

use utoipa::OpenApi;

use crate::domain::ports::{AdvanceOutcome, CreateBookingRequest};
use crate::domain::{
    Actor, Booking, BookingStatus, Department, Doctor, Error, ErrorCode, Gender, Medicine,
    PaymentOrder, PaymentStatus, Role, StatsSnapshot, User,
};
use crate::inbound::http::auth::LoginRequest;

/// Aggregated OpenAPI description of the dashboard API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hospital-core",
        description = "Role-gated authorization and clinical/billing workflow API"
    ),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::complete_booking,
        crate::inbound::http::doctors::list_doctors,
        crate::inbound::http::payments::list_unpaid,
        crate::inbound::http::payments::list_history,
        crate::inbound::http::payments::settle,
        crate::inbound::http::stats::get_stats,
        crate::inbound::http::medicines::list_medicines,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Actor,
        Role,
        User,
        LoginRequest,
        Booking,
        BookingStatus,
        Gender,
        Department,
        Doctor,
        CreateBookingRequest,
        AdvanceOutcome,
        PaymentOrder,
        PaymentStatus,
        Medicine,
        StatsSnapshot,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "auth", description = "Session management"),
        (name = "bookings", description = "Clinical booking workflow"),
        (name = "doctors", description = "Department-doctor directory"),
        (name = "payments", description = "Billing workflow"),
        (name = "stats", description = "Role-scoped statistics"),
        (name = "medicines", description = "Storehouse inventory"),
        (name = "users", description = "Staff administration"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;
