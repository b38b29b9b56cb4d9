//! Domain core: role registry, permission rule table, and workflow services.
//!
//! Everything in this module is transport agnostic. Inbound adapters map the
//! typed outcomes to HTTP responses; driven adapters implement the traits in
//! [`ports`]. Each operation takes the acting [`Actor`] explicitly; the core
//! never reads identity from ambient storage.

pub mod admin_service;
pub mod auth;
pub mod booking;
pub mod booking_service;
pub mod department;
pub mod directory_service;
pub mod error;
pub mod inventory;
pub mod inventory_service;
pub mod payment;
pub mod payment_service;
pub mod ports;
pub mod rbac;
pub mod role;
pub mod stats;
pub mod stats_service;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::booking::{
    Age, Booking, BookingId, BookingStatus, BookingValidationError, Gender, NewBooking,
    PatientName,
};
pub use self::department::{Department, Doctor, DoctorId, PairingError};
pub use self::error::{Error, ErrorCode};
pub use self::inventory::{Medicine, MedicineId};
pub use self::payment::{Amount, NewPaymentOrder, OrderId, PaymentOrder, PaymentStatus};
pub use self::role::{Actor, PatientScope, Role, User, UserId};
pub use self::stats::{StatsSnapshot, StatsTotals};
