//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain talks to adapters (the persistence
//! collaborator, the identity directory); driving ports are the use-case
//! traits inbound adapters consume. Each driven port exposes strongly typed
//! errors so adapters map failures into predictable variants.

pub mod booking_repository;
pub mod booking_workflow;
pub mod directory_query;
pub mod doctor_directory;
pub mod inventory_query;
pub mod login_service;
pub mod medicine_inventory;
pub mod payment_repository;
pub mod payment_workflow;
pub mod stats_query;
pub mod stats_source;
pub mod user_directory;
pub mod users_admin;

pub use self::booking_repository::{BookingPersistenceError, BookingRepository};
pub use self::booking_workflow::{AdvanceOutcome, BookingWorkflow, CreateBookingRequest};
pub use self::directory_query::DirectoryQuery;
pub use self::doctor_directory::{DirectoryPersistenceError, DoctorDirectory};
pub use self::inventory_query::InventoryQuery;
pub use self::login_service::{LoginService, SeededLoginService};
pub use self::medicine_inventory::{InventoryPersistenceError, MedicineInventory};
pub use self::payment_repository::{PaymentPersistenceError, PaymentRepository};
pub use self::payment_workflow::PaymentWorkflow;
pub use self::stats_query::StatsQuery;
pub use self::stats_source::{StatsSource, StatsSourceError};
pub use self::user_directory::{UserDirectory, UserDirectoryError};
pub use self::users_admin::UsersAdmin;

#[cfg(test)]
pub use self::booking_repository::MockBookingRepository;
#[cfg(test)]
pub use self::doctor_directory::MockDoctorDirectory;
#[cfg(test)]
pub use self::medicine_inventory::MockMedicineInventory;
#[cfg(test)]
pub use self::payment_repository::MockPaymentRepository;
#[cfg(test)]
pub use self::stats_source::MockStatsSource;
#[cfg(test)]
pub use self::user_directory::MockUserDirectory;

/// Result of an atomic compare-and-set on an entity's status.
///
/// The read-current-status-then-write step is indivisible inside the
/// adapter, which is what guarantees "exactly one success" when two callers
/// race the same transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCas {
    /// The entity was in the source state and has been moved to the target.
    Applied,
    /// The entity was already in the target state; nothing was written.
    AlreadyDone,
}
