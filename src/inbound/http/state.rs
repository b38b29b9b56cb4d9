//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data` so they depend
//! only on domain driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingWorkflow, DirectoryQuery, InventoryQuery, LoginService, PaymentWorkflow, StatsQuery,
    UsersAdmin,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub bookings: Arc<dyn BookingWorkflow>,
    pub payments: Arc<dyn PaymentWorkflow>,
    pub doctors: Arc<dyn DirectoryQuery>,
    pub stats: Arc<dyn StatsQuery>,
    pub medicines: Arc<dyn InventoryQuery>,
    pub users: Arc<dyn UsersAdmin>,
}
