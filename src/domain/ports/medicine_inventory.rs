//! Driven port for the medicine inventory.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::inventory::Medicine;

/// Errors raised by [`MedicineInventory`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InventoryPersistenceError {
    /// Inventory backend is unavailable.
    #[error("medicine inventory connection failed: {message}")]
    Connection { message: String },
    /// Lookup failed during execution.
    #[error("medicine inventory query failed: {message}")]
    Query { message: String },
}

impl InventoryPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Read port over stocked medicines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MedicineInventory: Send + Sync {
    /// List every stocked medicine kind, ordered by identifier.
    async fn list(&self) -> Result<Vec<Medicine>, InventoryPersistenceError>;
}
