//! Storehouse listing service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::inventory::Medicine;
use crate::domain::ports::{InventoryPersistenceError, InventoryQuery, MedicineInventory};
use crate::domain::rbac::{evaluate, ResourceAction};
use crate::domain::role::Actor;

fn map_inventory_error(error: InventoryPersistenceError) -> Error {
    match error {
        InventoryPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("medicine inventory unavailable: {message}"))
        }
        InventoryPersistenceError::Query { message } => {
            Error::internal(format!("medicine inventory error: {message}"))
        }
    }
}

/// Medicine listing over the inventory port.
pub struct InventoryService<I> {
    inventory: Arc<I>,
}

impl<I> InventoryService<I> {
    /// Create the service from its driven port.
    pub fn new(inventory: Arc<I>) -> Self {
        Self { inventory }
    }
}

#[async_trait]
impl<I> InventoryQuery for InventoryService<I>
where
    I: MedicineInventory,
{
    async fn list(&self, actor: &Actor) -> Result<Vec<Medicine>, Error> {
        if !evaluate(actor.role, ResourceAction::MedicinesList, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }
        self.inventory.list().await.map_err(map_inventory_error)
    }
}
