//! Driving port for the storehouse listing.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::inventory::Medicine;
use crate::domain::role::Actor;

/// Domain use-case port for listing stocked medicines.
#[async_trait]
pub trait InventoryQuery: Send + Sync {
    /// List every medicine kind visible to the actor.
    async fn list(&self, actor: &Actor) -> Result<Vec<Medicine>, Error>;
}
