//! Driving port for doctor roster queries.

use async_trait::async_trait;

use crate::domain::department::{Department, Doctor};
use crate::domain::error::Error;
use crate::domain::role::Actor;

/// Domain use-case port for listing the doctor roster.
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// List doctors visible to the actor, optionally filtered by department,
    /// in stable identifier order.
    async fn list_doctors(
        &self,
        actor: &Actor,
        department: Option<Department>,
    ) -> Result<Vec<Doctor>, Error>;
}
