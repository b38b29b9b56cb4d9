//! Driving port for the staff administration surface.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::role::{Actor, User, UserId};

/// Domain use-case port for administrative user management.
#[async_trait]
pub trait UsersAdmin: Send + Sync {
    /// List every user record.
    async fn list(&self, actor: &Actor) -> Result<Vec<User>, Error>;

    /// Delete a user record (delegated to the identity collaborator).
    async fn delete(&self, actor: &Actor, id: UserId) -> Result<(), Error>;
}
