//! Staff administration service.
//!
//! The core evaluates the permission and delegates identity mutation to the
//! directory collaborator; it never owns user records itself.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::error::Error;
use crate::domain::ports::{UserDirectory, UserDirectoryError, UsersAdmin};
use crate::domain::rbac::{evaluate, ResourceAction};
use crate::domain::role::{Actor, User, UserId};

fn map_directory_error(error: UserDirectoryError) -> Error {
    match error {
        UserDirectoryError::Connection { message } => {
            Error::service_unavailable(format!("user directory unavailable: {message}"))
        }
        UserDirectoryError::Query { message } => {
            Error::internal(format!("user directory error: {message}"))
        }
    }
}

/// Administrative user listing and deletion over the directory port.
pub struct AdminService<U> {
    directory: Arc<U>,
}

impl<U> AdminService<U> {
    /// Create the service from its driven port.
    pub fn new(directory: Arc<U>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<U> UsersAdmin for AdminService<U>
where
    U: UserDirectory,
{
    async fn list(&self, actor: &Actor) -> Result<Vec<User>, Error> {
        if !evaluate(actor.role, ResourceAction::UsersList, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }
        self.directory.list().await.map_err(map_directory_error)
    }

    async fn delete(&self, actor: &Actor, id: UserId) -> Result<(), Error> {
        if !evaluate(actor.role, ResourceAction::UsersDelete, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }
        match self.directory.delete(id).await.map_err(map_directory_error)? {
            Some(()) => {
                info!(user_id = %id, actor_role = %actor.role, "user deleted");
                Ok(())
            }
            None => Err(Error::not_found(format!("user {id} not found"))),
        }
    }
}
