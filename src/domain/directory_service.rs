//! Doctor roster query service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::department::{Department, Doctor};
use crate::domain::error::Error;
use crate::domain::ports::{DirectoryPersistenceError, DirectoryQuery, DoctorDirectory};
use crate::domain::rbac::{evaluate, ResourceAction};
use crate::domain::role::Actor;

fn map_directory_error(error: DirectoryPersistenceError) -> Error {
    match error {
        DirectoryPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("doctor directory unavailable: {message}"))
        }
        DirectoryPersistenceError::Query { message } => {
            Error::internal(format!("doctor directory error: {message}"))
        }
    }
}

/// Roster listing over the doctor directory port.
pub struct DirectoryService<D> {
    directory: Arc<D>,
}

impl<D> DirectoryService<D> {
    /// Create the service from its driven port.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D> DirectoryQuery for DirectoryService<D>
where
    D: DoctorDirectory,
{
    async fn list_doctors(
        &self,
        actor: &Actor,
        department: Option<Department>,
    ) -> Result<Vec<Doctor>, Error> {
        if !evaluate(actor.role, ResourceAction::DoctorsList, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }
        self.directory
            .list(department)
            .await
            .map_err(map_directory_error)
    }
}
