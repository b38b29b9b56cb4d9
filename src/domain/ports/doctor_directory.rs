//! Driven port for the department–doctor directory.
//!
//! Read-mostly configuration data: adapters may cache it and refresh on
//! administrative change without coordination.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::department::{Department, Doctor, DoctorId};

/// Errors raised by [`DoctorDirectory`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DirectoryPersistenceError {
    /// Directory backend is unavailable.
    #[error("doctor directory connection failed: {message}")]
    Connection { message: String },
    /// Lookup failed during execution.
    #[error("doctor directory query failed: {message}")]
    Query { message: String },
}

impl DirectoryPersistenceError {
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

/// Read port over the doctor roster.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorDirectory: Send + Sync {
    /// List doctors, optionally restricted to one department, ordered by
    /// identifier (stable ordering).
    async fn list(
        &self,
        department: Option<Department>,
    ) -> Result<Vec<Doctor>, DirectoryPersistenceError>;

    /// Fetch a doctor by identifier.
    async fn find(&self, id: DoctorId) -> Result<Option<Doctor>, DirectoryPersistenceError>;
}
