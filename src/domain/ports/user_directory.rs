//! Driven port for the user directory (role registry backing store).
//!
//! The core reads identity; the only mutation it delegates here is the
//! administrative user deletion, which remains owned by the identity
//! collaborator.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::role::{User, UserId};

/// Errors raised by [`UserDirectory`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum UserDirectoryError {
    /// Directory backend is unavailable.
    #[error("user directory connection failed: {message}")]
    Connection { message: String },
    /// Lookup or mutation failed during execution.
    #[error("user directory query failed: {message}")]
    Query { message: String },
}

impl UserDirectoryError {
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

/// Read (and administratively delete) access to user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// List every user, ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, UserDirectoryError>;

    /// Fetch a user by username (exact match).
    async fn find_by_username(&self, username: &str)
        -> Result<Option<User>, UserDirectoryError>;

    /// Delete a user record. `None` means no such user.
    async fn delete(&self, id: UserId) -> Result<Option<()>, UserDirectoryError>;
}
