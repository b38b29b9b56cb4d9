//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: the HTTP adapter calls it to
//! turn credentials into an [`Actor`] without knowing the backing identity
//! infrastructure. The core itself never verifies credentials; production
//! deployments back this port with the real identity collaborator.

use std::sync::Arc;

use async_trait::async_trait;

use super::user_directory::{UserDirectory, UserDirectoryError};
use crate::domain::auth::LoginCredentials;
use crate::domain::error::Error;
use crate::domain::role::Actor;

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated actor.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Actor, Error>;
}

/// Development stand-in for the identity collaborator.
///
/// Accepts any user present in the directory with the fixed password
/// `password`. Exists so the dashboard is drivable against seeded demo data;
/// it is not a credential store.
pub struct SeededLoginService<U> {
    directory: Arc<U>,
}

impl<U> SeededLoginService<U> {
    const DEV_PASSWORD: &'static str = "password";

    /// Create the fixture service over a user directory.
    pub fn new(directory: Arc<U>) -> Self {
        Self { directory }
    }
}

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

#[async_trait]
impl<U> LoginService for SeededLoginService<U>
where
    U: UserDirectory,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Actor, Error> {
        let user = self
            .directory
            .find_by_username(credentials.username())
            .await
            .map_err(map_directory_error)?;
        match user {
            Some(user) if credentials.password() == Self::DEV_PASSWORD => {
                Ok(Actor::new(user.id, user.username, user.role))
            }
            // Identical outcome for unknown user and wrong password.
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}
