//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! The cookie session stores the full serialized [`Actor`] placed there at
//! login. Handlers read it back and pass the actor explicitly into the
//! domain; nothing downstream touches the session again.

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Actor, Error};

pub(crate) const ACTOR_KEY: &str = "actor";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated actor in the session cookie.
    pub fn persist_actor(&self, actor: &Actor) -> Result<(), Error> {
        self.0
            .insert(ACTOR_KEY, actor)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current actor from the session, if present.
    ///
    /// A cookie that fails to deserialize is treated as absent rather than
    /// an error, so a stale or tampered value degrades to "not logged in".
    pub fn actor(&self) -> Result<Option<Actor>, Error> {
        match self.0.get::<Actor>(ACTOR_KEY) {
            Ok(actor) => Ok(actor),
            Err(error) => {
                tracing::warn!("invalid actor in session cookie: {error}");
                Ok(None)
            }
        }
    }

    /// Drop the session, logging the actor out.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
