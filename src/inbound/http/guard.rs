//! Route authorization gate for HTTP handlers.
//!
//! Thin HTTP-side wrapper over [`rbac::authorize`]: reads the actor from the
//! session, consults the shared rule table, and maps gate denials to the
//! domain error taxonomy. Denials carry a `redirect` detail instead of rule
//! specifics, so the response body never reveals which roles a surface
//! accepts.

use serde_json::json;

use super::session::SessionContext;
use crate::domain::rbac::{self, GateDecision, RedirectTarget, ResourceAction};
use crate::domain::{Actor, Error};

fn denial(target: RedirectTarget) -> Error {
    let error = match target {
        RedirectTarget::Login => Error::unauthorized("login required"),
        RedirectTarget::Landing => Error::forbidden("access denied"),
    };
    error.with_details(json!({ "redirect": target.as_path() }))
}

/// Require an actor whose role passes the gate for `action`.
pub fn require(session: &SessionContext, action: ResourceAction) -> Result<Actor, Error> {
    let actor = session.actor()?;
    match rbac::authorize(actor.as_ref(), action) {
        GateDecision::Allowed => {
            // authorize() only allows authenticated actors.
            actor.ok_or_else(|| Error::internal("gate allowed an anonymous request"))
        }
        GateDecision::Denied(target) => Err(denial(target)),
    }
}
