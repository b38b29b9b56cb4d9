//! Authorization and workflow core for a hospital operations dashboard.
//!
//! The crate is laid out hexagonally: `domain` holds the role registry, the
//! permission rule table, and the booking/payment workflow services behind
//! ports; `inbound::http` adapts them to actix-web; `outbound::persistence`
//! ships the in-memory reference adapter; `server` wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
