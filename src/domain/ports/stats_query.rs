//! Driving port for the role-scoped statistics projection.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::role::Actor;
use crate::domain::stats::StatsSnapshot;

/// Domain use-case port for the operational overview.
#[async_trait]
pub trait StatsQuery: Send + Sync {
    /// Compute the statistics snapshot masked to the actor's role.
    async fn compute(&self, actor: &Actor) -> Result<StatsSnapshot, Error>;
}
