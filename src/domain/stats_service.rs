//! Scoped statistics service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::ports::{StatsQuery, StatsSource, StatsSourceError};
use crate::domain::rbac::{evaluate, ResourceAction};
use crate::domain::role::Actor;
use crate::domain::stats::StatsSnapshot;

fn map_source_error(error: StatsSourceError) -> Error {
    match error {
        StatsSourceError::Connection { message } => {
            Error::service_unavailable(format!("stats source unavailable: {message}"))
        }
        StatsSourceError::Query { message } => {
            Error::internal(format!("stats source error: {message}"))
        }
    }
}

/// Read-only statistics projection over a consistent snapshot source.
pub struct StatsService<S> {
    source: Arc<S>,
}

impl<S> StatsService<S> {
    /// Create the service from its driven port.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> StatsQuery for StatsService<S>
where
    S: StatsSource,
{
    async fn compute(&self, actor: &Actor) -> Result<StatsSnapshot, Error> {
        if !evaluate(actor.role, ResourceAction::StatsView, None).is_allowed() {
            return Err(Error::forbidden("access denied"));
        }
        let totals = self.source.totals().await.map_err(map_source_error)?;
        Ok(StatsSnapshot::for_role(actor.role, totals))
    }
}
