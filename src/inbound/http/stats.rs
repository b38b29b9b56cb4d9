//! Operational overview endpoint.
//!
//! ```text
//! GET /api/v1/stats
//! ```

use actix_web::{get, web};

use super::guard;
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;
use crate::domain::rbac::ResourceAction;
use crate::domain::{Error, StatsSnapshot};

/// Role-scoped statistics snapshot.
///
/// Fields outside the actor's permission scope are omitted from the payload.
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses(
        (status = 200, description = "Masked statistics snapshot", body = StatsSnapshot),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["stats"],
    operation_id = "getStats"
)]
#[get("/stats")]
pub async fn get_stats(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<StatsSnapshot>> {
    let actor = guard::require(&session, ResourceAction::StatsView)?;
    Ok(web::Json(state.stats.compute(&actor).await?))
}
