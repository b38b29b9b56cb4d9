//! Storehouse endpoint.
//!
//! ```text
//! GET /api/v1/medicines
//! ```

use actix_web::{get, web};

use super::guard;
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;
use crate::domain::rbac::ResourceAction;
use crate::domain::{Error, Medicine};

/// List the stocked medicine kinds.
#[utoipa::path(
    get,
    path = "/api/v1/medicines",
    responses(
        (status = 200, description = "Medicine shelf", body = [Medicine]),
        (status = 401, description = "Unauthenticated", body = Error),
        (status = 403, description = "Role not permitted", body = Error)
    ),
    tags = ["medicines"],
    operation_id = "listMedicines"
)]
#[get("/medicines")]
pub async fn list_medicines(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Medicine>>> {
    let actor = guard::require(&session, ResourceAction::MedicinesList)?;
    Ok(web::Json(state.medicines.list(&actor).await?))
}
