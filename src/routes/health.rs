use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

/// Liveness probe. Does not read the user store.
#[get("")]
async fn health() -> ApiResult<()> {
    Ok(ApiResponse::EmptyOk)
}
