use actix_web::{post, web};
use std::sync::Arc;

use crate::db::user_service::UserService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RRegister, RegisterRes};

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    users: web::Data<Arc<UserService>>,
    body: web::Json<RRegister>,
) -> ApiResult<RegisterRes> {
    users.register_user(body.into_inner()).await?;

    Ok(ApiResponse::Created(RegisterRes {
        success: true,
        message: "user registered".to_string(),
    }))
}
