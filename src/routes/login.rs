use actix_web::{post, web};
use std::sync::Arc;

use crate::db::user_service::UserService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    users: web::Data<Arc<UserService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let user = users.login_user(body.into_inner()).await?;

    Ok(ApiResponse::Ok(LoginRes {
        success: true,
        message: "login successful".to_string(),
        role: user.role,
    }))
}
