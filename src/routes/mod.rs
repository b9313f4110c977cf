use crate::types::error::AppError;
use actix_web::web;

pub mod health;
pub mod login;
pub mod register;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/register").service(register::register));
    cfg.service(web::scope("/login").service(login::login));
}
