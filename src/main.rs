use actix_web::{middleware::Logger, web, App, HttpServer};
use roster_auth::config::EnvConfig;
use roster_auth::db::user_service::UserService;
use roster_auth::routes::configure_routes;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let user_service = Arc::new(UserService::with_json_file(&config.users_file));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&user_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
