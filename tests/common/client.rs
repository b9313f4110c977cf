use actix_web::{web, App};
use roster_auth::db::user_service::UserService;
use std::sync::Arc;

pub struct TestClient {
    pub users: Arc<UserService>,
}

impl TestClient {
    pub fn new(users: Arc<UserService>) -> Self {
        TestClient { users }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.users)))
            .configure(roster_auth::routes::configure_routes)
    }
}
