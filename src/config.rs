use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub users_file: String,
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            host: Self::get_env_or("HOST", "0.0.0.0"),
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            users_file: Self::get_env_or("USERS_FILE", "users.json"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
