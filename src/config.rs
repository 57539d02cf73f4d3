//! Environment configuration
//!
//! `DATABASE_URL` wins when set; otherwise the URL is assembled from the
//! individual `DB_*` variables with local-development defaults.

use std::env;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: &str = "5432";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASS: &str = "";
const DEFAULT_DB_NAME: &str = "financial_checker";
const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DbConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("DB_HOST", DEFAULT_DB_HOST),
            port: env_or("DB_PORT", DEFAULT_DB_PORT),
            user: env_or("DB_USER", DEFAULT_DB_USER),
            password: env_or("DB_PASS", DEFAULT_DB_PASS),
            name: env_or("DB_NAME", DEFAULT_DB_NAME),
        }
    }

    pub fn url(&self) -> String {
        if self.password.is_empty() {
            format!(
                "postgres://{}@{}:{}/{}",
                self.user, self.host, self.port, self.name
            )
        } else {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            )
        }
    }
}

/// Connection string for the application database.
pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DbConfig::from_env().url())
}

/// Listen address for the HTTP server.
pub fn listen_addr() -> String {
    let port = env_or("PORT", DEFAULT_PORT);
    format!("0.0.0.0:{port}")
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}
