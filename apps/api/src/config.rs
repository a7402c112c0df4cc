use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the Groq API key is required; everything else has a development default.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub jwt_secret: String,
    pub jwt_expire_minutes: i64,
    pub cors_origin: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-this-secret-in-production".to_string()),
            jwt_expire_minutes: std::env::var("JWT_EXPIRE_MINUTES")
                .unwrap_or_else(|_| (60 * 24).to_string())
                .parse::<i64>()
                .context("JWT_EXPIRE_MINUTES must be an integer")?,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    /// Config with inert values for handler tests. No network, no env.
    pub fn for_tests() -> Self {
        Config {
            groq_api_key: "test-key".to_string(),
            groq_model: "llama-3.3-70b-versatile".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expire_minutes: 60,
            cors_origin: "http://localhost:3000".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}
