use std::env;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote registry service, without a trailing slash.
    pub api_base_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string())
            .trim_end_matches('/')
            .to_string();
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        Self { api_base_url, bind_addr }
    }
}
