use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

/// Everything the roast pipeline needs from the environment, loaded once at
/// startup and handed to handlers through `AppState`. Handlers never read
/// env vars themselves, so tests can point these fields at fake providers.
#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Screenshot provider base endpoint, e.g. `https://cloud.appwrite.io/v1`.
    pub screenshot_endpoint: String,
    /// Screenshot provider project identifier.
    pub screenshot_project_id: String,
    /// OpenAI-compatible inference base URL, e.g. `https://openrouter.ai/api/v1`.
    pub ai_base_url: String,
    pub ai_api_key: String,
    pub ai_model: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let screenshot_endpoint = env::var("APPWRITE_ENDPOINT")?;
        let screenshot_project_id = env::var("APPWRITE_PROJECT_ID")?;
        let ai_base_url = env::var("AI_BASE_URL")?;
        let ai_api_key = env::var("AI_API_KEY")?;
        let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| "x-ai/grok-4.1-fast".to_string());

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            screenshot_endpoint,
            screenshot_project_id,
            ai_base_url,
            ai_api_key,
            ai_model,
        })
    }
}
