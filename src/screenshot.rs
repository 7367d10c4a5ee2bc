use reqwest::{Client, ClientBuilder, Url};
use std::time::Duration;
use once_cell::sync::Lazy;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Fixed capture viewport, full-page rendering enabled.
pub const VIEWPORT_WIDTH: u32 = 1280;
pub const VIEWPORT_HEIGHT: u32 = 720;

// Create a static client to reuse connections
pub(crate) static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Prepends `https://` when the input carries no scheme. Anything already
/// starting with `http` passes through untouched.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Builds the provider's capture reference for `target`: the rendered image
/// is fetchable from this URL.
pub fn capture_url(config: &Config, target: &str) -> Result<Url> {
    let base = format!(
        "{}/avatars/screenshot",
        config.screenshot_endpoint.trim_end_matches('/')
    );
    let width = VIEWPORT_WIDTH.to_string();
    let height = VIEWPORT_HEIGHT.to_string();
    Url::parse_with_params(
        &base,
        [
            ("url", target),
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("fullpage", "true"),
            ("project", config.screenshot_project_id.as_str()),
        ],
    )
    .map_err(|e| AppError::Screenshot(format!("Invalid capture URL: {}", e)))
}

/// Renders `target` through the screenshot provider and returns the image
/// bytes as a standard base64 string.
pub async fn fetch_screenshot_base64(config: &Config, target: &str) -> Result<String> {
    let url = capture_url(config, target)?;

    let response = CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::Screenshot(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AppError::Screenshot(format!(
            "Provider returned status {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::ImageFetch(e.to_string()))?;

    Ok(BASE64.encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn test_config() -> Config {
        Config {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            screenshot_endpoint: "https://cloud.appwrite.io/v1".to_string(),
            screenshot_project_id: "proj123".to_string(),
            ai_base_url: "https://openrouter.ai/api/v1".to_string(),
            ai_api_key: "key".to_string(),
            ai_model: "x-ai/grok-4.1-fast".to_string(),
        }
    }

    #[test]
    fn scheme_is_prepended_when_missing() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("test.dev"), "https://test.dev");
    }

    #[test]
    fn existing_scheme_passes_through() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn capture_url_carries_viewport_and_project() {
        let url = capture_url(&test_config(), "https://example.com").unwrap();
        assert_eq!(url.path(), "/v1/avatars/screenshot");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("url".to_string(), "https://example.com".to_string())));
        assert!(pairs.contains(&("width".to_string(), "1280".to_string())));
        assert!(pairs.contains(&("height".to_string(), "720".to_string())));
        assert!(pairs.contains(&("fullpage".to_string(), "true".to_string())));
        assert!(pairs.contains(&("project".to_string(), "proj123".to_string())));
    }

    #[test]
    fn trailing_slash_on_endpoint_is_tolerated() {
        let mut config = test_config();
        config.screenshot_endpoint = "https://cloud.appwrite.io/v1/".to_string();
        let url = capture_url(&config, "https://example.com").unwrap();
        assert_eq!(url.path(), "/v1/avatars/screenshot");
    }
}
