use serde::Serialize;
use crate::config::Config;
use crate::error::{Result, AppError};
use crate::screenshot::CLIENT;

/// The fixed critique instruction sent alongside every screenshot.
pub const ROAST_PROMPT: &str = "Roast this website hardcore based on the provided fullpage screenshot. Be funny, critical, and no-nonsense. Highlight design flaws, usability issues, and anything that screams 'noob'.";

/// Response-length cap for the completion.
pub const MAX_TOKENS: u32 = 500;

#[derive(Serialize)]
struct Message {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

fn build_request(config: &Config, image_base64: &str) -> ChatRequest {
    ChatRequest {
        model: config.ai_model.clone(),
        messages: vec![Message {
            role: "user".into(),
            content: vec![
                ContentPart::Text {
                    text: ROAST_PROMPT.into(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:image/png;base64,{}", image_base64),
                    },
                },
            ],
        }],
        max_tokens: MAX_TOKENS,
    }
}

/// Sends the screenshot to the configured multimodal endpoint and returns the
/// first completion choice's text, unmodified.
pub async fn roast_screenshot(config: &Config, image_base64: &str) -> Result<String> {
    let body = build_request(config, image_base64);
    let endpoint = format!("{}/chat/completions", config.ai_base_url.trim_end_matches('/'));

    let res = CLIENT
        .post(&endpoint)
        .bearer_auth(&config.ai_api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::Inference(e.to_string()))?;

    if !res.status().is_success() {
        return Err(AppError::Inference(format!(
            "Endpoint returned status {}",
            res.status()
        )));
    }

    let json: serde_json::Value = res
        .json()
        .await
        .map_err(|e| AppError::Inference(e.to_string()))?;

    let roast = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| AppError::Inference("Invalid response format from model".to_string()))?
        .to_string();

    Ok(roast)
}
