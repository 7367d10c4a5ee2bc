use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct RoastRequest {
    // Defaulted so an absent "url" key validates as empty rather than
    // failing JSON extraction.
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct RoastResponse {
    pub roast: String,
}
