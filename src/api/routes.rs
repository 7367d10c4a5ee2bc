use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
    response::Html,
};
use tower_http::cors::{CorsLayer, Any};
use tracing::info;

use crate::error::{Result, AppError};
use crate::api::models::{RoastRequest, RoastResponse};
use crate::screenshot::{normalize_url, fetch_screenshot_base64};
use crate::llm::roast_screenshot;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/roast", post(roast_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// The client page, embedded at compile time.
async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

async fn roast_handler(
    State(state): State<AppState>,
    Json(req): Json<RoastRequest>,
) -> Result<Json<RoastResponse>> {
    if req.url.trim().is_empty() {
        return Err(AppError::MissingUrl);
    }

    let target = normalize_url(&req.url);
    info!("Roasting {}", target);

    let start = std::time::Instant::now();
    let image_base64 = fetch_screenshot_base64(&state.config, &target).await?;
    info!("Screenshot captured in {:?}", start.elapsed());

    let roast = roast_screenshot(&state.config, &image_base64).await?;
    info!("Roast completed in {:?}", start.elapsed());

    Ok(Json(RoastResponse { roast }))
}
