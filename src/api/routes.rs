use axum::{
    Router,
    extract::{Json, State},
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::AppState;
use crate::api::models::{HealthResponse, ScrapeRequest, ScrapeResponse};
use crate::error::{AppError, Result};
use crate::scraper::{MIN_TEXT_CHARS, extract_content, fetch_html, validate_url};

pub fn create_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.allowed_origins);

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/scrape", post(scrape_handler))
        .layer(cors)
        .with_state(app_state)
}

// Browsers reject `Access-Control-Allow-Origin: *` combined with credentials,
// so the permissive "*" configuration mirrors whatever the request sends.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn scrape_handler(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>> {
    let url = validate_url(&req.url)?;
    tracing::info!(%url, "processing scrape request");

    let html = fetch_html(&state.client, &url).await?;

    let page = extract_content(&html);
    let chars = page.text.chars().count();
    tracing::debug!(%url, chars, "extracted page content");

    if chars < MIN_TEXT_CHARS {
        tracing::warn!(%url, chars, "extracted content below threshold");
        return Err(AppError::ContentError);
    }

    tracing::info!(%url, "scrape succeeded");
    Ok(Json(ScrapeResponse {
        text: page.text,
        title: page.title,
        url: url.to_string(),
    }))
}
