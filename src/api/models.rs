use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// `title` is serialized as `null` when the page has no `<title>` element.
#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub text: String,
    pub title: Option<String>,
    pub url: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
