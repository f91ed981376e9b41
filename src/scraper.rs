use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};

/// Pages that extract to fewer characters than this are treated as blocked,
/// login-walled, or otherwise unusable.
pub const MIN_TEXT_CHARS: usize = 100;

// Create static selectors to avoid recompiling them each time
static MAIN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("main").expect("Failed to parse main selector"));
static ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("Failed to parse article selector"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("Failed to parse body selector"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("Failed to parse title selector"));

/// Validate a raw URL string before any network call: it must parse as an
/// absolute URL with an http(s) scheme and a host.
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                other
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(AppError::InvalidUrl("missing host".to_string()));
    }

    Ok(url)
}

/// Fetch the page body, following redirects. Any final status other than 200
/// is reported as not fetchable, with no finer-grained distinction.
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.as_str()).send().await?;

    if response.status() != StatusCode::OK {
        return Err(AppError::FetchError);
    }

    let html = response.text().await?;
    Ok(html)
}

pub struct PageContent {
    pub text: String,
    pub title: Option<String>,
}

/// Extract the readable text and title from an HTML document. The content
/// region is the first `<main>`, else the first `<article>`, else `<body>`,
/// else the whole document.
pub fn extract_content(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let region = document
        .select(&MAIN_SELECTOR)
        .next()
        .or_else(|| document.select(&ARTICLE_SELECTOR).next())
        .or_else(|| document.select(&BODY_SELECTOR).next());

    let text = match region {
        Some(element) => element_text(element),
        None => element_text(document.root_element()),
    };

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string());

    PageContent { text, title }
}

// Trim each text node and join the non-empty ones with single spaces.
fn element_text(element: ElementRef) -> String {
    let mut result = String::new();

    for node in element.text() {
        let trimmed = node.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(trimmed);
    }

    result
}
