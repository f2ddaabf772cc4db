use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants;
use crate::error::{Result, TimelineError};

/// Fetches rendered page HTML through the MediaWiki `action=parse` API,
/// which is steadier than scraping the page itself.
pub struct MediaWikiClient {
    client: reqwest::Client,
    api_url: String,
    page: String,
}

impl MediaWikiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| TimelineError::Config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(constants::ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            page: config.page.clone(),
        })
    }

    pub async fn fetch_page_html(&self) -> Result<String> {
        info!("Fetching page '{}' from {}", self.page, self.api_url);

        let params = [
            ("action", "parse"),
            ("format", "json"),
            ("page", self.page.as_str()),
            ("prop", "text"),
            ("disablelimitreport", "1"),
            ("disableeditsection", "1"),
            ("redirects", "1"),
        ];

        let body = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("Received {} bytes from MediaWiki API", body.len());

        html_from_response(&body)
    }
}

/// Pulls `parse.text["*"]` out of an `action=parse` JSON response.
pub fn html_from_response(body: &str) -> Result<String> {
    let data: Value = serde_json::from_str(body)?;

    if let Some(error) = data.get("error") {
        return Err(TimelineError::Api {
            message: error.to_string(),
        });
    }

    data.pointer("/parse/text/*")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TimelineError::Api {
            message: "response has no parse.text content".to_string(),
        })
}
