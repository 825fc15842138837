use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use crate::{error::FetchError, model::WeatherRecord};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a preconfigured client (proxy, timeouts, TLS roots) instead of the default.
    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn current_url(&self) -> String {
        format!("{}/current.json", self.base_url.trim_end_matches('/'))
    }

    /// The query pair is percent-encoded by reqwest, so "New York" or "São Paulo"
    /// reach the provider intact.
    fn current_request(&self, location: &str) -> RequestBuilder {
        self.http.get(self.current_url()).query(&[("key", self.api_key.as_str()), ("q", location)])
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

/// Project a `current.json` body into a record. Only the fields the widget
/// shows are required; everything else in the payload is ignored.
pub fn parse_current(body: &str) -> Result<WeatherRecord, FetchError> {
    let parsed: WaResponse = serde_json::from_str(body)?;

    Ok(WeatherRecord::celsius(
        parsed.current.temp_c,
        parsed.current.condition.text,
        parsed.location.name,
    ))
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, location: &str) -> Result<WeatherRecord, FetchError> {
        let res = self.current_request(location).send().await?;

        let status = res.status();
        if !status.is_success() {
            // The status alone decides the outcome; the body is only diagnostic.
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let body = res.text().await?;
        parse_current(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
