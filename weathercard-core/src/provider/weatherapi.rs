use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::icon::Icon;
use crate::model::WeatherRecord;

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com "current conditions" endpoint.
///
/// The API key is injected at construction. No retry, no cache, no timeout:
/// each call is one GET, and the widget absorbs whatever comes back.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at a different base URL (mock servers in tests).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let url = format!("{}/current.json", self.base_url);
        debug!(%city, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Network)?;

        if !status.is_success() {
            return Err(FetchError::InvalidResponse(format!(
                "status {status}: {}",
                truncate_body(&body),
            )));
        }

        let parsed: WaResponse = serde_json::from_str(&body)
            .map_err(|err| FetchError::InvalidResponse(err.to_string()))?;

        Ok(record_from_response(parsed))
    }
}

fn record_from_response(parsed: WaResponse) -> WeatherRecord {
    let is_day = parsed.current.is_day == 1;
    let observed_at = parsed
        .current
        .last_updated_epoch
        .and_then(unix_to_utc)
        .unwrap_or_else(Utc::now);

    WeatherRecord {
        temp_f: parsed.current.temp_f,
        temp_c: parsed.current.temp_c,
        feels_like_f: parsed.current.feelslike_f,
        feels_like_c: parsed.current.feelslike_c,
        humidity_pct: parsed.current.humidity,
        wind_mph: parsed.current.wind_mph,
        wind_kph: parsed.current.wind_kph,
        description: parsed.current.condition.text.to_lowercase(),
        icon: Icon::for_condition(parsed.current.condition.code, is_day),
        is_day,
        location_name: parsed.location.name,
        region: parsed.location.region,
        country: parsed.location.country,
        observed_at,
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    code: i64,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_f: f64,
    temp_c: f64,
    feelslike_f: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_mph: f64,
    wind_kph: f64,
    is_day: u8,
    condition: WaCondition,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        self.fetch_current(city).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
