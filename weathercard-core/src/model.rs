use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::Icon;

/// Current conditions for one location, normalized from the provider response.
///
/// Built once per successful fetch and never mutated; a new fetch replaces the
/// whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temp_f: f64,
    pub temp_c: f64,
    pub feels_like_f: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_mph: f64,
    pub wind_kph: f64,
    /// Condition text, lowercased for display.
    pub description: String,
    pub icon: Icon,
    pub is_day: bool,
    pub location_name: String,
    pub region: String,
    pub country: String,
    pub observed_at: DateTime<Utc>,
}

/// Result of the most recent fetch cycle, driving which card is built.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Loading,
    Success(WeatherRecord),
    Failure(String),
}

impl FetchOutcome {
    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            FetchOutcome::Success(record) => Some(record),
            _ => None,
        }
    }
}
