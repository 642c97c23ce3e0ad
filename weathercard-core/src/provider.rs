use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::WeatherRecord;

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Source of current conditions for a city.
///
/// One implementation ships (WeatherAPI.com); the trait keeps the fetch
/// behind a seam so tests and other hosts can substitute their own.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}
