//! Decides which city the card shows.
//!
//! Precedence: explicit override > configured city > host profile location >
//! the fixed default. Profile failures are absorbed here; the resolver always
//! ends up `Resolved`.

use tracing::debug;

use crate::error::ProfileError;
use crate::host::{HostProfile, UserProfile};

/// Fallback city when neither configuration nor profile yields one.
pub const DEFAULT_CITY: &str = "New York City";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityState {
    Unset,
    Resolving,
    Resolved(String),
}

#[derive(Debug)]
pub struct CityResolver {
    state: CityState,
}

impl CityResolver {
    /// Start `Resolved` when a configured city is supplied (non-empty after
    /// trimming), otherwise `Unset`.
    pub fn new(configured: Option<&str>) -> Self {
        let state = match configured.map(str::trim) {
            Some(city) if !city.is_empty() => CityState::Resolved(city.to_string()),
            _ => CityState::Unset,
        };
        Self { state }
    }

    pub fn state(&self) -> &CityState {
        &self.state
    }

    pub fn city(&self) -> Option<&str> {
        match &self.state {
            CityState::Resolved(city) => Some(city.as_str()),
            _ => None,
        }
    }

    /// `Unset` -> `Resolving`. Returns false (and changes nothing) from any
    /// other state.
    pub fn begin_resolution(&mut self) -> bool {
        if self.state == CityState::Unset {
            self.state = CityState::Resolving;
            true
        } else {
            false
        }
    }

    /// Apply the host's answer to a pending resolution.
    ///
    /// Ignored unless still `Resolving`: an override issued while the profile
    /// request was in flight wins, and the late answer is dropped. Profile
    /// failures and profiles without a location fall back to [`DEFAULT_CITY`].
    pub fn complete_resolution(
        &mut self,
        result: Result<UserProfile, ProfileError>,
    ) -> Option<&str> {
        if self.state != CityState::Resolving {
            debug!("profile resolution superseded, dropping result");
            return None;
        }

        let city = match result {
            Ok(profile) => profile
                .location
                .as_deref()
                .map(city_from_location)
                .filter(|city| !city.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_CITY.to_string()),
            Err(err) => {
                debug!(error = %err, "profile unavailable, using default city");
                DEFAULT_CITY.to_string()
            }
        };

        self.state = CityState::Resolved(city);
        self.city()
    }

    /// Explicit user or host override. Empty or whitespace-only input is
    /// ignored; anything else resolves immediately, superseding a pending
    /// profile resolution.
    pub fn apply_override(&mut self, input: &str) -> Option<&str> {
        let city = input.trim();
        if city.is_empty() {
            return None;
        }
        self.state = CityState::Resolved(city.to_string());
        self.city()
    }

    /// Ask the host for the profile and resolve in one step.
    pub async fn resolve(&mut self, host: &dyn HostProfile) -> Option<&str> {
        if !self.begin_resolution() {
            return self.city();
        }
        let result = host.user_profile().await;
        self.complete_resolution(result)
    }
}

/// Substring before the first comma, trimmed. `"Austin, TX"` -> `"Austin"`.
fn city_from_location(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}
