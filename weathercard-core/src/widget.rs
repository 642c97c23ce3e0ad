//! Widget controller: owns the current city and the current fetch outcome.
//!
//! All state lives in one rendering context and changes only through these
//! methods, so the stale-discard rule can be enforced in one place: each
//! fetch is tagged with the city it was issued for, and a completion whose
//! tag no longer matches is dropped.

use tracing::{debug, warn};

use crate::card::{self, Node};
use crate::city::CityResolver;
use crate::error::FetchError;
use crate::host::HostProfile;
use crate::model::{FetchOutcome, WeatherRecord};
use crate::provider::WeatherProvider;

/// Tag handed out by [`Widget::begin_fetch`]; completions must present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    city: String,
}

impl FetchTicket {
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug)]
pub struct Widget {
    resolver: CityResolver,
    outcome: FetchOutcome,
    allow_override: bool,
}

impl Widget {
    pub fn new(configured_city: Option<&str>, allow_override: bool) -> Self {
        Self {
            resolver: CityResolver::new(configured_city),
            outcome: FetchOutcome::Loading,
            allow_override,
        }
    }

    pub fn city(&self) -> Option<&str> {
        self.resolver.city()
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    /// Resolve the city from the host profile unless already resolved.
    pub async fn resolve_city(&mut self, host: &dyn HostProfile) -> Option<&str> {
        self.resolver.resolve(host).await
    }

    /// User-initiated city override. Returns true when the input survived
    /// trimming and the city changed; the caller then runs a new fetch cycle.
    pub fn set_city(&mut self, input: &str) -> bool {
        let previous = self.resolver.city().map(str::to_string);
        match self.resolver.apply_override(input) {
            Some(city) => previous.as_deref() != Some(city),
            None => false,
        }
    }

    /// Start a fetch cycle for the resolved city: the outcome switches to
    /// `Loading` and the returned ticket tags the in-flight fetch. `None`
    /// while no city is resolved.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let city = self.resolver.city()?.to_string();
        self.outcome = FetchOutcome::Loading;
        debug!(%city, "issuing weather fetch");
        Some(FetchTicket { city })
    }

    /// Apply a finished fetch. Returns false when the ticket belongs to a
    /// superseded city, in which case the displayed outcome is untouched.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<WeatherRecord, FetchError>,
    ) -> bool {
        if self.resolver.city() != Some(ticket.city()) {
            debug!(stale = %ticket.city(), "discarding result for superseded city");
            return false;
        }

        self.outcome = match result {
            Ok(record) => FetchOutcome::Success(record),
            Err(err) => {
                warn!(city = %ticket.city(), error = %err, "weather fetch failed");
                FetchOutcome::Failure(err.to_string())
            }
        };
        true
    }

    /// One full fetch cycle against the given provider.
    pub async fn refresh(&mut self, provider: &dyn WeatherProvider) -> bool {
        let Some(ticket) = self.begin_fetch() else {
            return false;
        };
        let result = provider.current(ticket.city()).await;
        self.complete_fetch(&ticket, result)
    }

    /// Build the display tree for the current outcome.
    pub fn view(&self) -> Node {
        card::build_card(&self.outcome, self.allow_override)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;
    use chrono::Utc;

    fn record_for(city: &str) -> WeatherRecord {
        WeatherRecord {
            temp_f: 72.4,
            temp_c: 22.4,
            feels_like_f: 74.6,
            feels_like_c: 23.7,
            humidity_pct: 48,
            wind_mph: 12.3,
            wind_kph: 19.8,
            description: "sunny".to_string(),
            icon: Icon::Sunny,
            is_day: true,
            location_name: city.to_string(),
            region: String::new(),
            country: String::new(),
            observed_at: Utc::now(),
        }
    }

    #[test]
    fn begin_fetch_requires_a_resolved_city() {
        let mut widget = Widget::new(None, true);
        assert!(widget.begin_fetch().is_none());
    }

    #[test]
    fn stale_success_is_discarded_after_city_change() {
        let mut widget = Widget::new(Some("Austin"), true);
        let ticket_a = widget.begin_fetch().expect("city is resolved");

        assert!(widget.set_city("Paris"));
        let ticket_b = widget.begin_fetch().expect("city is resolved");

        // A's late result must not become the displayed outcome.
        assert!(!widget.complete_fetch(&ticket_a, Ok(record_for("Austin"))));
        assert!(matches!(widget.outcome(), FetchOutcome::Loading));

        assert!(widget.complete_fetch(&ticket_b, Ok(record_for("Paris"))));
        let record = widget.outcome().record().expect("outcome must be success");
        assert_eq!(record.location_name, "Paris");
    }

    #[test]
    fn stale_failure_is_discarded_too() {
        let mut widget = Widget::new(Some("Austin"), true);
        let ticket_a = widget.begin_fetch().expect("city is resolved");

        widget.set_city("Paris");
        let ticket_b = widget.begin_fetch().expect("city is resolved");
        assert!(widget.complete_fetch(&ticket_b, Ok(record_for("Paris"))));

        let stale = FetchError::InvalidResponse("status 500".to_string());
        assert!(!widget.complete_fetch(&ticket_a, Err(stale)));
        let record = widget.outcome().record().expect("outcome must stay success");
        assert_eq!(record.location_name, "Paris");
    }

    #[test]
    fn refetching_the_same_city_is_accepted() {
        let mut widget = Widget::new(Some("Austin"), true);

        let first = widget.begin_fetch().expect("city is resolved");
        assert!(widget.complete_fetch(&first, Ok(record_for("Austin"))));

        let second = widget.begin_fetch().expect("city is resolved");
        assert!(matches!(widget.outcome(), FetchOutcome::Loading));
        assert!(widget.complete_fetch(&second, Ok(record_for("Austin"))));
        let record = widget.outcome().record().expect("outcome must be success");
        assert_eq!(record.location_name, "Austin");
    }

    #[test]
    fn failure_becomes_displayed_reason() {
        let mut widget = Widget::new(Some("Austin"), true);
        let ticket = widget.begin_fetch().expect("city is resolved");

        let err = FetchError::InvalidResponse("status 403".to_string());
        assert!(widget.complete_fetch(&ticket, Err(err)));
        match widget.outcome() {
            FetchOutcome::Failure(reason) => {
                assert!(reason.contains("status 403"));
            }
            other => panic!("expected failure outcome, got {other:?}"),
        }
    }

    #[test]
    fn set_city_reports_whether_anything_changed() {
        let mut widget = Widget::new(Some("Austin"), true);
        assert!(!widget.set_city("   "));
        assert!(!widget.set_city("Austin"));
        assert!(widget.set_city("  Paris  "));
        assert_eq!(widget.city(), Some("Paris"));
    }
}
