//! Core library for the weather card widget.
//!
//! This crate defines:
//! - Condition-code to icon mapping
//! - The WeatherAPI.com fetcher behind a provider trait
//! - City resolution (override > configured > profile > default)
//! - The card as a render-library-neutral display tree
//! - The widget controller tying it together, plus config and host boundary
//!
//! It is used by `weathercard-cli`, but any host can embed it by implementing
//! [`HostProfile`] and walking the [`card::Node`] tree.

pub mod card;
pub mod city;
pub mod config;
pub mod error;
pub mod host;
pub mod icon;
pub mod model;
pub mod provider;
pub mod widget;

pub use card::{Action, Gradient, Node, TextRole, build_card};
pub use city::{CityResolver, CityState, DEFAULT_CITY};
pub use config::Config;
pub use error::{FetchError, ProfileError};
pub use host::{BlockManifest, HostProfile, UserProfile};
pub use icon::Icon;
pub use model::{FetchOutcome, WeatherRecord};
pub use provider::{WeatherApiProvider, WeatherProvider};
pub use widget::{FetchTicket, Widget};
