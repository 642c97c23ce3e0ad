//! Boundary types for the platform hosting the widget.
//!
//! The host supplies the signed-in user's profile and consumes the
//! registration manifest; everything else about the host SDK stays on the
//! host's side of this seam.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ProfileError;
use crate::icon::Icon;

/// Profile of the signed-in user, as far as the widget cares.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    /// Free text, possibly comma-delimited "city, region".
    pub location: Option<String>,
}

/// Host-side accessor for the current user's profile.
#[async_trait]
pub trait HostProfile: Send + Sync {
    async fn user_profile(&self) -> Result<UserProfile, ProfileError>;
}

/// Declarative half of host registration: what the widget is called, which
/// attributes it handles, and the schema the host's configuration editor
/// renders. The registration call itself belongs to the host SDK.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockManifest {
    pub name: String,
    pub label: String,
    pub icon_url: String,
    pub attributes: Vec<String>,
    pub configuration_schema: Value,
    pub ui_schema: Value,
}

impl BlockManifest {
    /// Manifest for the stock weather card.
    pub fn weather_card() -> Self {
        Self {
            name: "weather-card".to_string(),
            label: "Weather Card".to_string(),
            icon_url: Icon::Sunny.url(),
            attributes: vec!["city".to_string(), "allow-city-override".to_string()],
            configuration_schema: json!({
                "properties": {
                    "city": {
                        "type": "string",
                        "title": "City",
                    },
                    "allow-city-override": {
                        "type": "boolean",
                        "title": "Allow city override",
                        "default": true,
                    },
                },
            }),
            ui_schema: json!({
                "city": {
                    "ui:help": "Enter a default city name or leave blank to use the user's location.",
                },
                "allow-city-override": {
                    "ui:widget": "checkbox",
                    "ui:help": "Allow users to click the city name to override the location",
                },
            }),
        }
    }
}
