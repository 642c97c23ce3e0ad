//! Builds the card as a tree of typed display nodes.
//!
//! The tree is independent of any rendering library; hosts walk it and map
//! nodes onto whatever they draw with. Everything here is a pure function of
//! the fetch outcome.

use crate::model::{FetchOutcome, WeatherRecord};

/// Background gradient of the card panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    /// Bright blue, daytime with dry skies.
    Day,
    /// Dark slate, daytime with wet or stormy conditions.
    Storm,
    /// Dark navy, any nighttime conditions.
    Night,
}

impl Gradient {
    /// Pure function of the day flag and the condition description.
    pub fn for_conditions(is_day: bool, description: &str) -> Gradient {
        if !is_day {
            return Gradient::Night;
        }
        let desc = description.to_lowercase();
        if ["rain", "shower", "drizzle", "thunder"]
            .iter()
            .any(|kw| desc.contains(kw))
        {
            return Gradient::Storm;
        }
        Gradient::Day
    }

    /// CSS value for hosts that render to HTML.
    pub fn css(&self) -> &'static str {
        match self {
            Gradient::Day => "linear-gradient(160deg, #89CFF0 0%, #6BC7FF 100%)",
            Gradient::Storm => "linear-gradient(160deg, #455a64 0%, #37474f 100%)",
            Gradient::Night => "linear-gradient(160deg, #2C3E50 0%, #243B55 100%)",
        }
    }
}

/// What a text node is, so hosts can size and weight it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    CityName,
    Temperature,
    Description,
    Message,
}

/// Interaction a host should wire up for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a text prompt seeded with the current location name; a non-empty
    /// trimmed entry is reported back as a city override.
    PromptCityOverride { seed: String },
}

/// One node of the display tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Panel {
        gradient: Gradient,
        children: Vec<Node>,
    },
    Text {
        content: String,
        role: TextRole,
        action: Option<Action>,
    },
    Image {
        url: String,
        alt: String,
    },
    Divider,
    Row(Vec<Node>),
    /// Captioned value in the details row, e.g. "Wind" / "12.3" / "mph".
    Cell {
        caption: String,
        value: String,
        unit: String,
    },
}

impl Node {
    fn text(content: impl Into<String>, role: TextRole) -> Node {
        Node::Text {
            content: content.into(),
            role,
            action: None,
        }
    }
}

/// Build the card for the given outcome.
///
/// `allow_override` controls whether the city name carries the override
/// action; the tree is otherwise identical.
pub fn build_card(outcome: &FetchOutcome, allow_override: bool) -> Node {
    match outcome {
        FetchOutcome::Loading => Node::Panel {
            // Conditions are unknown while loading, so style as a clear day.
            gradient: Gradient::for_conditions(true, ""),
            children: vec![Node::text("Loading weather …", TextRole::Message)],
        },
        FetchOutcome::Failure(reason) => {
            let message = if reason.is_empty() { "No data" } else { reason.as_str() };
            Node::Panel {
                gradient: Gradient::for_conditions(false, ""),
                children: vec![Node::text(message, TextRole::Message)],
            }
        }
        FetchOutcome::Success(record) => success_card(record, allow_override),
    }
}

fn success_card(record: &WeatherRecord, allow_override: bool) -> Node {
    let action = allow_override.then(|| Action::PromptCityOverride {
        seed: record.location_name.clone(),
    });

    Node::Panel {
        gradient: Gradient::for_conditions(record.is_day, &record.description),
        children: vec![
            Node::Text {
                content: record.location_name.clone(),
                role: TextRole::CityName,
                action,
            },
            Node::Image {
                url: record.icon.url(),
                alt: record.description.clone(),
            },
            Node::text(format!("{}°F", record.temp_f.round()), TextRole::Temperature),
            Node::text(record.description.clone(), TextRole::Description),
            Node::Divider,
            Node::Row(vec![
                Node::Cell {
                    caption: "Wind".to_string(),
                    value: format!("{:.1}", record.wind_mph),
                    unit: "mph".to_string(),
                },
                Node::Cell {
                    caption: "Humidity".to_string(),
                    value: record.humidity_pct.to_string(),
                    unit: "%".to_string(),
                },
                Node::Cell {
                    caption: "Feels like".to_string(),
                    value: format!("{}", record.feels_like_f.round()),
                    unit: "°F".to_string(),
                },
            ]),
        ],
    }
}
