use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use weathercard_core::{
    Action, BlockManifest, Config, HostProfile, Node, ProfileError, UserProfile,
    WeatherApiProvider, Widget,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercard", version, about = "Weather card in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key used for fetches.
    Configure,

    /// Fetch current conditions and render the card.
    Show {
        /// City to show; defaults to the configured city, then the profile location.
        city: Option<String>,

        /// Prompt for a city override after rendering.
        #[arg(long)]
        edit: bool,
    },

    /// Print the host registration manifest as JSON.
    Manifest,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, edit } => show(city, edit).await,
            Command::Manifest => manifest(),
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn manifest() -> Result<()> {
    let manifest = BlockManifest::weather_card();
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

async fn show(city: Option<String>, edit: bool) -> Result<()> {
    let config = Config::load()?;
    let provider = WeatherApiProvider::new(config.api_key()?.to_string());

    let configured = city.or_else(|| config.city.clone());
    let mut widget = Widget::new(configured.as_deref(), config.allow_city_override);
    widget.resolve_city(&EnvProfile).await;

    widget.refresh(&provider).await;
    render::print_card(&widget.view());
    print_observation_footer(&widget);

    if edit {
        if let Some(seed) = override_seed(&widget.view()) {
            let entry = Text::new("Enter a city name to override the default location")
                .with_initial_value(&seed)
                .prompt()?;
            if widget.set_city(&entry) {
                widget.refresh(&provider).await;
                render::print_card(&widget.view());
                print_observation_footer(&widget);
            }
        }
    }

    Ok(())
}

fn print_observation_footer(widget: &Widget) {
    if let Some(record) = widget.outcome().record() {
        let local = record.observed_at.with_timezone(&chrono::Local);
        println!("  observed {}", local.format("%H:%M"));
    }
}

/// Seed of the override prompt, taken from the card's own action node.
fn override_seed(node: &Node) -> Option<String> {
    match node {
        Node::Panel { children, .. } => children.iter().find_map(override_seed),
        Node::Text {
            action: Some(Action::PromptCityOverride { seed }),
            ..
        } => Some(seed.clone()),
        _ => None,
    }
}

/// Profile source for the terminal host: the `WEATHERCARD_LOCATION`
/// environment variable stands in for a platform user profile.
struct EnvProfile;

#[async_trait::async_trait]
impl HostProfile for EnvProfile {
    async fn user_profile(&self) -> Result<UserProfile, ProfileError> {
        match std::env::var("WEATHERCARD_LOCATION") {
            Ok(location) if !location.trim().is_empty() => Ok(UserProfile {
                location: Some(location),
            }),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(UserProfile::default()),
            Err(err) => Err(ProfileError::Unavailable(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weathercard_core::{FetchOutcome, Icon, TextRole, WeatherRecord, build_card};

    #[test]
    fn override_seed_comes_from_the_city_node() {
        let record = WeatherRecord {
            temp_f: 70.0,
            temp_c: 21.1,
            feels_like_f: 70.0,
            feels_like_c: 21.1,
            humidity_pct: 50,
            wind_mph: 5.0,
            wind_kph: 8.0,
            description: "sunny".to_string(),
            icon: Icon::Sunny,
            is_day: true,
            location_name: "Paris".to_string(),
            region: String::new(),
            country: "France".to_string(),
            observed_at: chrono::Utc::now(),
        };

        let card = build_card(&FetchOutcome::Success(record), true);
        assert_eq!(override_seed(&card).as_deref(), Some("Paris"));

        let plain = Node::Text {
            content: "Paris".to_string(),
            role: TextRole::CityName,
            action: None,
        };
        assert_eq!(override_seed(&plain), None);
    }
}
