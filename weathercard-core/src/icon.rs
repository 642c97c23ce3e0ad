use serde::{Deserialize, Serialize};

/// Base URL for the hosted icon assets referenced by [`Icon::url`].
pub const ICON_BASE_URL: &str = "https://eirastaffbase.github.io/weather-time/resources/img";

/// Named condition icon shown on the card.
///
/// Many provider condition codes share one icon; day/night only splits the
/// clear, partly-cloudy and drizzle groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Sunny,
    ClearMoon,
    PartlyCloudySun,
    PartlyCloudyMoon,
    Cloudy,
    DoubleClouds,
    Drizzle,
    DrizzleMoon,
    Rain,
    Snow,
    Thunderstorm,
    Default,
}

impl Icon {
    /// Map a WeatherAPI condition code to an icon. Total: unknown codes fall
    /// back to [`Icon::Default`].
    pub fn for_condition(code: i64, is_day: bool) -> Icon {
        match code {
            1000 => {
                if is_day {
                    Icon::Sunny
                } else {
                    Icon::ClearMoon
                }
            }
            1003 => {
                if is_day {
                    Icon::PartlyCloudySun
                } else {
                    Icon::PartlyCloudyMoon
                }
            }
            1006 => Icon::Cloudy,
            1009 | 1030 | 1135 | 1147 => Icon::DoubleClouds,
            1063 | 1072 | 1150 | 1153 | 1168 | 1171 => {
                if is_day {
                    Icon::Drizzle
                } else {
                    Icon::DrizzleMoon
                }
            }
            1180 | 1183 | 1186 | 1189 | 1192 | 1195 | 1198 | 1201 | 1240 | 1243 | 1246 => {
                Icon::Rain
            }
            1066 | 1069 | 1114 | 1117 | 1204 | 1207 | 1210 | 1213 | 1216 | 1219 | 1222 | 1225
            | 1237 | 1249 | 1252 | 1255 | 1258 | 1261 | 1264 => Icon::Snow,
            1087 | 1273 | 1276 | 1279 | 1282 => Icon::Thunderstorm,
            _ => Icon::Default,
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            Icon::Sunny => "sunny.svg",
            Icon::ClearMoon => "clear-moon.svg",
            Icon::PartlyCloudySun => "partly-cloudy-sun.svg",
            Icon::PartlyCloudyMoon => "partly-cloudy-moon.svg",
            Icon::Cloudy => "cloudy.svg",
            Icon::DoubleClouds => "double-clouds.svg",
            Icon::Drizzle => "drizzle.svg",
            Icon::DrizzleMoon => "drizzle-moon.svg",
            Icon::Rain => "rain.svg",
            Icon::Snow => "snow.svg",
            Icon::Thunderstorm => "thunderstorm.svg",
            Icon::Default => "default.svg",
        }
    }

    /// Full asset URL for the icon image.
    pub fn url(&self) -> String {
        format!("{ICON_BASE_URL}/{}", self.filename())
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.filename())
    }
}
