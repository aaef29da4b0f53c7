use crate::model::Condition;

/// Display icon selected from a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Clear,
    Cloud,
    Rain,
    Mist,
    Snow,
}

impl Icon {
    /// Never fails: anything without a dedicated icon is shown as `Clear`.
    pub fn for_condition(condition: &Condition) -> Self {
        match condition {
            Condition::Clouds => Icon::Cloud,
            Condition::Clear => Icon::Clear,
            Condition::Rain | Condition::Drizzle | Condition::Thunderstorm => Icon::Rain,
            Condition::Mist
            | Condition::Smoke
            | Condition::Haze
            | Condition::Dust
            | Condition::Fog
            | Condition::Sand
            | Condition::Ash
            | Condition::Squall
            | Condition::Tornado => Icon::Mist,
            Condition::Snow => Icon::Snow,
            Condition::Other(_) => Icon::Clear,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Icon::Clear => "clear",
            Icon::Cloud => "cloud",
            Icon::Rain => "rain",
            Icon::Mist => "mist",
            Icon::Snow => "snow",
        }
    }

    pub fn asset_path(&self) -> String {
        format!("assets/{}.png", self.key())
    }

    /// Terminal stand-in for the image asset.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Clear => "☀",
            Icon::Cloud => "☁",
            Icon::Rain => "🌧",
            Icon::Mist => "🌫",
            Icon::Snow => "❄",
        }
    }
}
