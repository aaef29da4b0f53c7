use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated city name. Never empty, never padded with whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("City name must not be empty")]
    Empty,
}

impl Query {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Categorical weather label as reported by the provider (`weather[0].main`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
    Other(String),
}

impl Condition {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Drizzle" => Condition::Drizzle,
            "Thunderstorm" => Condition::Thunderstorm,
            "Snow" => Condition::Snow,
            "Mist" => Condition::Mist,
            "Smoke" => Condition::Smoke,
            "Haze" => Condition::Haze,
            "Dust" => Condition::Dust,
            "Fog" => Condition::Fog,
            "Sand" => Condition::Sand,
            "Ash" => Condition::Ash,
            "Squall" => Condition::Squall,
            "Tornado" => Condition::Tornado,
            other => Condition::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Drizzle => "Drizzle",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
            Condition::Mist => "Mist",
            Condition::Smoke => "Smoke",
            Condition::Haze => "Haze",
            Condition::Dust => "Dust",
            Condition::Fog => "Fog",
            Condition::Sand => "Sand",
            Condition::Ash => "Ash",
            Condition::Squall => "Squall",
            Condition::Tornado => "Tornado",
            Condition::Other(label) => label,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Condition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Condition::from_label(&label))
    }
}

/// Current conditions for one successful lookup, already rounded and converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_celsius: i64,
    pub condition_main: Condition,
    pub condition_description: String,
    pub humidity_percent: u8,
    pub wind_speed_kmh: i64,
    pub location_name: Option<String>,
    pub observed_at: Option<DateTime<Utc>>,
}

/// Terminal state of a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(WeatherReading),
    NotFound,
    NetworkError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_surrounding_whitespace() {
        let q = Query::parse("  Lisbon \n").expect("non-empty query");
        assert_eq!(q.as_str(), "Lisbon");
    }

    #[test]
    fn query_rejects_blank_input() {
        assert_eq!(Query::parse(""), Err(QueryError::Empty));
        assert_eq!(Query::parse(" \t\n "), Err(QueryError::Empty));
    }

    #[test]
    fn unknown_condition_label_is_kept() {
        let c = Condition::from_label("Volcano");
        assert_eq!(c, Condition::Other("Volcano".into()));
        assert_eq!(c.label(), "Volcano");
    }

    #[test]
    fn condition_serializes_as_label() {
        let json = serde_json::to_string(&Condition::Thunderstorm).unwrap();
        assert_eq!(json, "\"Thunderstorm\"");

        let back: Condition = serde_json::from_str("\"Fog\"").unwrap();
        assert_eq!(back, Condition::Fog);
    }
}
