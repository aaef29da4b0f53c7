use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::model::{Condition, Query, WeatherReading};

use super::{FetchError, HttpTransport, WeatherProvider};

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

const NOT_FOUND: u16 = 404;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    transport: Arc<dyn HttpTransport>,
}

impl OpenWeatherProvider {
    pub fn with_transport(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self { api_key: api_key.into(), endpoint: endpoint.into(), transport }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_reading(self) -> Result<WeatherReading, FetchError> {
        let primary = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Decode("response contained no weather conditions".into()))?;

        Ok(WeatherReading {
            temperature_celsius: round_half_up(self.main.temp),
            condition_main: Condition::from_label(&primary.main),
            condition_description: capitalize_first(&primary.description),
            humidity_percent: round_half_up(self.main.humidity).clamp(0, 100) as u8,
            wind_speed_kmh: round_half_up(self.wind.speed * 3.6),
            location_name: self.name.filter(|n| !n.is_empty()),
            observed_at: self.dt.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &Query) -> Result<WeatherReading, FetchError> {
        debug!(city = %query, endpoint = %self.endpoint, "requesting current weather");

        let reply = self
            .transport
            .get(
                &self.endpoint,
                &[("q", query.as_str()), ("appid", self.api_key.as_str()), ("units", "metric")],
            )
            .await?;

        if reply.status == NOT_FOUND {
            return Err(FetchError::NotFound);
        }

        if !reply.is_success() {
            return Err(FetchError::Status {
                status: reply.status,
                body: truncate_body(&reply.body),
            });
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&reply.body).map_err(|e| FetchError::Decode(e.to_string()))?;

        parsed.into_reading()
    }
}

/// Nearest integer, halves towards positive infinity.
fn round_half_up(value: f64) -> i64 {
    // `value - floor` is exact, unlike `value + 0.5`.
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
