//! Mapping from a lookup outcome to what the display shows.
//!
//! [`WeatherView::from_outcome`] is pure; [`render`] applies a view to any
//! [`DisplaySurface`] the caller hands in.

use crate::{
    icon::Icon,
    model::{LookupOutcome, WeatherReading},
};

pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Sorry, location not found!";

pub const NETWORK_ERROR_MESSAGE: &str =
    "We're having trouble retrieving the weather right now. Please try again later.";

/// Display-ready strings for the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherFields {
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind_speed: String,
    pub icon: Icon,
    pub icon_path: String,
    pub icon_alt: String,
    pub location: Option<String>,
    pub observed: Option<String>,
}

impl From<&WeatherReading> for WeatherFields {
    fn from(reading: &WeatherReading) -> Self {
        let icon = Icon::for_condition(&reading.condition_main);

        Self {
            temperature: reading.temperature_celsius.to_string(),
            description: reading.condition_description.clone(),
            humidity: format!("{}%", reading.humidity_percent),
            wind_speed: format!("{} km/h", reading.wind_speed_kmh),
            icon,
            icon_path: icon.asset_path(),
            icon_alt: format!("{} weather icon", reading.condition_main),
            location: reading.location_name.clone(),
            observed: reading.observed_at.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherView {
    Weather(WeatherFields),
    NotFound { message: &'static str },
}

impl WeatherView {
    pub fn from_outcome(outcome: &LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found(reading) => WeatherView::Weather(reading.into()),
            LookupOutcome::NotFound => WeatherView::NotFound { message: DEFAULT_NOT_FOUND_MESSAGE },
            LookupOutcome::NetworkError(_) => {
                WeatherView::NotFound { message: NETWORK_ERROR_MESSAGE }
            }
        }
    }

    pub fn weather_visible(&self) -> bool {
        matches!(self, WeatherView::Weather(_))
    }

    pub fn not_found_visible(&self) -> bool {
        !self.weather_visible()
    }

    /// Text of the not-found panel; the default text while weather is shown.
    pub fn message(&self) -> &'static str {
        match self {
            WeatherView::Weather(_) => DEFAULT_NOT_FOUND_MESSAGE,
            WeatherView::NotFound { message } => *message,
        }
    }
}

/// The controls a lookup result is drawn onto.
pub trait DisplaySurface {
    fn set_weather_visible(&mut self, visible: bool);
    fn set_not_found_visible(&mut self, visible: bool);
    fn set_not_found_message(&mut self, message: &str);
    fn show_fields(&mut self, fields: &WeatherFields);
}

pub fn render<S: DisplaySurface + ?Sized>(outcome: &LookupOutcome, surface: &mut S) {
    let view = WeatherView::from_outcome(outcome);

    surface.set_not_found_message(view.message());
    surface.set_not_found_visible(view.not_found_visible());
    surface.set_weather_visible(view.weather_visible());

    if let WeatherView::Weather(fields) = &view {
        surface.show_fields(fields);
    }
}
