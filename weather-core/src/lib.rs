//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Query validation and the lookup outcome model
//! - The OpenWeather provider and its HTTP transport seam
//! - Icon mapping and the outcome-to-display render policy
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod icon;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod render;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use icon::Icon;
pub use lookup::WeatherLookup;
pub use model::{Condition, LookupOutcome, Query, QueryError, WeatherReading};
pub use provider::{FetchError, WeatherProvider, provider_from_config};
pub use render::{DisplaySurface, WeatherFields, WeatherView, render};
