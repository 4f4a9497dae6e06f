//! Core data models for hourcast
//!
//! Coordinate validation, preset locations, the hourly forecast model and
//! the Open-Meteo client that produces it.

pub mod client;
pub mod coordinate;
pub mod forecast;
pub mod preset;

pub use client::{ForecastClient, ForecastError, FETCH_FAILED_MESSAGE, OPEN_METEO_BASE_URL};
pub use coordinate::{
    parse_coordinate, Coordinate, CoordinateInput, ValidationError, INVALID_COORDINATE_MESSAGE,
};
pub use forecast::{ForecastData, Hour, HourReading, HOURS_PER_DAY};
pub use preset::{all_presets, get_preset_by_id, Preset};
