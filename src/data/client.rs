//! Open-Meteo hourly forecast client
//!
//! Fetches today's 24 hourly points for a coordinate and parses them into a
//! [`ForecastData`]. Any transport, status or payload problem becomes a
//! [`ForecastError`]; nothing is defaulted.

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::coordinate::Coordinate;
use super::forecast::{ForecastData, SeriesLengthError, HOURS_PER_DAY};

/// Base URL for the Open-Meteo API
pub const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Timezone the provider uses to define "today"
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

/// Hourly variables requested from the provider, in request order
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,surface_pressure,visibility";

/// Message shown in the error banner for any fetch failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum ForecastError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned HTTP {0}")]
    Status(u16),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),

    /// An hourly series did not cover the whole day
    #[error("Incomplete hourly series: {0}")]
    SeriesLength(#[from] SeriesLengthError),

    /// Invalid time format in response
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

impl ForecastError {
    /// Text for the error banner; technical detail stays in the logs
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Client for fetching hourly forecasts from Open-Meteo
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Create a new ForecastClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: OPEN_METEO_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request URL for a coordinate
    pub fn forecast_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}?latitude={}&longitude={}&hourly={}&timezone={}&forecast_days=1",
            self.base_url,
            query_number(coordinate.latitude),
            query_number(coordinate.longitude),
            HOURLY_FIELDS,
            urlencoding::encode(DEFAULT_TIMEZONE)
        )
    }

    /// Fetch today's hourly forecast for the given coordinate
    ///
    /// # Returns
    /// * `Ok(ForecastData)` - 24 hourly points for the location
    /// * `Err(ForecastError)` - If the request, status or payload is unusable
    pub async fn fetch_forecast(
        &self,
        coordinate: Coordinate,
    ) -> Result<ForecastData, ForecastError> {
        let url = self.forecast_url(coordinate);
        debug!(%url, "requesting forecast");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), %coordinate, "forecast request rejected");
            return Err(ForecastError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let api_response: OpenMeteoResponse = serde_json::from_str(&text)?;

        parse_response(api_response)
    }
}

/// Shortest round-trip form, with `-0` written as `0`
fn query_number(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Parse the Open-Meteo API response into a ForecastData struct
fn parse_response(response: OpenMeteoResponse) -> Result<ForecastData, ForecastError> {
    let hourly = response
        .hourly
        .ok_or_else(|| ForecastError::MissingField("hourly".to_string()))?;

    let temperature = required_series("temperature_2m", hourly.temperature_2m)?;
    let precipitation =
        required_series("precipitation_probability", hourly.precipitation_probability)?;
    let pressure = required_series("surface_pressure", hourly.surface_pressure)?;
    let visibility_m = required_series("visibility", hourly.visibility)?;
    let visibility_km = visibility_m.iter().map(|m| m / 1000.0).collect();

    let forecast = ForecastData::new(temperature, precipitation, pressure, visibility_km)?;

    match hourly.time.as_deref() {
        None => Ok(forecast),
        Some(times) if times.len() != HOURS_PER_DAY => Err(SeriesLengthError {
            field: "time",
            expected: HOURS_PER_DAY,
            actual: times.len(),
        }
        .into()),
        Some(times) => {
            let first = parse_datetime(&times[0])?;
            Ok(forecast.with_date(first.date()))
        }
    }
}

/// Unwraps a series, rejecting a missing array or any `null` entry
fn required_series(
    field: &str,
    values: Option<Vec<Option<f64>>>,
) -> Result<Vec<f64>, ForecastError> {
    let values = values.ok_or_else(|| ForecastError::MissingField(format!("hourly.{}", field)))?;

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            value.ok_or_else(|| ForecastError::MissingField(format!("hourly.{}[{}]", field, i)))
        })
        .collect()
}

/// Parse a datetime string in ISO 8601 format (e.g., "2024-07-15T05:00")
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, ForecastError> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M")
        .map_err(|_| ForecastError::InvalidTimeFormat(datetime_str.to_string()))
}

/// Open-Meteo API response structure
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: Option<HourlyWeather>,
}

/// Hourly weather data from Open-Meteo
#[derive(Debug, Deserialize)]
struct HourlyWeather {
    time: Option<Vec<String>>,
    temperature_2m: Option<Vec<Option<f64>>>,
    precipitation_probability: Option<Vec<Option<f64>>>,
    surface_pressure: Option<Vec<Option<f64>>>,
    visibility: Option<Vec<Option<f64>>>,
}
