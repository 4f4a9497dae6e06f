//! Coordinate parsing and validation
//!
//! Turns the raw latitude/longitude text typed by the user into a numeric
//! coordinate. Values are not range checked: anything that parses as a
//! finite number is forwarded to the forecast provider as-is.

use thiserror::Error;

/// Message shown in the error banner when coordinate text is rejected
pub const INVALID_COORDINATE_MESSAGE: &str = "Invalid latitude or longitude value";

/// Error returned when either coordinate field fails to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Latitude text is empty, non-numeric or not finite
    #[error("Invalid latitude or longitude value")]
    InvalidLatitude(String),

    /// Longitude text is empty, non-numeric or not finite
    #[error("Invalid latitude or longitude value")]
    InvalidLongitude(String),
}

/// Raw coordinate text as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateInput {
    /// Latitude text field contents
    pub latitude: String,
    /// Longitude text field contents
    pub longitude: String,
}

impl Default for CoordinateInput {
    fn default() -> Self {
        Self::new("0", "0")
    }
}

impl CoordinateInput {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Validates both fields, see [`parse_coordinate`]
    pub fn validate(&self) -> Result<Coordinate, ValidationError> {
        parse_coordinate(&self.latitude, &self.longitude)
    }
}

/// A validated latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Parses latitude and longitude text into a [`Coordinate`]
///
/// Surrounding whitespace is ignored. Empty text, non-numeric text, `NaN`
/// and infinities are rejected. Both fields must be valid; there is no
/// partial result.
///
/// # Example
///
/// ```
/// use hourcast::data::coordinate::parse_coordinate;
///
/// let coordinate = parse_coordinate("29.7604", "-95.3698").unwrap();
/// assert_eq!(coordinate.latitude, 29.7604);
/// assert!(parse_coordinate("abc", "30").is_err());
/// ```
pub fn parse_coordinate(latitude: &str, longitude: &str) -> Result<Coordinate, ValidationError> {
    let latitude = parse_degrees(latitude)
        .ok_or_else(|| ValidationError::InvalidLatitude(latitude.to_string()))?;
    let longitude = parse_degrees(longitude)
        .ok_or_else(|| ValidationError::InvalidLongitude(longitude.to_string()))?;

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

fn parse_degrees(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
