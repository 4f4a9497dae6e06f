//! Hourly forecast data model
//!
//! A [`ForecastData`] always holds exactly [`HOURS_PER_DAY`] values per
//! series, so indexing by an [`Hour`] can never go out of bounds.

use chrono::NaiveDate;

/// Number of hourly points in a single-day forecast
pub const HOURS_PER_DAY: usize = 24;

/// Hour of the provider-local day, always in `0..=23`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// First hour of the day
    pub const MIN: Hour = Hour(0);
    /// Last hour of the day
    pub const MAX: Hour = Hour((HOURS_PER_DAY - 1) as u8);

    /// Returns `None` when `value` is not a valid hour of the day
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < HOURS_PER_DAY).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Next hour, wrapping from 23 to 0
    pub fn next(self) -> Self {
        Self((self.0 + 1) % HOURS_PER_DAY as u8)
    }

    /// Previous hour, wrapping from 0 to 23
    pub fn previous(self) -> Self {
        if self.0 == 0 {
            Self::MAX
        } else {
            Self(self.0 - 1)
        }
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A series did not contain one value per hour of the day
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} has {actual} values, expected {expected}")]
pub struct SeriesLengthError {
    pub field: &'static str,
    pub expected: usize,
    pub actual: usize,
}

/// Single-day hourly forecast, index-aligned by hour of day
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastData {
    /// Provider-local date the forecast covers, when reported
    date: Option<NaiveDate>,
    /// Air temperature at 2 m in °C
    temperature_c: Vec<f64>,
    /// Precipitation probability in percent
    precipitation_probability_pct: Vec<f64>,
    /// Surface pressure in hPa
    surface_pressure_hpa: Vec<f64>,
    /// Visibility in km
    visibility_km: Vec<f64>,
}

impl ForecastData {
    /// Builds a forecast, rejecting any series that is not 24 values long
    pub fn new(
        temperature_c: Vec<f64>,
        precipitation_probability_pct: Vec<f64>,
        surface_pressure_hpa: Vec<f64>,
        visibility_km: Vec<f64>,
    ) -> Result<Self, SeriesLengthError> {
        check_length("temperature_2m", &temperature_c)?;
        check_length("precipitation_probability", &precipitation_probability_pct)?;
        check_length("surface_pressure", &surface_pressure_hpa)?;
        check_length("visibility", &visibility_km)?;

        Ok(Self {
            date: None,
            temperature_c,
            precipitation_probability_pct,
            surface_pressure_hpa,
            visibility_km,
        })
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn temperature_c(&self) -> &[f64] {
        &self.temperature_c
    }

    pub fn precipitation_probability_pct(&self) -> &[f64] {
        &self.precipitation_probability_pct
    }

    pub fn surface_pressure_hpa(&self) -> &[f64] {
        &self.surface_pressure_hpa
    }

    pub fn visibility_km(&self) -> &[f64] {
        &self.visibility_km
    }

    /// The four readouts for one hour
    pub fn reading(&self, hour: Hour) -> HourReading {
        let i = hour.index();
        HourReading {
            hour,
            temperature_c: self.temperature_c[i],
            precipitation_probability_pct: self.precipitation_probability_pct[i],
            surface_pressure_hpa: self.surface_pressure_hpa[i],
            visibility_km: self.visibility_km[i],
        }
    }
}

fn check_length(field: &'static str, values: &[f64]) -> Result<(), SeriesLengthError> {
    if values.len() == HOURS_PER_DAY {
        Ok(())
    } else {
        Err(SeriesLengthError {
            field,
            expected: HOURS_PER_DAY,
            actual: values.len(),
        })
    }
}

/// Scalar values for one hour, shown in single-hour mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourReading {
    pub hour: Hour,
    pub temperature_c: f64,
    pub precipitation_probability_pct: f64,
    pub surface_pressure_hpa: f64,
    pub visibility_km: f64,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Forecast whose values encode their series and hour, e.g. temperature
    /// at hour 5 is `5.0 + offset`
    pub fn forecast(offset: f64) -> ForecastData {
        let series = |base: f64| -> Vec<f64> {
            (0..HOURS_PER_DAY)
                .map(|h| base + h as f64 + offset)
                .collect()
        };
        ForecastData::new(series(0.0), series(100.0), series(1000.0), series(20.0))
            .expect("fixture series have 24 values")
    }
}
