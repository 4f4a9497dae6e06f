//! Preset locations
//!
//! Each preset fills both coordinate fields with fixed literal text, exactly
//! as if the user had typed it.

use super::coordinate::CoordinateInput;

/// A named location with fixed coordinate text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Identifier used on the command line
    pub id: &'static str,
    /// Human-readable city name
    pub name: &'static str,
    /// Latitude text assigned to the latitude field
    pub latitude: &'static str,
    /// Longitude text assigned to the longitude field
    pub longitude: &'static str,
}

impl Preset {
    /// The coordinate text this preset assigns
    pub fn input(&self) -> CoordinateInput {
        CoordinateInput::new(self.latitude, self.longitude)
    }
}

/// Static array of the preset cities, in key order (`1`, `2`, `3`)
pub static PRESETS: [Preset; 3] = [
    Preset {
        id: "houston",
        name: "Houston",
        latitude: "29.7604",
        longitude: "-95.3698",
    },
    Preset {
        id: "austin",
        name: "Austin",
        latitude: "30.2672",
        longitude: "-97.7431",
    },
    Preset {
        id: "dallas",
        name: "Dallas",
        latitude: "32.7767",
        longitude: "-96.7970",
    },
];

/// Get a preset by its ID, case-insensitively
///
/// # Example
///
/// ```
/// use hourcast::data::preset::get_preset_by_id;
///
/// let preset = get_preset_by_id("Dallas").unwrap();
/// assert_eq!(preset.latitude, "32.7767");
/// ```
pub fn get_preset_by_id(id: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.id.eq_ignore_ascii_case(id.trim()))
}

/// Get all presets
pub fn all_presets() -> &'static [Preset] {
    &PRESETS
}
