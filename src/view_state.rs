//! View state and its transition function
//!
//! [`ViewState`] is the single mutable source of truth for a session. It is
//! changed only by [`update`], which consumes one [`Event`] at a time and
//! returns the [`Effect`]s the runtime must carry out (start a fetch, mount
//! or release the chart). Fetching is triggered by coordinate changes only.
//!
//! Every fetch is stamped with a [`FetchTicket`]. A completion whose ticket
//! is not the latest one issued is stale and is dropped without touching the
//! state.

use tracing::{debug, info, warn};

use crate::data::{
    Coordinate, CoordinateInput, ForecastData, ForecastError, Hour, HourReading, Preset,
    ValidationError,
};

/// How the forecast is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// All 24 hours as a chart
    #[default]
    Aggregate,
    /// Scalar readouts for the selected hour
    SingleHour,
}

impl DisplayMode {
    /// Short name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Aggregate => "all",
            DisplayMode::SingleHour => "one",
        }
    }

    /// Label shown in the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Aggregate => "All",
            DisplayMode::SingleHour => "One",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Aggregate => DisplayMode::SingleHour,
            DisplayMode::SingleHour => DisplayMode::Aggregate,
        }
    }

    /// Parses `all`/`aggregate` or `one`/`single`, case-insensitively
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "aggregate" => Some(DisplayMode::Aggregate),
            "one" | "single" => Some(DisplayMode::SingleHour),
            _ => None,
        }
    }
}

/// Origin of the message in the error banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Fetch,
}

/// User-visible error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorBanner {
    fn validation(err: &ValidationError) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: err.to_string(),
        }
    }

    fn fetch(err: &ForecastError) -> Self {
        Self {
            kind: ErrorKind::Fetch,
            message: err.user_message().to_string(),
        }
    }
}

/// Where the session is in the validate → fetch cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Coordinate text does not parse; nothing is being fetched
    NoCoordinate,
    /// Valid coordinate, no fetch issued yet
    Idle(Coordinate),
    /// A fetch for this coordinate is in flight
    Loading(Coordinate),
    /// The latest fetch for this coordinate succeeded
    Loaded(Coordinate),
    /// The latest fetch for this coordinate failed
    Errored(Coordinate),
}

/// Stamp identifying one issued fetch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    pub id: u64,
    pub coordinate: Coordinate,
}

/// Inputs to the state machine
#[derive(Debug)]
pub enum Event {
    /// Latitude text field now holds this text
    LatitudeChanged(String),
    /// Longitude text field now holds this text
    LongitudeChanged(String),
    /// Both fields set from a preset in one change
    PresetSelected(&'static Preset),
    /// A fetch finished
    FetchCompleted {
        ticket: FetchTicket,
        result: Result<ForecastData, ForecastError>,
    },
    DisplayModeChanged(DisplayMode),
    HourSelected(Hour),
}

/// Work the runtime performs after a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Start a forecast request
    Fetch(FetchTicket),
    /// Rebuild the chart from the current forecast, replacing any old one
    MountChart,
    /// Tear down the chart
    ReleaseChart,
}

/// The whole state of one session
#[derive(Debug)]
pub struct ViewState {
    input: CoordinateInput,
    coordinate: Option<Coordinate>,
    phase: Phase,
    forecast: Option<ForecastData>,
    error: Option<ErrorBanner>,
    display_mode: DisplayMode,
    selected_hour: Hour,
    /// Ticket id of the only fetch whose result will be accepted
    pending: Option<u64>,
    next_ticket: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(CoordinateInput::default(), DisplayMode::default(), Hour::MIN)
    }
}

impl ViewState {
    pub fn new(input: CoordinateInput, display_mode: DisplayMode, selected_hour: Hour) -> Self {
        let coordinate = input.validate().ok();
        let phase = coordinate.map_or(Phase::NoCoordinate, Phase::Idle);
        Self {
            input,
            coordinate,
            phase,
            forecast: None,
            error: None,
            display_mode,
            selected_hour,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Validates the initial coordinate text, issuing the first fetch when
    /// it is valid
    pub fn start(&mut self) -> Vec<Effect> {
        self.coordinate_changed()
    }

    pub fn input(&self) -> &CoordinateInput {
        &self.input
    }

    /// Coordinate the latest change validated to, if any
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last successfully fetched forecast; kept through later errors
    pub fn forecast(&self) -> Option<&ForecastData> {
        self.forecast.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorBanner> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|banner| banner.message.as_str())
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn selected_hour(&self) -> Hour {
        self.selected_hour
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// Readouts for the single-hour panel; `None` without a forecast
    pub fn current_reading(&self) -> Option<HourReading> {
        self.forecast
            .as_ref()
            .map(|forecast| forecast.reading(self.selected_hour))
    }

    fn coordinate_changed(&mut self) -> Vec<Effect> {
        match self.input.validate() {
            Err(err) => {
                info!(
                    latitude = %self.input.latitude,
                    longitude = %self.input.longitude,
                    "coordinate rejected"
                );
                self.coordinate = None;
                self.phase = Phase::NoCoordinate;
                self.pending = None;
                self.error = Some(ErrorBanner::validation(&err));
                Vec::new()
            }
            Ok(coordinate) => {
                let ticket = FetchTicket {
                    id: self.next_ticket,
                    coordinate,
                };
                self.next_ticket += 1;
                self.coordinate = Some(coordinate);
                self.phase = Phase::Loading(coordinate);
                self.pending = Some(ticket.id);
                info!(ticket = ticket.id, %coordinate, "fetch issued");
                vec![Effect::Fetch(ticket)]
            }
        }
    }

    fn fetch_completed(
        &mut self,
        ticket: FetchTicket,
        result: Result<ForecastData, ForecastError>,
    ) -> Vec<Effect> {
        let is_current =
            self.pending == Some(ticket.id) && self.coordinate == Some(ticket.coordinate);
        if !is_current {
            debug!(
                ticket = ticket.id,
                coordinate = %ticket.coordinate,
                "discarding stale forecast"
            );
            return Vec::new();
        }
        self.pending = None;

        match result {
            Ok(forecast) => {
                info!(ticket = ticket.id, "forecast loaded");
                self.forecast = Some(forecast);
                self.error = None;
                self.phase = Phase::Loaded(ticket.coordinate);
                if self.display_mode == DisplayMode::Aggregate {
                    vec![Effect::MountChart]
                } else {
                    Vec::new()
                }
            }
            Err(err) => {
                warn!(ticket = ticket.id, error = %err, "forecast fetch failed");
                self.error = Some(ErrorBanner::fetch(&err));
                self.phase = Phase::Errored(ticket.coordinate);
                Vec::new()
            }
        }
    }

    fn display_mode_changed(&mut self, mode: DisplayMode) -> Vec<Effect> {
        if mode == self.display_mode {
            return Vec::new();
        }
        self.display_mode = mode;
        match mode {
            DisplayMode::Aggregate if self.forecast.is_some() => vec![Effect::MountChart],
            DisplayMode::Aggregate => Vec::new(),
            DisplayMode::SingleHour => vec![Effect::ReleaseChart],
        }
    }
}

/// Applies one event to the state and returns the effects to perform
pub fn update(state: &mut ViewState, event: Event) -> Vec<Effect> {
    match event {
        Event::LatitudeChanged(text) => {
            state.input.latitude = text;
            state.coordinate_changed()
        }
        Event::LongitudeChanged(text) => {
            state.input.longitude = text;
            state.coordinate_changed()
        }
        Event::PresetSelected(preset) => {
            state.input = preset.input();
            state.coordinate_changed()
        }
        Event::FetchCompleted { ticket, result } => state.fetch_completed(ticket, result),
        Event::DisplayModeChanged(mode) => state.display_mode_changed(mode),
        Event::HourSelected(hour) => {
            state.selected_hour = hour;
            Vec::new()
        }
    }
}
