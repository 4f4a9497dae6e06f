//! Application runtime for hourcast
//!
//! Maps keyboard input to view-state events and carries out the effects
//! returned by [`update`]: spawning fetches and mounting or releasing the
//! chart. All state changes go through [`App::dispatch`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::chart::{build_chart_series, ChartSlot};
use crate::cli::StartupConfig;
use crate::data::all_presets;
use crate::fetcher::Fetcher;
use crate::view_state::{update, DisplayMode, Effect, Event, ViewState};

/// Which text field receives typed characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Keys act as commands
    #[default]
    None,
    Latitude,
    Longitude,
}

impl Focus {
    /// Tab order: latitude → longitude → commands → latitude
    fn next(self) -> Self {
        match self {
            Focus::None => Focus::Latitude,
            Focus::Latitude => Focus::Longitude,
            Focus::Longitude => Focus::None,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::None => Focus::Longitude,
            Focus::Latitude => Focus::None,
            Focus::Longitude => Focus::Latitude,
        }
    }
}

/// Main application struct owning the view state and the chart
pub struct App {
    /// Source of truth for coordinate, forecast, mode and hour
    pub view: ViewState,
    /// The live aggregate chart, if any
    pub chart: ChartSlot,
    /// Field being edited
    pub focus: Focus,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    fetcher: Fetcher,
}

impl App {
    /// Creates an App from startup configuration; call [`App::start`] to
    /// issue the first fetch
    pub fn new(config: &StartupConfig, fetcher: Fetcher) -> Self {
        Self {
            view: ViewState::new(
                config.input.clone(),
                config.display_mode,
                config.selected_hour,
            ),
            chart: ChartSlot::new(),
            focus: Focus::None,
            should_quit: false,
            show_help: false,
            fetcher,
        }
    }

    /// Validates the initial coordinate and fetches it when valid
    pub fn start(&mut self) {
        let effects = self.view.start();
        self.run_effects(effects);
    }

    /// Applies one event and performs the resulting effects
    pub fn dispatch(&mut self, event: Event) {
        let effects = update(&mut self.view, event);
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch(ticket) => self.fetcher.spawn(ticket),
                Effect::MountChart => {
                    if let Some(forecast) = self.view.forecast() {
                        self.chart.mount(build_chart_series(forecast));
                    }
                }
                Effect::ReleaseChart => {
                    self.chart.release();
                }
            }
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `Ctrl+C`: Quit from anywhere
    /// - `Tab`/`Shift+Tab`: Cycle focus between latitude, longitude and commands
    /// - While a field is focused: characters and `Backspace` edit it,
    ///   `Esc`/`Enter` stop editing
    /// - `q` or `Esc`: Quit
    /// - `e`: Edit latitude
    /// - `1`-`3`: Houston, Austin, Dallas presets
    /// - `m`: Toggle display mode
    /// - `Left`/`h`, `Right`/`l`: Previous/next hour (single-hour mode)
    /// - `?`: Toggle help
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match key_event.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Latitude | Focus::Longitude => self.handle_edit_key(key_event),
            Focus::None => self.handle_command_key(key_event),
        }
    }

    fn handle_edit_key(&mut self, key_event: KeyEvent) {
        let mut text = match self.focus {
            Focus::Latitude => self.view.input().latitude.clone(),
            Focus::Longitude => self.view.input().longitude.clone(),
            Focus::None => return,
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = Focus::None;
                return;
            }
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                // Nothing changed, so no change event
                if text.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }

        let event = match self.focus {
            Focus::Latitude => Event::LatitudeChanged(text),
            _ => Event::LongitudeChanged(text),
        };
        self.dispatch(event);
    }

    fn handle_command_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('e') => {
                self.focus = Focus::Latitude;
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as u8 - b'1') as usize;
                if let Some(preset) = all_presets().get(index) {
                    self.dispatch(Event::PresetSelected(preset));
                }
            }
            KeyCode::Char('m') => {
                let mode = self.view.display_mode().toggled();
                self.dispatch(Event::DisplayModeChanged(mode));
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.view.display_mode() == DisplayMode::SingleHour {
                    let hour = self.view.selected_hour().previous();
                    self.dispatch(Event::HourSelected(hour));
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.view.display_mode() == DisplayMode::SingleHour {
                    let hour = self.view.selected_hour().next();
                    self.dispatch(Event::HourSelected(hour));
                }
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }
}
