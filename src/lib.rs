//! hourcast library
//!
//! Today's hourly forecast for a coordinate, shown as a temperature and
//! precipitation chart or as the readings of a single hour. The binary is a
//! thin terminal loop around [`app::App`].

pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod fetcher;
pub mod logging;
pub mod ui;
pub mod view_state;
