//! hourcast - today's hourly forecast in the terminal
//!
//! Type a latitude and longitude (or pick a preset) and the forecast for the
//! day is fetched from Open-Meteo and drawn as a chart or as a single hour.

use std::io;
use std::panic;
use std::process;

use clap::Parser;
use crossterm::{
    event::{Event as TermEvent, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use hourcast::app::App;
use hourcast::cli::{Cli, StartupConfig};
use hourcast::data::ForecastClient;
use hourcast::fetcher::{self, FetchCompletion, Fetcher};
use hourcast::{logging, ui};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Main event loop: redraw, then wait for a key or a finished fetch
async fn run(
    terminal: &mut Tui,
    app: &mut App,
    completions: &mut UnboundedReceiver<FetchCompletion>,
) -> io::Result<()> {
    let mut events = EventStream::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(completion) = completions.recv() => {
                app.dispatch(completion.into());
                // Apply everything that finished meanwhile before redrawing
                while let Some(completion) = fetcher::try_recv(completions) {
                    app.dispatch(completion.into());
                }
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    if config.log_enabled {
        let path = logging::resolve_log_path(config.log_file.as_deref())?;
        logging::init(&path)?;
    }
    info!(base_url = %config.base_url, "starting hourcast");

    let client = ForecastClient::new().with_base_url(config.base_url.clone());
    let (fetcher, mut completions) = Fetcher::new(client);
    let mut app = App::new(&config, fetcher);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start();
    let result = run(&mut terminal, &mut app, &mut completions).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = &result {
        error!(error = %e, "terminal event loop failed");
    }
    info!("exiting");
    Ok(result?)
}
