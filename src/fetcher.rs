//! Background forecast fetching
//!
//! Each fetch runs as a tokio task and reports back over a channel, so the
//! UI loop stays responsive while a request is in flight. Superseded fetches
//! are not cancelled; the view state drops their results on arrival.

use tokio::sync::mpsc;
use tracing::debug;

use crate::data::{ForecastClient, ForecastData, ForecastError};
use crate::view_state::{Event, FetchTicket};

/// Message sent from a finished fetch task to the UI loop
#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: Result<ForecastData, ForecastError>,
}

impl From<FetchCompletion> for Event {
    fn from(completion: FetchCompletion) -> Self {
        Event::FetchCompleted {
            ticket: completion.ticket,
            result: completion.result,
        }
    }
}

/// Spawns fetch tasks that report to a single receiver
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: ForecastClient,
    sender: mpsc::UnboundedSender<FetchCompletion>,
}

impl Fetcher {
    /// Creates a fetcher and the receiver its completions arrive on
    pub fn new(client: ForecastClient) -> (Self, mpsc::UnboundedReceiver<FetchCompletion>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { client, sender }, receiver)
    }

    /// Starts the fetch for `ticket` on the current runtime
    pub fn spawn(&self, ticket: FetchTicket) {
        let client = self.client.clone();
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let result = client.fetch_forecast(ticket.coordinate).await;
            debug!(ticket = ticket.id, ok = result.is_ok(), "fetch finished");
            // The receiver is gone only when the UI loop has exited
            let _ = sender.send(FetchCompletion { ticket, result });
        });
    }
}

/// Checks for a finished fetch without blocking
///
/// # Returns
/// * `Some(FetchCompletion)` if a fetch has finished
/// * `None` if nothing is pending
pub fn try_recv(
    receiver: &mut mpsc::UnboundedReceiver<FetchCompletion>,
) -> Option<FetchCompletion> {
    receiver.try_recv().ok()
}
