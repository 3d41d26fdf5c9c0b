//! Async side of the two screen flows.
//!
//! The UI thread never performs I/O. It sends [`FlowCommand`]s here; each
//! command becomes a tokio task whose outcome travels back to the UI queue as
//! an [`AppEvent`]. The search and location flows share nothing but that
//! queue, so neither can stall the other.

use std::sync::mpsc::Sender;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::geo::GeoClient;
use crate::omdb::{OmdbClient, OmdbError};
use crate::ui::events::AppEvent;

/// Work requested by the UI thread.
#[derive(Debug, Clone)]
pub enum FlowCommand {
    /// Look up `query`; the eventual completion event carries `request_id`.
    Search { request_id: u64, query: String },
    /// Request the one-time position fix.
    AcquireFix,
}

pub type FlowSender = mpsc::Sender<FlowCommand>;

/// Channel depth for UI → flow commands. The UI produces at most one command
/// per keystroke, so a small buffer is plenty.
pub const COMMAND_BUFFER: usize = 16;

/// Spawn the command dispatcher on `runtime`.
///
/// A new search aborts the previous in-flight search task; the request-id
/// guard in the reducer remains the correctness backstop for any response
/// already in the queue.
pub fn spawn(
    runtime: &Runtime,
    mut commands: mpsc::Receiver<FlowCommand>,
    events: Sender<AppEvent>,
    omdb: OmdbClient,
    geo: GeoClient,
) {
    runtime.spawn(async move {
        let mut in_flight: Option<JoinHandle<()>> = None;

        while let Some(command) = commands.recv().await {
            match command {
                FlowCommand::Search { request_id, query } => {
                    if let Some(handle) = in_flight.take() {
                        handle.abort();
                    }
                    let client = omdb.clone();
                    let tx = events.clone();
                    in_flight = Some(tokio::spawn(async move {
                        let event = run_search(&client, request_id, &query).await;
                        let _ = tx.send(event);
                    }));
                }
                FlowCommand::AcquireFix => {
                    let client = geo.clone();
                    let tx = events.clone();
                    tokio::spawn(async move {
                        let event = run_fix(&client).await;
                        let _ = tx.send(event);
                    });
                }
            }
        }
    });
}

async fn run_search(client: &OmdbClient, request_id: u64, query: &str) -> AppEvent {
    tracing::debug!(request_id, query, "search dispatched");
    match client.search(query).await {
        Ok(movie) => {
            tracing::info!(request_id, title = %movie.title, "search hit");
            AppEvent::SearchFound { request_id, movie }
        }
        Err(OmdbError::NotFound { reason }) => {
            tracing::info!(request_id, %reason, "search miss");
            AppEvent::SearchMissed { request_id }
        }
        Err(err) => {
            tracing::error!(request_id, error = %err, "search failed");
            AppEvent::SearchErrored { request_id }
        }
    }
}

async fn run_fix(client: &GeoClient) -> AppEvent {
    match client.current_position().await {
        Ok(coordinate) => {
            tracing::info!(
                latitude = coordinate.latitude,
                longitude = coordinate.longitude,
                "position fix acquired"
            );
            AppEvent::PositionFixed(coordinate)
        }
        Err(err) => {
            tracing::error!(error = %err, "position fix failed");
            AppEvent::PositionFailed
        }
    }
}
