//! Screen lifetime: wire the clients, the flow bridge, and the event loop.

use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;

use crate::config::ConfigStore;
use crate::geo::GeoClient;
use crate::omdb::OmdbClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::flows::{self, COMMAND_BUFFER};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: ConfigStore) -> anyhow::Result<()> {
    let snapshot = config.get();

    // Client construction fails fast, before the terminal is taken over, so
    // a missing API key is an ordinary startup error on stderr.
    let omdb = OmdbClient::new(&snapshot.api).context("metadata client setup failed")?;
    let geo = GeoClient::new(&snapshot.location).context("geolocation client setup failed")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let tick_rate = Duration::from_millis(snapshot.ui.tick_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (flow_tx, flow_rx) = mpsc::channel(COMMAND_BUFFER);
    flows::spawn(&runtime, flow_rx, events.sender(), omdb, geo);

    let mut app = App::new(&snapshot.ui);
    app.set_flow_sender(flow_tx);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::Resize(_, _)) => {
                // Ratatui re-measures on the next draw; nothing to store.
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::SearchFound { request_id, movie }) => {
                app.on_search_found(request_id, movie);
            }
            Ok(AppEvent::SearchMissed { request_id }) => app.on_search_missed(request_id),
            Ok(AppEvent::SearchErrored { request_id }) => app.on_search_errored(request_id),
            Ok(AppEvent::PositionFixed(coordinate)) => app.on_position_fixed(coordinate),
            Ok(AppEvent::PositionFailed) => app.on_position_failed(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
