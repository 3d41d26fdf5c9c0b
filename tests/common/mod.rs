//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use cinescout::config::UiConfig;
use cinescout::omdb::MovieRecord;
use cinescout::ui::app::App;
use cinescout::ui::flows::FlowCommand;
use cinescout::ui::search::SearchIntent;
use tokio::sync::mpsc;

pub fn make_app() -> App {
    App::new(&UiConfig::default())
}

/// Build an `App` wired to a capturable flow command channel.
pub fn make_app_with_flows() -> (App, mpsc::Receiver<FlowCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = make_app();
    app.set_flow_sender(tx);
    (app, rx)
}

/// Type a query the way the event loop would, one character at a time.
pub fn type_query(app: &mut App, query: &str) {
    for ch in query.chars() {
        app.dispatch_search(SearchIntent::Typed(ch));
    }
}

/// The record used throughout the search tests.
pub fn inception() -> MovieRecord {
    MovieRecord {
        title: "Inception".to_string(),
        year: "2010".to_string(),
        genre: "Sci-Fi".to_string(),
        director: "Christopher Nolan".to_string(),
        awards: "Won 4 Oscars".to_string(),
    }
}

/// JSON body the metadata API returns for the record above.
pub fn inception_json() -> String {
    serde_json::json!({
        "Title": "Inception",
        "Year": "2010",
        "Genre": "Sci-Fi",
        "Director": "Christopher Nolan",
        "Awards": "Won 4 Oscars",
        "Response": "True",
    })
    .to_string()
}
