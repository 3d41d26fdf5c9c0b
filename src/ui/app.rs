use crate::config::UiConfig;
use crate::geo::Coordinate;
use crate::omdb::MovieRecord;
use crate::ui::flows::{FlowCommand, FlowSender};
use crate::ui::location::{LocationIntent, LocationReducer, LocationState};
use crate::ui::map::MapSpan;
use crate::ui::mvi::Reducer;
use crate::ui::notice::{NoticeIntent, NoticeLevel, NoticeReducer, NoticeState};
use crate::ui::search::{SearchIntent, SearchPhase, SearchReducer, SearchState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The screen instance.
///
/// Sole owner of the three state records. Everything here runs on the UI
/// thread; flow completions arrive as method calls from the event loop, and
/// outbound work leaves through the flow command channel.
pub struct App {
    should_quit: bool,
    search: SearchState,
    location: LocationState,
    notice: NoticeState,
    /// Monotonic tag for search requests; completions that don't match the
    /// latest issued id are discarded by the reducer.
    next_request_id: u64,
    flow_sender: Option<FlowSender>,
    notice_ttl_ticks: u16,
    map_span: MapSpan,
}

impl App {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            search: SearchState::default(),
            location: LocationState::default(),
            notice: NoticeState::default(),
            next_request_id: 0,
            flow_sender: None,
            notice_ttl_ticks: ui.notice_ttl_ticks,
            map_span: MapSpan {
                lat_span: ui.map_lat_span,
                lon_span: ui.map_lon_span,
            },
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn notice(&self) -> &NoticeState {
        &self.notice
    }

    pub fn map_span(&self) -> MapSpan {
        self.map_span
    }

    pub fn set_flow_sender(&mut self, sender: FlowSender) {
        self.flow_sender = Some(sender);
    }

    // ========================================================================
    // Search flow
    // ========================================================================

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    /// Submit the current query.
    ///
    /// Empty input fails fast with a validation notice and no network call.
    /// Otherwise a fresh request id is allocated and the lookup is handed to
    /// the flow bridge; a second submit while one is in flight supersedes it.
    pub fn submit_search(&mut self) {
        if self.search.query.trim().is_empty() {
            self.show_notice(NoticeLevel::Warn, "Enter a movie title to search.");
            return;
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let query = self.search.query.trim().to_string();

        self.dispatch_search(SearchIntent::Started { request_id });
        self.send_command(FlowCommand::Search { request_id, query });
    }

    pub fn on_search_found(&mut self, request_id: u64, movie: MovieRecord) {
        self.dispatch_search(SearchIntent::Found { request_id, movie });
    }

    pub fn on_search_missed(&mut self, request_id: u64) {
        let current = self.is_current_request(request_id);
        self.dispatch_search(SearchIntent::Missed { request_id });
        if current {
            self.show_notice(
                NoticeLevel::Warn,
                "No movie matched that title. Check the spelling and try again.",
            );
        }
    }

    pub fn on_search_errored(&mut self, request_id: u64) {
        let current = self.is_current_request(request_id);
        self.dispatch_search(SearchIntent::Errored { request_id });
        if current {
            self.show_notice(
                NoticeLevel::Error,
                "Something went wrong while searching. Try again later.",
            );
        }
    }

    fn is_current_request(&self, request_id: u64) -> bool {
        matches!(
            self.search.phase,
            SearchPhase::Loading { request_id: current } if current == request_id
        )
    }

    // ========================================================================
    // Location flow
    // ========================================================================

    pub fn dispatch_location(&mut self, intent: LocationIntent) {
        dispatch_mvi!(self, location, LocationReducer, intent);
    }

    /// Accept the consent prompt and kick off the position fix.
    pub fn grant_location(&mut self) {
        if !self.location.is_unasked() {
            return;
        }
        self.dispatch_location(LocationIntent::Granted);
        self.send_command(FlowCommand::AcquireFix);
    }

    /// Decline the consent prompt. The denial notice fires exactly once
    /// because the reducer only leaves `Unasked` once.
    pub fn deny_location(&mut self) {
        if !self.location.is_unasked() {
            return;
        }
        self.dispatch_location(LocationIntent::Denied);
        self.show_notice(
            NoticeLevel::Warn,
            "Location permission denied. The map stays hidden.",
        );
    }

    pub fn on_position_fixed(&mut self, coordinate: Coordinate) {
        self.dispatch_location(LocationIntent::FixAcquired(coordinate));
    }

    pub fn on_position_failed(&mut self) {
        self.dispatch_location(LocationIntent::FixFailed);
        if self.location.coordinate.is_none() {
            self.show_notice(
                NoticeLevel::Warn,
                "Could not determine your current location.",
            );
        }
    }

    // ========================================================================
    // Notices and ticks
    // ========================================================================

    pub fn dispatch_notice(&mut self, intent: NoticeIntent) {
        dispatch_mvi!(self, notice, NoticeReducer, intent);
    }

    pub fn on_tick(&mut self) {
        self.dispatch_notice(NoticeIntent::Tick);
    }

    fn show_notice(&mut self, level: NoticeLevel, text: &str) {
        let ttl_ticks = self.notice_ttl_ticks;
        self.dispatch_notice(NoticeIntent::Show {
            level,
            text: text.to_string(),
            ttl_ticks,
        });
    }

    fn send_command(&mut self, command: FlowCommand) {
        let Some(sender) = self.flow_sender.clone() else {
            self.show_notice(NoticeLevel::Error, "Background worker unavailable.");
            return;
        };
        if sender.try_send(command).is_err() {
            self.show_notice(NoticeLevel::Error, "Background worker unavailable.");
        }
    }
}
