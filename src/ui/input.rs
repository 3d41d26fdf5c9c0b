use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::notice::NoticeIntent;
use crate::ui::search::SearchIntent;

/// Route a key press.
///
/// While the consent prompt is up it is modal: only an answer (or quit) is
/// accepted. Afterwards keys edit the query; Enter submits.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.location().is_unasked() {
        match key.code {
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'y') => app.grant_location(),
            KeyCode::Enter => app.grant_location(),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'n') => app.deny_location(),
            KeyCode::Esc => app.deny_location(),
            _ => {}
        }
        return;
    }

    if app.notice().is_visible() && matches!(key.code, KeyCode::Esc) {
        app.dispatch_notice(NoticeIntent::Dismissed);
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.dispatch_search(SearchIntent::Cleared);
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::DeletedBack),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_search(SearchIntent::Typed(ch));
        }
        _ => {}
    }
}

/// Pasted text goes into the query field.
pub fn handle_paste(app: &mut App, text: String) {
    if app.location().is_unasked() {
        return;
    }
    app.dispatch_search(SearchIntent::Pasted(text));
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
