use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::location::{LocationState, Permission};
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT, STATUS_ERROR, STATUS_OK};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, location: &LocationState) -> Paragraph<'static> {
        let (status_text, status_color) = match (location.permission, location.coordinate) {
            (Permission::Unasked, _) => ("location: waiting for consent", DIM_TEXT),
            (Permission::Denied, _) => ("location: denied", STATUS_ERROR),
            (Permission::Granted, None) => ("location: locating…", DIM_TEXT),
            (Permission::Granted, Some(_)) => ("location: fixed", STATUS_OK),
        };

        let line = Line::from(vec![
            Span::styled("  🎬 ", Style::default().fg(ACCENT)),
            Span::styled("CineScout", Style::default().fg(ACCENT)),
            Span::styled("  │  ", Style::default().fg(DIM_TEXT)),
            Span::styled("find movies by title", Style::default().fg(PRIMARY_TEXT)),
            Span::styled("  │  ", Style::default().fg(DIM_TEXT)),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
