//! Declarative view.
//!
//! `draw` is a pure function of the screen state: the movie panel and the map
//! panel are each present exactly when their flow has produced data, so all
//! four combinations render without any transition logic here.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_split, centered_rect_by_size, screen_regions};
use crate::ui::map::MapPanel;
use crate::ui::notice::{NoticeLevel, NoticeState};
use crate::ui::search::SearchPhase;
use crate::ui::theme::{
    ACCENT, DIM_TEXT, GLOBAL_BORDER, POPUP_BORDER, PRIMARY_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = screen_regions(frame.area());

    frame.render_widget(Header::new().widget(app.location()), regions.header);
    draw_input(frame, regions.input, app);
    draw_body(frame, regions.body, app);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);

    draw_notice(frame, regions.body, app.notice());

    if app.location().is_unasked() {
        draw_consent_prompt(frame, regions.body);
    }
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let query = app.search().query.as_str();
    let title = if app.search().is_loading() {
        Span::styled("Search (loading…)", Style::default().fg(DIM_TEXT))
    } else {
        Span::styled("Search", Style::default().fg(ACCENT))
    };

    let input = Paragraph::new(Line::from(Span::styled(
        query.to_string(),
        Style::default().fg(PRIMARY_TEXT),
    )))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, area);

    // Hardware cursor at the edit position, unless the consent prompt is
    // modal on top.
    if !app.location().is_unasked() && area.width > 2 && area.height > 2 {
        let max_x = area.width.saturating_sub(2);
        let cursor_x = area.x + 1 + (query.chars().count() as u16).min(max_x - 1);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let movie = app.search().movie();
    let coordinate = app.location().coordinate;

    let (movie_area, map_area) = body_split(area, movie.is_some(), coordinate.is_some());

    if movie.is_none() && coordinate.is_none() {
        let hint = match app.search().phase {
            SearchPhase::Loading { .. } => "Searching…",
            _ => "Type a movie title and press Enter.",
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(DIM_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(placeholder, area);
        return;
    }

    if let (Some(movie), Some(rect)) = (movie, movie_area) {
        let lines = vec![
            Line::from(Span::styled(
                movie.title.clone(),
                Style::default().fg(ACCENT),
            )),
            Line::from(""),
            field_line("Year", &movie.year),
            field_line("Genre", &movie.genre),
            field_line("Director", &movie.director),
            field_line("Awards", &movie.awards),
        ];
        let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(Span::styled("Movie", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(panel, rect);
    }

    if let (Some(coordinate), Some(rect)) = (coordinate, map_area) {
        let map = MapPanel::new(coordinate, app.map_span());
        frame.render_widget(map.widget(), rect);
    }
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(DIM_TEXT)),
        Span::styled(value.to_string(), Style::default().fg(PRIMARY_TEXT)),
    ])
}

fn draw_notice(frame: &mut Frame<'_>, body: Rect, notice: &NoticeState) {
    let NoticeState::Visible { level, text, .. } = notice else {
        return;
    };

    let color = match level {
        NoticeLevel::Info => STATUS_OK,
        NoticeLevel::Warn => STATUS_WARN,
        NoticeLevel::Error => STATUS_ERROR,
    };

    let width = (text.chars().count() as u16).saturating_add(4).min(body.width);
    let area = Rect {
        x: body.x + (body.width.saturating_sub(width)) / 2,
        y: body.y,
        width,
        height: 3.min(body.height),
    };

    let banner = Paragraph::new(Line::from(Span::styled(
        text.clone(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(banner, area);
}

fn draw_consent_prompt(frame: &mut Frame<'_>, body: Rect) {
    let lines = vec![
        Line::from("Show your current position on the map?"),
        Line::from(""),
        Line::from(Span::styled(
            "Your public address is sent to a geolocation service once.",
            Style::default().fg(DIM_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(STATUS_OK)),
            Span::raw(" allow    "),
            Span::styled("[N]", Style::default().fg(STATUS_ERROR)),
            Span::raw(" deny"),
        ]),
    ];

    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4) as u16;
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, width, height);

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled("Location", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
