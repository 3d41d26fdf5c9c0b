use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions top to bottom: header, search input, body, footer.
pub struct ScreenRegions {
    pub header: Rect,
    pub input: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn screen_regions(area: Rect) -> ScreenRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenRegions {
        header: chunks[0],
        input: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}

/// Split the body for the two result panels. With both present each gets
/// half; alone, a panel takes the full width.
pub fn body_split(area: Rect, has_movie: bool, has_map: bool) -> (Option<Rect>, Option<Rect>) {
    match (has_movie, has_map) {
        (true, true) => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            (Some(halves[0]), Some(halves[1]))
        }
        (true, false) => (Some(area), None),
        (false, true) => (None, Some(area)),
        (false, false) => (None, None),
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
