//! Embedded map panel.
//!
//! Renders a braille world map centered on a coordinate, with a marker at the
//! exact position. Consumes the coordinate and a zoom span; nothing flows
//! back to the rest of the screen.

use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Borders, Widget};

use crate::geo::Coordinate;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MAP_LAND};

/// Viewport size in degrees of latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSpan {
    pub lat_span: f64,
    pub lon_span: f64,
}

pub struct MapPanel {
    center: Coordinate,
    span: MapSpan,
}

impl MapPanel {
    pub fn new(center: Coordinate, span: MapSpan) -> Self {
        Self { center, span }
    }

    pub fn widget(&self) -> impl Widget + '_ {
        let (x_bounds, y_bounds) = viewport(self.center, self.span);
        let center = self.center;

        Canvas::default()
            .block(
                Block::default()
                    .title(Span::styled("Your Location", Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .marker(symbols::Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: MAP_LAND,
                });
                ctx.print(
                    center.longitude,
                    center.latitude,
                    Line::from(Span::styled("⦿ you", Style::default().fg(ACCENT))),
                );
            })
    }
}

/// Compute `([west, east], [south, north])` bounds for a window of `span`
/// degrees around `center`, shifted back inside the world rectangle when the
/// window would cross a pole or the antimeridian.
pub fn viewport(center: Coordinate, span: MapSpan) -> ([f64; 2], [f64; 2]) {
    let lon_span = span.lon_span.min(360.0);
    let lat_span = span.lat_span.min(180.0);

    let x = clamp_window(center.longitude, lon_span, -180.0, 180.0);
    let y = clamp_window(center.latitude, lat_span, -90.0, 90.0);
    (x, y)
}

fn clamp_window(center: f64, span: f64, min: f64, max: f64) -> [f64; 2] {
    let half = span / 2.0;
    let mut low = center - half;
    let mut high = center + half;
    if low < min {
        high += min - low;
        low = min;
    }
    if high > max {
        low -= high - max;
        high = max;
    }
    [low.max(min), high.min(max)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAN: MapSpan = MapSpan {
        lat_span: 30.0,
        lon_span: 60.0,
    };

    #[test]
    fn viewport_centers_on_coordinate() {
        let center = Coordinate {
            latitude: 40.0,
            longitude: -73.0,
        };
        let (x, y) = viewport(center, SPAN);
        assert_eq!(x, [-103.0, -43.0]);
        assert_eq!(y, [25.0, 55.0]);
    }

    #[test]
    fn viewport_shifts_at_north_pole() {
        let center = Coordinate {
            latitude: 89.0,
            longitude: 0.0,
        };
        let (_, y) = viewport(center, SPAN);
        assert_eq!(y, [60.0, 90.0]);
    }

    #[test]
    fn viewport_shifts_at_antimeridian() {
        let center = Coordinate {
            latitude: 0.0,
            longitude: 179.0,
        };
        let (x, _) = viewport(center, SPAN);
        assert_eq!(x, [120.0, 180.0]);
    }

    #[test]
    fn oversized_span_covers_whole_world() {
        let center = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let span = MapSpan {
            lat_span: 1000.0,
            lon_span: 1000.0,
        };
        let (x, y) = viewport(center, span);
        assert_eq!(x, [-180.0, 180.0]);
        assert_eq!(y, [-90.0, 90.0]);
    }
}
