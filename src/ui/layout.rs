use ratatui::layout::{Constraint, Layout, Rect};

/// Header bar, scrolling body, status line, footer hints.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let [header, body, status, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    (header, body, status, footer)
}
