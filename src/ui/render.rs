use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::catalog::Movie;
use crate::feed::{FeedPhase, SortOrder};
use crate::ui::app::{App, Screen};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, FAVOURITE_MARK, HEADER_TEXT, STATUS_ERROR,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, status, footer) = layout_regions(frame.area());

    frame.render_widget(header_line(app), header);

    match app.screen() {
        Screen::Feed => draw_feed(frame, app, body),
        Screen::Favourites => draw_favourites(frame, app, body),
    }

    frame.render_widget(status_line(app), status);
    frame.render_widget(footer_line(app), footer);
}

fn header_line(app: &App) -> Paragraph<'_> {
    let state = app.feed_state();
    let sort = match state.sort {
        SortOrder::Descending => "rating ↓",
        SortOrder::Ascending => "rating ↑",
    };
    let query = if app.search_active() {
        format!("search: {}▏", state.query)
    } else if state.query.is_empty() {
        "popular movies".to_string()
    } else {
        format!("search: {}", state.query)
    };
    let screen = match app.screen() {
        Screen::Feed => "feed",
        Screen::Favourites => "favourites",
    };

    Paragraph::new(Line::from(vec![
        Span::styled(" moviedeck ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{screen}] "), Style::default().fg(HEADER_TEXT)),
        Span::styled(query, Style::default().fg(HEADER_TEXT)),
        Span::styled(format!("  {sort}"), Style::default().fg(DIM_TEXT)),
    ]))
}

fn draw_feed(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let state = app.feed_state();
    match state.phase() {
        FeedPhase::Error => {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("Failed to load movies. ", Style::default().fg(STATUS_ERROR)),
                    Span::styled("Press r to retry.", Style::default().fg(DIM_TEXT)),
                ])),
                area,
            );
        }
        FeedPhase::Idle => {
            frame.render_widget(
                Paragraph::new(Span::styled("No results.", Style::default().fg(DIM_TEXT))),
                area,
            );
        }
        FeedPhase::Loading | FeedPhase::Loaded => {
            let mut items: Vec<ListItem<'_>> = state
                .movies
                .iter()
                .map(|movie| movie_row(movie, app.favourites().contains(movie)))
                .collect();
            if state.phase() == FeedPhase::Loading {
                items.push(ListItem::new(Span::styled(
                    "  fetching…",
                    Style::default().fg(DIM_TEXT),
                )));
            }
            render_list(frame, area, items, app.selected_index());
        }
    }
}

fn draw_favourites(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    if app.favourites().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No favourites yet.", Style::default().fg(DIM_TEXT))),
            area,
        );
        return;
    }
    let items: Vec<ListItem<'_>> = app
        .favourites()
        .list()
        .iter()
        .map(|movie| movie_row(movie, true))
        .collect();
    render_list(frame, area, items, app.selected_index());
}

fn render_list(
    frame: &mut Frame<'_>,
    area: ratatui::layout::Rect,
    items: Vec<ListItem<'_>>,
    selected: usize,
) {
    let list = List::new(items)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn movie_row(movie: &Movie, favourite: bool) -> ListItem<'_> {
    let mark = if favourite { "♥ " } else { "  " };
    let date = if movie.release_date.is_empty() {
        "----".to_string()
    } else {
        movie.release_date.clone()
    };
    ListItem::new(Line::from(vec![
        Span::styled(mark, Style::default().fg(FAVOURITE_MARK)),
        Span::raw(movie.title.clone()),
        Span::styled(
            format!("  {:.1}  {date}", movie.vote_average),
            Style::default().fg(DIM_TEXT),
        ),
    ]))
}

fn status_line(app: &App) -> Paragraph<'_> {
    if let Some(error) = app.store_error() {
        return Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    let detail = app
        .selected_movie()
        .map(|movie| match movie.poster_url() {
            Some(url) => format!(" {} — {}", movie.title, url),
            None => format!(" {} — no poster", movie.title),
        })
        .unwrap_or_default();
    Paragraph::new(Span::styled(detail, Style::default().fg(DIM_TEXT)))
}

fn footer_line(app: &App) -> Paragraph<'_> {
    let hints = if app.search_active() {
        " type to search · Enter/Esc done"
    } else {
        match app.screen() {
            Screen::Feed => " / search · s sort · f favourite · Tab favourites · q quit",
            Screen::Favourites => " f remove · Tab feed · q quit",
        }
    };
    Paragraph::new(Span::styled(hints, Style::default().fg(DIM_TEXT)))
}
