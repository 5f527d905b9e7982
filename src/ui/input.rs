use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::feed::{FeedIntent, FeedPhase};
use crate::ui::app::{App, Screen};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    if app.search_active() {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.toggle_screen(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('f') | KeyCode::Enter => app.toggle_favourite(),
        KeyCode::Char('/') if app.screen() == Screen::Feed => app.begin_search(),
        KeyCode::Char('s') if app.screen() == Screen::Feed => {
            app.dispatch_feed(FeedIntent::SortToggled)
        }
        KeyCode::Char('r')
            if app.screen() == Screen::Feed && app.feed_state().phase() == FeedPhase::Error =>
        {
            app.dispatch_feed(FeedIntent::Retry)
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_search(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(c)
        }
        _ => {}
    }
}
