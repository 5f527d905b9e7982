use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::favourites::{FavouritesController, FavouritesStore};
use crate::feed::{FeedIntent, FeedMachine};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, runtime: tokio::runtime::Handle) -> anyhow::Result<()> {
    let catalog = CatalogClient::new(&config.catalog)?;
    let favourites = FavouritesController::new(FavouritesStore::new(FavouritesStore::default_path()));
    let (feed, completions) = FeedMachine::new(catalog, runtime);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    events.bridge_feed(completions);

    let mut app = App::new(feed, favourites);
    app.dispatch_feed(FeedIntent::Start);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Feed(intent)) => app.dispatch_feed(intent),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
