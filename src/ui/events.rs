use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::feed::FeedIntent;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    /// A feed fetch completed; routed back through the app so feed state
    /// only ever mutates on the UI thread.
    Feed(FeedIntent),
}

/// Funnels terminal input and feed completions into one channel the draw
/// loop consumes.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            match event::poll(tick_rate) {
                Ok(true) => {
                    let app_event = match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                        Ok(_) => None,
                        Err(_) => break,
                    };
                    if let Some(app_event) = app_event {
                        if event_tx.send(app_event).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        Self { rx, tx }
    }

    /// Forwards fetch completions from the feed machine into the event
    /// channel.
    pub fn bridge_feed(&self, mut completions: tokio::sync::mpsc::UnboundedReceiver<FeedIntent>) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            while let Some(intent) = completions.blocking_recv() {
                if tx.send(AppEvent::Feed(intent)).is_err() {
                    break;
                }
            }
        });
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
