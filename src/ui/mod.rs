//! Terminal presentation layer.
//!
//! Renders the feed and favourites screens and turns key presses into
//! intents. Everything stateful flows through [`app::App`]; the draw/event
//! loop lives in [`runtime::run`].

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
