//! Terminal client for browsing a remote movie catalog.
//!
//! The crate is split along ownership lines: [`catalog`] talks to the remote
//! API, [`favourites`] owns the persisted favourites list, [`feed`] owns the
//! browse/search state machine, and [`ui`] renders both and turns key presses
//! into intents. [`mvi`] holds the unidirectional-flow primitives the feed is
//! built on.

pub mod args;
pub mod catalog;
pub mod config;
pub mod favourites;
pub mod feed;
pub mod mvi;
pub mod ui;
