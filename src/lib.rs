//! omdbtui - search the Open Movie Database from your terminal
//!
//! Type a title, browse the matches, open one for its full record, go back.
//!
//! # Modules
//!
//! - `models` - Search summaries, detail records, request options
//! - `api` - OMDb client and the `MovieDatabase` seam
//! - `app` - Screen state and the listing/viewing transitions
//! - `screen` - Async controller tying state, client and notices together
//! - `tui` - Background request plumbing for the interactive UI
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable subcommands

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod screen;
pub mod tui;
pub mod ui;

// Re-export commonly used types
pub use models::{
    MediaType, MovieDetail, PlotLength, Rating, SearchPage, SearchRequest, SearchResultSummary,
};

pub use api::{MovieDatabase, OmdbClient, OmdbConfig, OmdbError};
pub use app::{App, Notifier, ViewState};
pub use screen::MovieScreen;
