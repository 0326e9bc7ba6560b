//! Interactive TUI
//!
//! Board history, constraints, candidates and eliminators in one ratatui screen.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Snapshot, Statistics, run_tui};
