//! # santa-cli
//!
//! Presentation layer for the `santa` binary: result rendering, a live
//! attempt counter, console styling, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress_display;
pub mod ui;
