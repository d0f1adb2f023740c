//! # Demo GUI
//!
//! Terminal front-end for the palindrome benchmark client.
//!
//! Uses ratatui for rendering and crossterm for terminal handling. The
//! `bench_client` orchestrator drives everything; this crate supplies its
//! terminal surface and chart widget.
//!
//! ### Layout
//! - **Inputs**: N (data count) and X (palindromes), Tab switches focus
//! - **Content**: idle hint, loading line, or stats, chart and sample grid
//! - **Notice**: popup for validation and transport messages, any key dismisses

pub mod app;
pub mod input;
pub mod screens;
pub mod surface;
pub mod visualisation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{BenchmarkScreen, TuiApp};
    pub use crate::input::{Field, FormAction, InputForm};
    pub use crate::surface::TerminalSurface;
    pub use crate::visualisation::TerminalChart;
}
