// src/tui/mod.rs  -  ratatui terminal preview
#[cfg(feature = "tui")]
mod inner;
#[cfg(feature = "tui")]
pub use inner::Tui;

/// Page pixels per terminal row
#[cfg(feature = "tui")]
pub const ROW_PX: f64 = 20.0;
