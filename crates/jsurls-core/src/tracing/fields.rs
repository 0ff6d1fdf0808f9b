//! Values for the `pass` field carried by budget and timing events.

/// The pass that builds the value tables.
pub const PASS_SYMBOLS: &str = "symbols";

/// The pass that generates candidate entries.
pub const PASS_CANDIDATES: &str = "candidates";
