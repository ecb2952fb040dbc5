// File: ./src/model/mod.rs
pub mod display;
pub mod intent;

pub use display::{IntentDisplay, format_confirmation};
pub use intent::{IntentAction, IntentKind, ParsedIntent, QueryKind};
