// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod model;
pub mod parser;

pub use model::{
    IntentAction, IntentDisplay, IntentKind, ParsedIntent, QueryKind, format_confirmation,
};
pub use parser::{parse, parse_at};
