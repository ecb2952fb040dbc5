// File: ./src/parser/mod.rs
//! The parse pipeline: classify, extract, score.
//!
//! Every call is independent and referentially transparent given the same
//! `(input, reference)` pair; nothing in here holds state between calls,
//! and malformed input never produces an error, only low confidence plus
//! clarification prompts.

pub mod classify;
pub mod dates;
mod event;
mod expense;
mod habit;

pub use classify::{IntentCategory, classify};
pub use dates::{DateTimeSpan, duration_hint_mins, extract_date, extract_datetime_span};

use crate::config;
use crate::model::{ParsedIntent, QueryKind};
use chrono::{Local, NaiveDateTime};
use log::debug;

/// Parse a single utterance against the current local time.
pub fn parse(input: &str) -> ParsedIntent {
    parse_at(input, Local::now().naive_local())
}

/// Parse a single utterance against an explicit reference instant, which
/// anchors every relative date phrase ("tomorrow", "next friday", "in 2
/// hours"). This is the form tests and replay tooling should use.
pub fn parse_at(input: &str, reference: NaiveDateTime) -> ParsedIntent {
    let lower = input.trim().to_lowercase();
    let category = classify::classify(&lower);
    debug!("classified {:?} from {} chars", category, input.len());

    match category {
        IntentCategory::Greeting => ParsedIntent::query(QueryKind::Greeting, config::CONF_GREETING),
        IntentCategory::Help => ParsedIntent::query(QueryKind::Help, config::CONF_HELP),
        IntentCategory::CalendarQuery => {
            let mut intent = ParsedIntent::query(QueryKind::Calendar, config::CONF_CALENDAR_QUERY);
            intent.query_date = dates::extract_date(&lower, reference.date());
            intent
        }
        IntentCategory::Event => event::parse_event(input.trim(), &lower, reference),
        IntentCategory::Expense => expense::parse_expense(input.trim(), &lower),
        IntentCategory::Habit => habit::parse_habit(input.trim(), &lower),
        IntentCategory::Unclear => {
            let mut intent = ParsedIntent::query(QueryKind::Unclear, config::CONF_UNCLEAR);
            intent
                .clarification_needed
                .push(config::PROMPT_FALLBACK.to_string());
            intent
        }
    }
}
