// File: ./src/parser/habit.rs
//! Habit field extraction: title only.

use crate::config;
use crate::model::{IntentAction, IntentKind, ParsedIntent};
use once_cell::sync::Lazy;
use regex::Regex;

static HABIT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:habit|routine|daily):\s*(.+)").expect("habit-prefix pattern must compile")
});
static STRIP_WORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)add|create|new|habit|routine|track").expect("strip pattern must compile")
});
static MULTI_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern must compile"));

pub(crate) fn parse_habit(raw: &str, lower: &str) -> ParsedIntent {
    let mut intent = ParsedIntent::new(IntentKind::Habit);
    intent.action = Some(IntentAction::Create);

    // "habit: drink water" keeps everything after the prefix; otherwise
    // strip the creation verbs from the raw input.
    let title = if let Some(caps) = HABIT_PREFIX_RE.captures(lower) {
        caps[1].trim().to_string()
    } else {
        let stripped = STRIP_WORDS_RE.replace_all(raw, "");
        MULTI_SPACE_RE
            .replace_all(stripped.trim(), " ")
            .to_string()
    };

    let usable = !title.is_empty() && title.chars().any(|c| c.is_ascii_alphanumeric());
    if usable {
        intent.title = Some(title);
    }

    match &intent.title {
        Some(t) if t.chars().count() > 2 => intent.confidence = config::CONF_HABIT_WITH_TITLE,
        _ => {
            intent.confidence = config::CONF_HABIT_NO_TITLE;
            intent
                .clarification_needed
                .push(config::PROMPT_HABIT_TITLE.to_string());
        }
    }

    intent
}
