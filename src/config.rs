// File: ./src/config.rs
// Parser-wide defaults and tunables, named so callers and tests can refer
// to them directly instead of chasing literals through the pipeline.

/// Assumed event length (minutes) when the utterance gives a start but no
/// end and no duration hint.
pub const DEFAULT_EVENT_DURATION_MINS: i64 = 60;

/// Expense category used when no category keyword matches.
pub const DEFAULT_EXPENSE_CATEGORY: &str = "General";

// --- CLARIFICATION PROMPTS ---

pub const PROMPT_FALLBACK: &str = "What would you like me to do?";
pub const PROMPT_EVENT_TITLE: &str = "What should I call this event?";
pub const PROMPT_EVENT_TIME: &str = "When would you like to schedule this?";
pub const PROMPT_EXPENSE_AMOUNT: &str = "How much was the expense?";
pub const PROMPT_HABIT_TITLE: &str = "What habit would you like to track?";

// --- CONFIDENCE TIERS ---
// Heuristic completeness scores, not probabilities. Each extractor picks
// exactly one tier per parse.

pub const CONF_GREETING: f64 = 0.95;
pub const CONF_HELP: f64 = 0.9;
pub const CONF_CALENDAR_QUERY: f64 = 0.9;
pub const CONF_UNCLEAR: f64 = 0.3;

pub const CONF_EVENT_FULL: f64 = 0.95;
pub const CONF_EVENT_PARTIAL: f64 = 0.6;
pub const CONF_EVENT_BASELINE: f64 = 0.5;

pub const CONF_EXPENSE_WITH_AMOUNT: f64 = 0.85;
pub const CONF_EXPENSE_NO_AMOUNT: f64 = 0.4;

pub const CONF_HABIT_WITH_TITLE: f64 = 0.75;
pub const CONF_HABIT_NO_TITLE: f64 = 0.5;
