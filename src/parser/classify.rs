// File: ./src/parser/classify.rs
//! Keyword-family intent classification.
//!
//! The classifier is an ordered chain of (predicate, category) rules over
//! the lowercased utterance. First match wins: the ordering IS the
//! tie-break policy, so an input matching both the event and expense
//! families ("schedule dinner, I spent $30 last time") classifies as an
//! event. Keep the rule order in sync with the precedence tests.

/// Coarse routing decision. The per-category extractors turn this into a
/// full `ParsedIntent`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IntentCategory {
    Greeting,
    Help,
    CalendarQuery,
    Event,
    Expense,
    Habit,
    Unclear,
}

const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "hiya",
    "yo",
    "sup",
    "howdy",
    "good morning",
    "good afternoon",
    "good evening",
    "whats up",
    "what's up",
    "how are you",
    "how r u",
];

const HELP_PHRASES: &[&str] = &["help", "what can you do", "what do you do"];

const CALENDAR_QUERIES: &[&str] = &[
    "what's on",
    "whats on",
    "show me",
    "what do i have",
    "my schedule",
    "my calendar",
    "free time",
    "busy",
    "events today",
    "events tomorrow",
    "meetings",
];

const EVENT_KEYWORDS: &[&str] = &[
    "schedule",
    "meeting",
    "call",
    "appointment",
    "event",
    "block",
    "focus",
    "reserve",
    "book",
    "add",
    "tomorrow",
    "today",
    "next week",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "am",
    "pm",
    "o'clock",
    "at ",
];

const EXPENSE_KEYWORDS: &[&str] = &[
    "spent",
    "paid",
    "expense",
    "cost",
    "bought",
    "$",
    "dollars",
    "owe",
    "owes",
    "split",
    "log expense",
];

const HABIT_KEYWORDS: &[&str] = &[
    "habit",
    "daily",
    "every day",
    "every week",
    "routine",
    "gym",
    "workout",
    "exercise",
    "meditation",
    "reading",
    "track",
];

/// Greetings and help phrases must stand alone or start the utterance;
/// everything else matches anywhere in it.
fn matches_exact_or_prefix(input: &str, phrases: &[&str]) -> bool {
    phrases
        .iter()
        .any(|p| input == *p || input.starts_with(&format!("{} ", p)))
}

fn matches_any_substring(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| input.contains(k))
}

fn is_greeting(input: &str) -> bool {
    matches_exact_or_prefix(input, GREETINGS)
}

fn is_help_request(input: &str) -> bool {
    matches_exact_or_prefix(input, HELP_PHRASES)
}

fn is_calendar_query(input: &str) -> bool {
    matches_any_substring(input, CALENDAR_QUERIES)
}

fn is_event_intent(input: &str) -> bool {
    matches_any_substring(input, EVENT_KEYWORDS)
}

fn is_expense_intent(input: &str) -> bool {
    matches_any_substring(input, EXPENSE_KEYWORDS)
}

fn is_habit_intent(input: &str) -> bool {
    matches_any_substring(input, HABIT_KEYWORDS)
}

/// Classify a lowercased, trimmed utterance. Pure function; no fallthrough
/// between rules.
pub fn classify(input: &str) -> IntentCategory {
    let rules: &[(fn(&str) -> bool, IntentCategory)] = &[
        (is_greeting, IntentCategory::Greeting),
        (is_help_request, IntentCategory::Help),
        (is_calendar_query, IntentCategory::CalendarQuery),
        (is_event_intent, IntentCategory::Event),
        (is_expense_intent, IntentCategory::Expense),
        (is_habit_intent, IntentCategory::Habit),
    ];
    for (predicate, category) in rules {
        if predicate(input) {
            return *category;
        }
    }
    IntentCategory::Unclear
}
