// Confirmation rendering tests: exact user-facing strings.
use chrono::{NaiveDate, NaiveDateTime};
use parlance::config;
use parlance::model::IntentDisplay;
use parlance::parse_at;

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 25)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[test]
fn test_event_confirmation() {
    let intent = parse_at("Meeting tomorrow at 3pm", reference());
    assert_eq!(
        intent.confirmation(),
        "✅ Scheduled \"Meeting\" for Wed, Aug 26, 3:00 PM - 4:00 PM"
    );
}

#[test]
fn test_event_confirmation_with_location() {
    let intent = parse_at("Dinner at luigis tomorrow 7pm", reference());
    let rendered = intent.confirmation();
    assert!(rendered.starts_with("✅ Scheduled \"Dinner at luigis\" for Wed, Aug 26, 7:00 PM"));
    assert!(rendered.ends_with(" at luigis"), "got: {}", rendered);
}

#[test]
fn test_expense_confirmation() {
    let intent = parse_at("Log $45 for lunch", reference());
    assert_eq!(intent.confirmation(), "💰 Logged $45.00 for lunch (Food)");
}

#[test]
fn test_expense_confirmation_without_description() {
    let intent = parse_at("spent $10", reference());
    assert_eq!(intent.confirmation(), "💰 Logged $10.00 (General)");
}

#[test]
fn test_habit_confirmation() {
    let intent = parse_at("Create gym habit daily", reference());
    assert_eq!(intent.confirmation(), "🎯 Created \"gym daily\" habit!");
}

#[test]
fn test_fallback_prompt() {
    // Queries and incomplete intents fall back to the generic prompt.
    for input in ["hi", "schedule !!!", "i owe john money", "xyzzy plugh"] {
        let intent = parse_at(input, reference());
        assert_eq!(intent.confirmation(), config::PROMPT_FALLBACK, "input: {}", input);
    }
}
