// Expense and habit extraction tests.
use chrono::{NaiveDate, NaiveDateTime};
use parlance::config;
use parlance::model::IntentKind;
use parlance::parse_at;

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 25)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[test]
fn test_log_expense_with_amount() {
    let intent = parse_at("Log $45 for lunch", reference());
    assert_eq!(intent.kind, IntentKind::Expense);
    assert_eq!(intent.amount, Some(45.0));
    assert_eq!(intent.category.as_deref(), Some("Food"));
    assert_eq!(intent.description.as_deref(), Some("lunch"));
    assert_eq!(intent.confidence, config::CONF_EXPENSE_WITH_AMOUNT);
    assert!(intent.clarification_needed.is_empty());
}

#[test]
fn test_decimal_amount_without_dollar_sign() {
    let intent = parse_at("Paid 12.50 for uber", reference());
    assert_eq!(intent.amount, Some(12.50));
    assert_eq!(intent.category.as_deref(), Some("Transport"));
    assert_eq!(intent.description.as_deref(), Some("uber"));
}

#[test]
fn test_category_families() {
    let cases = [
        ("spent $20 on a movie", "Entertainment"),
        ("bought clothes, $80", "Shopping"),
        ("$30 gas", "Transport"),
        ("paid $8 for breakfast", "Food"),
    ];
    for (input, category) in cases {
        let intent = parse_at(input, reference());
        assert_eq!(intent.category.as_deref(), Some(category), "input: {}", input);
    }
}

#[test]
fn test_default_category() {
    let intent = parse_at("spent $15 on gifts", reference());
    assert_eq!(intent.category.as_deref(), Some(config::DEFAULT_EXPENSE_CATEGORY));
}

#[test]
fn test_bare_amount_has_no_description() {
    let intent = parse_at("spent $10", reference());
    assert_eq!(intent.amount, Some(10.0));
    assert_eq!(intent.description, None);
}

#[test]
fn test_missing_amount_asks_for_one() {
    let intent = parse_at("i owe john money", reference());
    assert_eq!(intent.kind, IntentKind::Expense);
    assert_eq!(intent.amount, None);
    assert_eq!(intent.confidence, config::CONF_EXPENSE_NO_AMOUNT);
    assert_eq!(
        intent.clarification_needed,
        vec![config::PROMPT_EXPENSE_AMOUNT.to_string()]
    );
}

#[test]
fn test_create_habit() {
    let intent = parse_at("Create gym habit daily", reference());
    assert_eq!(intent.kind, IntentKind::Habit);
    assert_eq!(intent.title.as_deref(), Some("gym daily"));
    assert_eq!(intent.confidence, config::CONF_HABIT_WITH_TITLE);
    assert!(intent.clarification_needed.is_empty());
}

#[test]
fn test_habit_prefix_form() {
    let intent = parse_at("habit: drink water", reference());
    assert_eq!(intent.title.as_deref(), Some("drink water"));
    assert_eq!(intent.confidence, config::CONF_HABIT_WITH_TITLE);
}

#[test]
fn test_short_habit_title_lowers_confidence() {
    // "tv" survives as a title but is too short to trust.
    let intent = parse_at("track tv", reference());
    assert_eq!(intent.title.as_deref(), Some("tv"));
    assert_eq!(intent.confidence, config::CONF_HABIT_NO_TITLE);
    assert_eq!(
        intent.clarification_needed,
        vec![config::PROMPT_HABIT_TITLE.to_string()]
    );
}
