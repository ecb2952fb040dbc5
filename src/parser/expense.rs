// File: ./src/parser/expense.rs
//! Expense field extraction: amount, category, description.

use crate::config;
use crate::model::{IntentAction, IntentKind, ParsedIntent};
use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?\s?(\d+(?:\.\d{2})?)").expect("amount pattern must compile"));
static STRIP_VERBS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)spent|paid|for|expense|log").expect("verb pattern must compile")
});
static MULTI_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern must compile"));

// First matching family wins; everything else falls back to the default
// category.
const FOOD_TERMS: &[&str] = &["food", "dinner", "lunch", "breakfast"];
const TRANSPORT_TERMS: &[&str] = &["uber", "taxi", "transport", "gas"];
const ENTERTAINMENT_TERMS: &[&str] = &["movie", "entertainment"];
const SHOPPING_TERMS: &[&str] = &["shopping", "clothes"];

fn categorize(lower: &str) -> &'static str {
    let families: &[(&[&str], &str)] = &[
        (FOOD_TERMS, "Food"),
        (TRANSPORT_TERMS, "Transport"),
        (ENTERTAINMENT_TERMS, "Entertainment"),
        (SHOPPING_TERMS, "Shopping"),
    ];
    for (terms, category) in families {
        if terms.iter().any(|t| lower.contains(t)) {
            return category;
        }
    }
    config::DEFAULT_EXPENSE_CATEGORY
}

pub(crate) fn parse_expense(raw: &str, lower: &str) -> ParsedIntent {
    let mut intent = ParsedIntent::new(IntentKind::Expense);
    intent.action = Some(IntentAction::Create);

    intent.amount = AMOUNT_RE
        .captures(lower)
        .and_then(|caps| caps[1].parse::<f64>().ok());

    intent.category = Some(categorize(lower).to_string());

    // Description is the raw input minus the amount token and the logging
    // verbs; absent when nothing else remains.
    let without_amount = AMOUNT_RE.replace(raw, "");
    let without_verbs = STRIP_VERBS_RE.replace_all(&without_amount, "");
    let description = MULTI_SPACE_RE
        .replace_all(without_verbs.trim(), " ")
        .to_string();
    if !description.is_empty() {
        intent.description = Some(description);
    }

    if intent.amount.is_some() {
        intent.confidence = config::CONF_EXPENSE_WITH_AMOUNT;
    } else {
        intent.confidence = config::CONF_EXPENSE_NO_AMOUNT;
        intent
            .clarification_needed
            .push(config::PROMPT_EXPENSE_AMOUNT.to_string());
    }

    intent
}
