// File: ./src/parser/event.rs
//! Event field extraction: title, times, location, action.

use crate::config;
use crate::model::{IntentAction, IntentKind, ParsedIntent};
use crate::parser::dates;
use chrono::{Duration, NaiveDateTime};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:schedule|add|create|book|set up|block|plan)\s+")
        .expect("action-verb pattern must compile")
});
static TRAILING_CONNECTOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(?:for|at|on|with|in)\s*$").expect("connector pattern must compile")
});
static MULTI_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern must compile"));
// Location phrase, bounded by the next date word, a digit-led time token
// or end of input.
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:at|in|location:?)\s+([a-z\s]+?)(?:\s+tomorrow|\s+today|\s+on|\s+at\s+\d|$)")
        .expect("location pattern must compile")
});

/// Remove the first case-insensitive occurrence of `needle`, leaving the
/// rest of `haystack` untouched. Exact-substring removal only; anything
/// fuzzier risks corrupting unrelated title text.
fn remove_once_case_insensitive(haystack: &str, needle: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    let hay_lower = haystack.to_lowercase();
    let needle_lower = needle.to_lowercase();
    // Lowercasing can shift byte offsets for non-ASCII text; only splice
    // when the offsets still line up.
    if hay_lower.len() == haystack.len()
        && let Some(pos) = hay_lower.find(&needle_lower)
        && haystack.is_char_boundary(pos)
        && haystack.is_char_boundary(pos + needle_lower.len())
    {
        let mut out = String::with_capacity(haystack.len() - needle_lower.len());
        out.push_str(&haystack[..pos]);
        out.push_str(&haystack[pos + needle_lower.len()..]);
        return out;
    }
    haystack.to_string()
}

pub(crate) fn parse_event(raw: &str, lower: &str, reference: NaiveDateTime) -> ParsedIntent {
    let mut intent = ParsedIntent::new(IntentKind::Event);

    // Seed the title before date extraction so the matched phrase can be
    // stripped from it afterwards.
    let mut title_seed = ACTION_VERB_RE.replace(raw, "").to_string();

    let mut duration = config::DEFAULT_EVENT_DURATION_MINS;
    if let Some(span) = dates::extract_datetime_span(raw, reference) {
        debug!("event span matched: {:?}", span.matched);
        intent.start_time = Some(span.start);
        match span.end {
            Some(end) => {
                duration = (end - span.start).num_minutes();
                intent.end_time = Some(end);
            }
            None => {
                duration = dates::duration_hint_mins(lower);
                intent.end_time = Some(span.start + Duration::minutes(duration));
            }
        }
        title_seed = remove_once_case_insensitive(&title_seed, &span.matched);
    }
    intent.duration_mins = Some(duration);

    let cleaned = TRAILING_CONNECTOR_RE.replace(&title_seed, "");
    let cleaned = MULTI_SPACE_RE.replace_all(&cleaned, " ");
    let title = cleaned.trim().to_string();

    if let Some(caps) = LOCATION_RE.captures(lower) {
        let location = caps[1].trim();
        if !location.is_empty() {
            intent.location = Some(location.to_string());
        }
    }

    intent.action = Some(if lower.contains("reschedule") || lower.contains("move") {
        IntentAction::Reschedule
    } else if lower.contains("cancel") || lower.contains("delete") {
        IntentAction::Delete
    } else {
        IntentAction::Create
    });

    // A usable title has at least two characters and at least one
    // alphanumeric one; otherwise ask. The time check is independent, so
    // both clarifications can apply to the same utterance.
    let title_usable = title.chars().count() >= 2 && title.chars().any(|c| c.is_ascii_alphanumeric());
    if title_usable {
        intent.title = Some(title);
    } else {
        intent
            .clarification_needed
            .push(config::PROMPT_EVENT_TITLE.to_string());
    }
    if intent.start_time.is_none() {
        intent
            .clarification_needed
            .push(config::PROMPT_EVENT_TIME.to_string());
    }

    intent.confidence = match (&intent.title, intent.start_time) {
        (Some(t), Some(_)) if t.chars().count() > 2 => config::CONF_EVENT_FULL,
        (None, None) => config::CONF_EVENT_BASELINE,
        _ => config::CONF_EVENT_PARTIAL,
    };

    intent
}
