// Event extraction tests: titles, spans, locations, actions, confidence.
use chrono::{NaiveDate, NaiveDateTime};
use parlance::config;
use parlance::model::{IntentAction, IntentKind};
use parlance::parse_at;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

// 2026-08-25 is a Tuesday.
fn reference() -> NaiveDateTime {
    at(2026, 8, 25, 9, 0)
}

#[test]
fn test_meeting_tomorrow_at_3pm() {
    let intent = parse_at("Meeting tomorrow at 3pm", reference());
    assert_eq!(intent.kind, IntentKind::Event);
    assert_eq!(intent.action, Some(IntentAction::Create));
    assert_eq!(intent.title.as_deref(), Some("Meeting"));
    assert_eq!(intent.start_time, Some(at(2026, 8, 26, 15, 0)));
    // No explicit end: the default duration fills it in.
    assert_eq!(intent.end_time, Some(at(2026, 8, 26, 16, 0)));
    assert_eq!(intent.duration_mins, Some(config::DEFAULT_EVENT_DURATION_MINS));
    assert_eq!(intent.confidence, config::CONF_EVENT_FULL);
    assert!(intent.clarification_needed.is_empty());
}

#[test]
fn test_action_verb_and_span_stripped_from_title() {
    let intent = parse_at("Schedule design review tomorrow at 10am", reference());
    assert_eq!(intent.title.as_deref(), Some("design review"));
    assert_eq!(intent.start_time, Some(at(2026, 8, 26, 10, 0)));
}

#[test]
fn test_location_extraction() {
    let intent = parse_at("Dinner at luigis tomorrow 7pm", reference());
    assert_eq!(intent.location.as_deref(), Some("luigis"));
    assert_eq!(intent.start_time, Some(at(2026, 8, 26, 19, 0)));
}

#[test]
fn test_explicit_range_sets_duration() {
    let intent = parse_at("Review 2pm-4pm tomorrow", reference());
    assert_eq!(intent.start_time, Some(at(2026, 8, 26, 14, 0)));
    assert_eq!(intent.end_time, Some(at(2026, 8, 26, 16, 0)));
    assert_eq!(intent.duration_mins, Some(120));
}

#[test]
fn test_duration_hint_in_text() {
    let intent = parse_at("Block 2 hour focus time tomorrow", reference());
    assert_eq!(intent.duration_mins, Some(120));
    let start = intent.start_time.unwrap();
    let end = intent.end_time.unwrap();
    assert_eq!((end - start).num_minutes(), 120);
}

#[test]
fn test_reschedule_action() {
    let intent = parse_at("move my meeting to tomorrow", reference());
    assert_eq!(intent.action, Some(IntentAction::Reschedule));
}

#[test]
fn test_delete_action() {
    let intent = parse_at("cancel my meeting tomorrow", reference());
    assert_eq!(intent.action, Some(IntentAction::Delete));
}

#[test]
fn test_missing_time_asks_for_one() {
    let intent = parse_at("schedule team retro", reference());
    assert_eq!(intent.kind, IntentKind::Event);
    assert_eq!(intent.title.as_deref(), Some("team retro"));
    assert_eq!(intent.start_time, None);
    assert_eq!(intent.confidence, config::CONF_EVENT_PARTIAL);
    assert_eq!(intent.clarification_needed, vec![config::PROMPT_EVENT_TIME.to_string()]);
}

#[test]
fn test_punctuation_only_title_is_unusable() {
    let intent = parse_at("schedule !!! tomorrow", reference());
    assert_eq!(intent.title, None);
    assert_eq!(intent.confidence, config::CONF_EVENT_PARTIAL);
    assert_eq!(intent.clarification_needed, vec![config::PROMPT_EVENT_TITLE.to_string()]);
}

#[test]
fn test_nothing_usable_asks_for_both() {
    let intent = parse_at("schedule !!!", reference());
    assert_eq!(intent.title, None);
    assert_eq!(intent.start_time, None);
    assert_eq!(intent.confidence, config::CONF_EVENT_BASELINE);
    // Title prompt always precedes the time prompt.
    assert_eq!(
        intent.clarification_needed,
        vec![
            config::PROMPT_EVENT_TITLE.to_string(),
            config::PROMPT_EVENT_TIME.to_string()
        ]
    );
}

#[test]
fn test_end_always_follows_start() {
    for input in [
        "Meeting tomorrow at 3pm",
        "Review 2pm-4pm tomorrow",
        "Block 4 hour offsite next friday",
        "call mom in 90 minutes",
        "standup at 9:15am tomorrow",
    ] {
        let intent = parse_at(input, reference());
        let start = intent.start_time.expect(input);
        if let Some(end) = intent.end_time {
            assert!(end > start, "input: {}", input);
        }
    }
}
