// File: ./src/parser/dates.rs
//! Date and time extraction.
//!
//! Two contracts live here. `extract_date` is the narrow relative-date
//! scanner used standalone for calendar queries ("what's on next monday").
//! `extract_datetime_span` is the broader grammar for the event path:
//! date phrase and/or clock time, optional range, and relative offsets
//! ("in 90 minutes"), returning the exact matched substring so the caller
//! can strip it from the residual title.
//!
//! Rule for bare weekday names ("monday" with no qualifier): the calendar
//! path does not resolve them at all, the event path resolves them to the
//! next occurrence strictly after the reference. Both paths roll "next
//! monday" forward a full week when the reference is itself a Monday.

use crate::config;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

const TIME_CORE: &str = r"\d{1,2}:\d{2}\s*(?:am|pm)?|\d{1,2}\s*(?:am|pm)";
const DATE_CORE: &str = r"(?:next\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)|tomorrow|today|(?:in|after)\s+\d{1,3}\s+days?|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{1,2}(?:,?\s+\d{4})?|\d{1,2}/\d{1,2}(?:/\d{4})?";

static TOMORROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btomorrow\b").expect("tomorrow pattern must compile"));
static TODAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btoday\b").expect("today pattern must compile"));
static NEXT_WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bnext\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
        .expect("next-weekday pattern must compile")
});
static IN_DAYS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:in|after)\s+(\d{1,3})\s+days?\b").expect("in-days pattern must compile")
});
static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{1,2})(?:,?\s+(\d{4}))?\b")
        .expect("month-day pattern must compile")
});
static SLASH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}))?\b").expect("slash-date pattern must compile")
});

// One combined pattern so the event path gets the whole date/time phrase
// back as a single contiguous match. Alternatives, in order: relative
// offset, date phrase with optional time or range, bare time range, bare
// time. The regex engine is linear-time, which keeps worst-case cost
// bounded on hostile input.
static SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)\b(?:in\s+(?P<reln>\d{{1,4}})\s+(?P<relu>minutes?|mins?|hours?|hrs?)\b|(?P<date>{date})(?:\s*,?\s+(?:at\s+|from\s+)?(?P<t1>(?:{time}))(?:\s*(?:-|to|until)\s*(?P<t2>(?:{time})))?)?|(?:at\s+|from\s+)?(?P<t1b>(?:{time})|\d{{1,2}})\s*(?:-|to|until)\s*(?P<t2b>(?:{time}))(?:\s+(?:on\s+)?(?P<date2>{date}))?|(?:at\s+)?(?P<t1c>(?:{time}))(?:\s+(?:on\s+)?(?P<date3>{date}))?)",
        date = DATE_CORE,
        time = TIME_CORE,
    );
    Regex::new(&pattern).expect("span grammar must compile")
});

/// A recognized date/time phrase within an utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeSpan {
    pub start: NaiveDateTime,
    /// Explicit end time, only when the utterance stated a range.
    pub end: Option<NaiveDateTime>,
    /// The exact substring that matched, for residual-title stripping.
    pub matched: String,
}

fn weekday_from_name(s: &str) -> Option<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn month_from_name(s: &str) -> Option<u32> {
    let lower = s.to_lowercase();
    let key = lower.get(..3)?;
    match key {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Next occurrence of `target` strictly after `from`. Same weekday rolls
/// forward a full week, never returning `from` itself.
fn next_weekday_after(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut d = from + Duration::days(1);
    while d.weekday() != target {
        d += Duration::days(1);
    }
    d
}

fn month_day_from_captures(caps: &regex::Captures, reference: NaiveDate) -> Option<NaiveDate> {
    let month = month_from_name(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = match caps.get(3) {
        Some(y) => y.as_str().parse().ok()?,
        None => reference.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn slash_date_from_captures(caps: &regex::Captures, reference: NaiveDate) -> Option<NaiveDate> {
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = match caps.get(3) {
        Some(y) => y.as_str().parse().ok()?,
        None => reference.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Find a calendar date in free text, relative to `reference`. Evaluation
/// order is fixed, first match wins; returns `None` when nothing matches.
pub fn extract_date(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    if TOMORROW_RE.is_match(text) {
        return Some(reference + Duration::days(1));
    }
    if TODAY_RE.is_match(text) {
        return Some(reference);
    }
    if let Some(caps) = NEXT_WEEKDAY_RE.captures(text) {
        let target = weekday_from_name(&caps[1])?;
        return Some(next_weekday_after(reference, target));
    }
    if let Some(caps) = IN_DAYS_RE.captures(text) {
        let days: i64 = caps[1].parse().ok()?;
        return Some(reference + Duration::days(days));
    }
    if let Some(caps) = MONTH_DAY_RE.captures(text) {
        return month_day_from_captures(&caps, reference);
    }
    if let Some(caps) = SLASH_DATE_RE.captures(text) {
        return slash_date_from_captures(&caps, reference);
    }
    None
}

/// Resolve the date capture of the span grammar. Unlike `extract_date`,
/// bare weekday names are valid here.
fn resolve_date_phrase(phrase: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let lower = phrase.trim().to_lowercase();
    if let Some(rest) = lower.strip_prefix("next ") {
        if let Some(target) = weekday_from_name(rest) {
            return Some(next_weekday_after(reference, target));
        }
    }
    if lower == "tomorrow" {
        return Some(reference + Duration::days(1));
    }
    if lower == "today" {
        return Some(reference);
    }
    if let Some(caps) = IN_DAYS_RE.captures(&lower) {
        let days: i64 = caps[1].parse().ok()?;
        return Some(reference + Duration::days(days));
    }
    if let Some(caps) = MONTH_DAY_RE.captures(&lower) {
        return month_day_from_captures(&caps, reference);
    }
    if let Some(caps) = SLASH_DATE_RE.captures(&lower) {
        return slash_date_from_captures(&caps, reference);
    }
    if let Some(target) = weekday_from_name(&lower) {
        return Some(next_weekday_after(reference, target));
    }
    None
}

/// Parse a clock-time token ("3pm", "3:30pm", "15:00", bare "2" from a
/// range start). Returns the time plus the stated meridiem, if any.
fn parse_clock_time(raw: &str) -> Option<(NaiveTime, Option<bool>)> {
    let compact: String = raw.to_lowercase().split_whitespace().collect();

    let parse_12h = |s: &str, is_pm: bool| -> Option<NaiveTime> {
        let (h, m) = if let Some((h_str, m_str)) = s.split_once(':') {
            (h_str.parse::<u32>().ok()?, m_str.parse::<u32>().ok()?)
        } else {
            (s.parse::<u32>().ok()?, 0)
        };
        if !(1..=12).contains(&h) || m > 59 {
            return None;
        }
        let h_24 = if h == 12 {
            if is_pm { 12 } else { 0 }
        } else if is_pm {
            h + 12
        } else {
            h
        };
        NaiveTime::from_hms_opt(h_24, m, 0)
    };

    if let Some(stripped) = compact.strip_suffix("pm") {
        return parse_12h(stripped, true).map(|t| (t, Some(true)));
    }
    if let Some(stripped) = compact.strip_suffix("am") {
        return parse_12h(stripped, false).map(|t| (t, Some(false)));
    }
    if let Some((h_str, m_str)) = compact.split_once(':') {
        let h = h_str.parse::<u32>().ok()?;
        let m = m_str.parse::<u32>().ok()?;
        return NaiveTime::from_hms_opt(h, m, 0).map(|t| (t, None));
    }
    // Bare hour, reachable only as a range start ("2 to 4pm").
    let h = compact.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(h, 0, 0).map(|t| (t, None))
}

/// Recognize the first date/time phrase in `text` relative to `reference`.
///
/// A date without a time starts at midnight; a time without a date falls
/// on the reference day. An explicit range yields `end`, guaranteed to be
/// after `start` (a non-positive range is dropped rather than returned).
pub fn extract_datetime_span(text: &str, reference: NaiveDateTime) -> Option<DateTimeSpan> {
    let caps = SPAN_RE.captures(text)?;
    let matched = caps.get(0)?.as_str().trim().to_string();

    // "in 90 minutes" / "in 2 hours"
    if let Some(amount) = caps.name("reln") {
        let amount: i64 = amount.as_str().parse().ok()?;
        let unit = caps.name("relu")?.as_str().to_lowercase();
        let minutes = if unit.starts_with('h') { amount * 60 } else { amount };
        return Some(DateTimeSpan {
            start: reference + Duration::minutes(minutes),
            end: None,
            matched,
        });
    }

    let date_capture = caps
        .name("date")
        .or_else(|| caps.name("date2"))
        .or_else(|| caps.name("date3"));
    let date = match date_capture {
        Some(phrase) => Some(resolve_date_phrase(phrase.as_str(), reference.date())?),
        None => None,
    };
    let t1 = caps.name("t1").or_else(|| caps.name("t1b")).or_else(|| caps.name("t1c"));
    let t2 = caps.name("t2").or_else(|| caps.name("t2b"));

    let day = match (date, t1) {
        (Some(d), _) => d,
        (None, Some(_)) => reference.date(),
        (None, None) => return None,
    };

    let (start_time, start_meridiem) = match t1 {
        Some(m) => parse_clock_time(m.as_str())?,
        None => (NaiveTime::MIN, None),
    };
    let mut start = day.and_time(start_time);
    let mut end = None;

    if let Some(m2) = t2 {
        let (end_time, end_meridiem) = parse_clock_time(m2.as_str())?;
        // A bare range start borrows the end's pm meridiem when that keeps
        // the range positive ("2 to 4pm" means 14:00-16:00, "10 to 2pm"
        // stays 10:00-14:00).
        if start_meridiem.is_none()
            && end_meridiem == Some(true)
            && start_time.hour() < 12
            && start_time + Duration::hours(12) < end_time
        {
            start = day.and_time(start_time + Duration::hours(12));
        }
        let end_dt = day.and_time(end_time);
        if end_dt > start {
            end = Some(end_dt);
        }
    }

    Some(DateTimeSpan { start, end, matched })
}

/// Event length in minutes from textual hints, falling back to the
/// configured default.
pub fn duration_hint_mins(lower: &str) -> i64 {
    if lower.contains("30 min") || lower.contains("half hour") {
        30
    } else if lower.contains("2 hour") || lower.contains("2h") {
        120
    } else if lower.contains("4 hour") || lower.contains("4h") {
        240
    } else {
        config::DEFAULT_EVENT_DURATION_MINS
    }
}
