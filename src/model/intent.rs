// File: ./src/model/intent.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Top-level classification of an utterance. Mutually exclusive; assigned
/// exactly once per parse.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Event,
    Expense,
    Habit,
    Query,
    Unknown,
}

/// What the user wants done with the matched entity. Only meaningful for
/// event/expense/habit intents.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum IntentAction {
    #[default]
    Create,
    Update,
    Delete,
    Reschedule,
}

/// Sub-classification for `IntentKind::Query`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Greeting,
    Calendar,
    Help,
    Unclear,
}

/// The single output of a parse call. Built fresh each time, never mutated
/// by the parser after it is returned, and holds no identity beyond the
/// caller's use of the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub kind: IntentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<IntentAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_kind: Option<QueryKind>,
    /// Resolved date for calendar queries ("what's on tomorrow").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Event start/end as local wall-clock times. Whenever both are set,
    /// `end_time > start_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_mins: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Heuristic completeness score in [0, 1].
    pub confidence: f64,
    /// Follow-up questions for missing required fields, in the order the
    /// checks ran. Empty when nothing is missing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clarification_needed: Vec<String>,
}

impl ParsedIntent {
    /// Blank intent of the given kind; extractors fill in what they find.
    pub fn new(kind: IntentKind) -> Self {
        Self {
            kind,
            action: None,
            query_kind: None,
            query_date: None,
            title: None,
            start_time: None,
            end_time: None,
            duration_mins: None,
            location: None,
            description: None,
            amount: None,
            category: None,
            confidence: 0.0,
            clarification_needed: Vec::new(),
        }
    }

    pub fn query(query_kind: QueryKind, confidence: f64) -> Self {
        let mut intent = Self::new(IntentKind::Query);
        intent.query_kind = Some(query_kind);
        intent.confidence = confidence;
        intent
    }

    /// True when the parse produced everything its intent kind requires.
    pub fn is_complete(&self) -> bool {
        self.clarification_needed.is_empty()
    }
}
