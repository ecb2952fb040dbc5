// File: ./src/model/display.rs
use crate::config;
use crate::model::intent::{IntentKind, ParsedIntent};

/// Rendering helpers for a parsed intent. Pure presentation, no side
/// effects; the generic fallback doubles as the "I didn't get that" reply.
pub trait IntentDisplay {
    fn confirmation(&self) -> String;
}

impl IntentDisplay for ParsedIntent {
    fn confirmation(&self) -> String {
        match self.kind {
            IntentKind::Event => {
                if let (Some(title), Some(start)) = (&self.title, self.start_time) {
                    let mut out = format!(
                        "✅ Scheduled \"{}\" for {}",
                        title,
                        start.format("%a, %b %-d, %-I:%M %p")
                    );
                    if let Some(end) = self.end_time {
                        out.push_str(&format!(" - {}", end.format("%-I:%M %p")));
                    }
                    if let Some(loc) = &self.location {
                        out.push_str(&format!(" at {}", loc));
                    }
                    return out;
                }
                config::PROMPT_FALLBACK.to_string()
            }
            IntentKind::Expense => {
                if let Some(amount) = self.amount {
                    let mut out = format!("💰 Logged ${:.2}", amount);
                    if let Some(desc) = &self.description {
                        out.push_str(&format!(" for {}", desc));
                    }
                    let category = self
                        .category
                        .as_deref()
                        .unwrap_or(config::DEFAULT_EXPENSE_CATEGORY);
                    out.push_str(&format!(" ({})", category));
                    return out;
                }
                config::PROMPT_FALLBACK.to_string()
            }
            IntentKind::Habit => {
                if let Some(title) = &self.title {
                    return format!("🎯 Created \"{}\" habit!", title);
                }
                config::PROMPT_FALLBACK.to_string()
            }
            IntentKind::Query | IntentKind::Unknown => config::PROMPT_FALLBACK.to_string(),
        }
    }
}

/// Free-function form of [`IntentDisplay::confirmation`]; the second of the
/// crate's two public entry points.
pub fn format_confirmation(intent: &ParsedIntent) -> String {
    intent.confirmation()
}
