//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::{Event as SessionEvent, EventType};
use crate::logging::LogLevel;
use ratatui::prelude::Color;

/// Labels of the grade fields only parents see get a distinct color.
pub fn label_color(label: &str) -> Color {
    match label {
        "Marks" | "Total Grade" | "Holidays" | "CGPA" => Color::LightYellow,
        _ => Color::LightBlue,
    }
}

/// Get a ratatui color for an activity event
pub fn event_color(event: &SessionEvent) -> Color {
    match (event.event_type, event.log_level) {
        (_, LogLevel::Error) => Color::Red,
        (_, LogLevel::Warn) => Color::LightYellow,
        (EventType::Login, _) => Color::Green,
        (EventType::Shutdown, _) => Color::LightRed,
        (EventType::Startup, _) => Color::Cyan,
        (EventType::Input, _) => Color::DarkGray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
