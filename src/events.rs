//! Session Events
//!
//! Timestamped records of what happened during a session, shown in the
//! dashboard activity panel and echoed to the `log` facade.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// The session started or a screen was mounted.
    Startup,
    /// A login button was pressed.
    Login,
    /// Input on the current screen that did not change screens.
    Input,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(msg: impl Into<String>, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg: msg.into(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn info(msg: impl Into<String>, event_type: EventType) -> Self {
        Self::new(msg, event_type, LogLevel::Info)
    }

    pub fn debug(msg: impl Into<String>, event_type: EventType) -> Self {
        Self::new(msg, event_type, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Forwards the event to whatever `log` backend is installed.
    pub fn emit(&self) {
        log::log!(
            log::LevelFilter::from(self.log_level)
                .to_level()
                .unwrap_or(log::Level::Info),
            "{}",
            self
        );
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
