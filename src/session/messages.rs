//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Message text with its colored prefix.
    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        println!("{}", self.render());
    }

    /// Print the message to stderr, keeping stdout for command output
    pub fn eprint(&self) {
        eprintln!("{}", self.render());
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str) {
    SessionMessage::info(format!("Starting ChildInfo in {} mode", mode)).print();
}

/// Print session startup message to stderr
pub fn eprint_session_starting(mode: &str) {
    SessionMessage::info(format!("Starting ChildInfo in {} mode", mode)).eprint();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("ChildInfo exited successfully").print();
}
