//! Headless mode execution
//!
//! Mounts a dashboard without the interactive login and writes its fields to
//! stdout, as plain lines or JSON. Session messages go to stderr.

use super::messages::eprint_session_starting;
use crate::error::AppError;
use crate::record::ChildRecord;
use crate::role::Role;
use crate::ui::{App, UIConfig};
use std::io::{self, Write};

/// Runs the application in headless mode
///
/// # Arguments
/// * `role` - Which login button to press. Required.
/// * `json` - Emit a JSON array of fields instead of `Label: value` lines.
pub async fn run_headless_mode(role: Option<Role>, json: bool) -> Result<(), AppError> {
    let role = role.ok_or(AppError::MissingRole)?;
    eprint_session_starting("headless");

    let stdout = io::stdout();
    write_dashboard(&mut stdout.lock(), role, json)
}

/// Logs in as `role` and writes the mounted dashboard's fields to `out`.
pub fn write_dashboard<W: Write>(out: &mut W, role: Role, json: bool) -> Result<(), AppError> {
    let mut app = App::new(ChildRecord::sample(), UIConfig::default());
    app.login(role);
    let fields = app.current_screen().fields().unwrap_or_default();

    if json {
        serde_json::to_writer_pretty(&mut *out, fields)?;
        writeln!(out)?;
    } else {
        for field in fields {
            writeln!(out, "{}", field)?;
        }
    }
    Ok(())
}

/// Writes the whole sample record as pretty JSON to stdout.
pub fn print_record() -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, ChildRecord::sample())?;
    writeln!(out)?;
    Ok(())
}
