//! Dashboard state management

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as SessionEvent;
use crate::fields::{Field, dashboard_fields};
use crate::record::ChildRecord;
use crate::role::Role;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;

/// State for a mounted dashboard. The fields are computed once at mount time.
#[derive(Debug)]
pub struct DashboardState {
    /// Which view this dashboard renders.
    pub role: Role,
    /// Labelled record values, in display order.
    pub fields: Vec<Field>,
    /// Activity logs for display
    pub activity_logs: VecDeque<SessionEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    pub fn new(role: Role, record: &ChildRecord, ui_config: &UIConfig) -> Self {
        Self {
            role,
            fields: dashboard_fields(role, record),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: SessionEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
