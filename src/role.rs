use clap::ValueEnum;

/// Who is logging in, which decides the dashboard that gets mounted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum, strum::Display)]
pub enum Role {
    /// Child view: profile and attendance only.
    Child,
    /// Parent view: the full record including grades.
    Parent,
}

impl Role {
    /// Text of the login button that selects this role.
    pub fn button_label(&self) -> &'static str {
        match self {
            Role::Child => "Login as Child",
            Role::Parent => "Login as Parent",
        }
    }

    /// Title shown in the dashboard header.
    pub fn dashboard_title(&self) -> &'static str {
        match self {
            Role::Child => "CHILD DASHBOARD",
            Role::Parent => "PARENT DASHBOARD",
        }
    }
}
