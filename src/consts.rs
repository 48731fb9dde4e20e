pub mod cli_consts {
    //! Application Constants

    use std::time::Duration;

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long the UI loop waits for a key event before redrawing.
    pub const INPUT_POLL_INTERVAL_MS: u64 = 100;

    /// Helper function to get the input poll interval
    pub const fn input_poll_interval() -> Duration {
        Duration::from_millis(INPUT_POLL_INTERVAL_MS)
    }

    /// Title shown above the login form.
    pub const LOGIN_TITLE: &str = "ChildInfo Login";
}
