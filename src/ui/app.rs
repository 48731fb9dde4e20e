//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, input_poll_interval};
use crate::events::{Event as SessionEvent, EventType};
use crate::fields::Field;
use crate::record::ChildRecord;
use crate::role::Role;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::login::{LoginAction, LoginState, render_login};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application. Exactly one is mounted at a time.
#[derive(Debug)]
pub enum Screen {
    /// Login screen with the placeholder credential form.
    Login(LoginState),
    /// Read-only child view of the record.
    ChildDashboard(Box<DashboardState>),
    /// Read-only parent view of the full record.
    ParentDashboard(Box<DashboardState>),
}

impl Screen {
    /// Fields rendered by the screen, if it is a dashboard.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Screen::Login(_) => None,
            Screen::ChildDashboard(state) | Screen::ParentDashboard(state) => {
                Some(state.fields.as_slice())
            }
        }
    }

    fn is_dashboard(&self) -> bool {
        !matches!(self, Screen::Login(_))
    }
}

/// Whether the UI loop should keep running after a key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The record every dashboard reads from.
    record: &'static ChildRecord,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Events logged before a dashboard was mounted.
    pending_events: VecDeque<SessionEvent>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application with the login screen mounted.
    pub fn new(record: &'static ChildRecord, ui_config: UIConfig) -> Self {
        let mut app = Self {
            record,
            current_screen: Screen::Login(LoginState::default()),
            pending_events: VecDeque::new(),
            ui_config,
        };
        app.log_event(SessionEvent::info(
            "Login screen mounted",
            EventType::Startup,
        ));
        app
    }

    pub fn current_screen(&self) -> &Screen {
        &self.current_screen
    }

    /// Replaces the login screen with the dashboard for `role`.
    ///
    /// The login form is discarded without reading its fields. Dashboards are
    /// terminal, so pressing again once a dashboard is mounted does nothing.
    pub fn login(&mut self, role: Role) {
        if self.current_screen.is_dashboard() {
            return;
        }

        let mut state = DashboardState::new(role, self.record, &self.ui_config);
        for event in self.pending_events.drain(..) {
            state.add_to_activity_log(event);
        }
        self.current_screen = match role {
            Role::Child => Screen::ChildDashboard(Box::new(state)),
            Role::Parent => Screen::ParentDashboard(Box::new(state)),
        };
        self.log_event(SessionEvent::info(
            format!("Logged in as {}", role),
            EventType::Login,
        ));
    }

    /// Handles a single key press and reports whether the loop should continue.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }

        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            self.log_event(SessionEvent::info("Quit requested", EventType::Shutdown));
            return Control::Quit;
        }

        match &mut self.current_screen {
            Screen::Login(login) => match login.handle_key(key) {
                LoginAction::Press(role) => self.login(role),
                LoginAction::FocusChanged => {
                    let focus = login.focus();
                    self.log_event(SessionEvent::debug(
                        format!("Focus moved to {}", focus),
                        EventType::Input,
                    ));
                }
                LoginAction::None => {}
            },
            Screen::ChildDashboard(_) | Screen::ParentDashboard(_) => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    self.log_event(SessionEvent::info("Quit requested", EventType::Shutdown));
                    return Control::Quit;
                }
            }
        }
        Control::Continue
    }

    fn log_event(&mut self, event: SessionEvent) {
        event.emit();
        match &mut self.current_screen {
            Screen::Login(_) => {
                if self.pending_events.len() >= MAX_ACTIVITY_LOGS {
                    self.pending_events.pop_front();
                }
                self.pending_events.push_back(event);
            }
            Screen::ChildDashboard(state) | Screen::ParentDashboard(state) => {
                state.add_to_activity_log(event);
            }
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        if event::poll(input_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == Control::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
pub fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Login(login) => render_login(f, login, &app.ui_config),
        Screen::ChildDashboard(state) | Screen::ParentDashboard(state) => {
            render_dashboard(f, state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::login::Focus;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Tabs from the username field to the requested button and presses it.
    fn press_button(app: &mut App, role: Role) {
        let target = match role {
            Role::Child => Focus::ChildButton,
            Role::Parent => Focus::ParentButton,
        };
        for _ in 0..4 {
            if let Screen::Login(login) = app.current_screen() {
                if login.focus() == target {
                    break;
                }
            }
            app.handle_key(key(KeyCode::Tab));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn new_app() -> App {
        App::new(ChildRecord::sample(), UIConfig::default())
    }

    #[test]
    fn test_app_starts_on_login() {
        let app = new_app();
        assert!(matches!(app.current_screen(), Screen::Login(_)));
        assert!(app.current_screen().fields().is_none());
    }

    #[test]
    // Credentials are never checked, whatever the fields contain.
    fn test_child_button_mounts_child_dashboard_for_any_credentials() {
        for (username, password) in [("", ""), ("alice", ""), ("", "secret"), ("bob", "hunter2")] {
            let mut app = new_app();
            type_text(&mut app, username);
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, password);
            press_button(&mut app, Role::Child);
            assert!(
                matches!(app.current_screen(), Screen::ChildDashboard(_)),
                "credentials {:?}/{:?} did not reach child dashboard",
                username,
                password
            );
        }
    }

    #[test]
    fn test_parent_button_mounts_parent_dashboard() {
        let mut app = new_app();
        press_button(&mut app, Role::Parent);
        assert!(matches!(app.current_screen(), Screen::ParentDashboard(_)));
        assert_eq!(app.current_screen().fields().map(<[Field]>::len), Some(10));
    }

    #[test]
    // Dashboards have no way back to login and ignore ordinary keys.
    fn test_dashboards_are_terminal() {
        let mut app = new_app();
        app.login(Role::Child);
        for code in [KeyCode::Tab, KeyCode::Enter, KeyCode::Backspace, KeyCode::Char('x')] {
            assert_eq!(app.handle_key(key(code)), Control::Continue);
        }
        app.login(Role::Parent);
        assert!(matches!(app.current_screen(), Screen::ChildDashboard(_)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        // 'q' is text input on the login screen
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Control::Continue);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Control::Quit);

        let mut app = new_app();
        app.login(Role::Parent);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Control::Quit);

        let mut app = new_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Control::Quit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = new_app();
        let mut release = key(KeyCode::Esc);
        release.kind = KeyEventKind::Release;
        assert_eq!(app.handle_key(release), Control::Continue);
    }

    #[test]
    // Navigating many times never changes what the dashboards show.
    fn test_repeated_navigation_shows_same_record() {
        let first: Vec<Field> = {
            let mut app = new_app();
            app.login(Role::Parent);
            app.current_screen().fields().unwrap().to_vec()
        };
        for _ in 0..5 {
            let mut app = new_app();
            app.login(Role::Parent);
            assert_eq!(app.current_screen().fields().unwrap(), first.as_slice());
            assert_eq!(app.record, ChildRecord::sample());
        }
    }

    #[test]
    fn test_login_event_reaches_activity_log() {
        let mut app = new_app();
        app.login(Role::Child);
        let Screen::ChildDashboard(state) = app.current_screen() else {
            panic!("expected child dashboard");
        };
        let messages: Vec<&str> = state.activity_logs.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(messages, vec!["Login screen mounted", "Logged in as Child"]);
    }

    #[test]
    fn test_login_screen_renders_form() {
        let mut app = new_app();
        type_text(&mut app, "alice");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "pw");
        let text = rendered(&app);
        assert!(text.contains("ChildInfo Login"));
        assert!(text.contains("alice"));
        assert!(text.contains("**"));
        assert!(!text.contains("pw"));
        assert!(text.contains("Login as Child"));
        assert!(text.contains("Login as Parent"));
    }

    #[test]
    fn test_child_dashboard_renders_profile_only() {
        let mut app = new_app();
        app.login(Role::Child);
        let text = rendered(&app);
        assert!(text.contains("Name: John Doe"));
        assert!(text.contains("Overall Attendance: 85%"));
        assert!(!text.contains("CGPA:"));
        assert!(!text.contains("Marks:"));
    }

    #[test]
    fn test_parent_dashboard_renders_full_record() {
        let mut app = new_app();
        app.login(Role::Parent);
        let text = rendered(&app);
        assert!(text.contains("Name: John Doe"));
        assert!(text.contains("Marks: Math: 95, Science: 89, English: 92"));
        assert!(text.contains("Holidays: 10 Days"));
        assert!(text.contains("CGPA: 8.9"));
    }
}
