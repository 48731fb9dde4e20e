//! Login screen module
//!
//! The credential fields are placeholders: nothing reads them when a login
//! button is pressed.

use crate::consts::cli_consts::LOGIN_TITLE;
use crate::role::Role;
use crate::ui::app::UIConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Widget that currently receives keyboard input.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
pub enum Focus {
    #[default]
    Username,
    Password,
    ChildButton,
    ParentButton,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Username,
        Focus::Password,
        Focus::ChildButton,
        Focus::ParentButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The role a focused button logs in as.
    fn button_role(self) -> Option<Role> {
        match self {
            Focus::ChildButton => Some(Role::Child),
            Focus::ParentButton => Some(Role::Parent),
            Focus::Username | Focus::Password => None,
        }
    }
}

/// What a key press on the login screen asks the app to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoginAction {
    None,
    FocusChanged,
    Press(Role),
}

/// Contents of the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    username: String,
    password: String,
    focus: Focus,
}

impl LoginState {
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password as displayed, one `*` per character.
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Username => Some(&mut self.username),
            Focus::Password => Some(&mut self.password),
            Focus::ChildButton | Focus::ParentButton => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                LoginAction::FocusChanged
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                LoginAction::FocusChanged
            }
            KeyCode::Enter => match self.focus.button_role() {
                Some(role) => LoginAction::Press(role),
                None => {
                    self.focus = self.focus.next();
                    LoginAction::FocusChanged
                }
            },
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
                LoginAction::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                }
                LoginAction::None
            }
            _ => LoginAction::None,
        }
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn input_field<'a>(title: &'a str, value: String, hint: &'a str, focused: bool) -> Paragraph<'a> {
    let line = if value.is_empty() {
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(value)
    };
    Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focus_style(focused)),
    )
}

fn button(role: Role, focused: bool) -> Paragraph<'static> {
    let style = if focused {
        focus_style(true).add_modifier(Modifier::REVERSED)
    } else {
        focus_style(false)
    };
    Paragraph::new(role.button_label())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(focus_style(focused)),
        )
}

/// Centers a fixed-width column inside `area`.
fn centered_column(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

/// Renders the login form: title, two inputs, two buttons and key help.
pub fn render_login(f: &mut Frame, state: &LoginState, ui_config: &UIConfig) {
    if ui_config.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let column = centered_column(f.area(), 44);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2), // Title
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(3), // Child button
            Constraint::Length(3), // Parent button
            Constraint::Length(2), // Help
            Constraint::Fill(1),
        ])
        .split(column);

    let title = Paragraph::new(LOGIN_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[1]);

    let focus = state.focus;
    f.render_widget(
        input_field(
            "Username",
            state.username().to_string(),
            "Enter Username",
            focus == Focus::Username,
        ),
        chunks[2],
    );
    f.render_widget(
        input_field(
            "Password",
            state.masked_password(),
            "Enter Password",
            focus == Focus::Password,
        ),
        chunks[3],
    );
    f.render_widget(button(Role::Child, focus == Focus::ChildButton), chunks[4]);
    f.render_widget(button(Role::Parent, focus == Focus::ParentButton), chunks[5]);

    let help = Paragraph::new("[Tab] Next | [Enter] Select | [Esc] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[6]);

    // Place the terminal cursor at the end of the focused input
    let cursor_target = match focus {
        Focus::Username => Some((chunks[2], state.username.chars().count())),
        Focus::Password => Some((chunks[3], state.password.chars().count())),
        Focus::ChildButton | Focus::ParentButton => None,
    };
    if let Some((area, len)) = cursor_target {
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(len as u16).min(max_x);
        f.set_cursor_position((x, area.y + 1));
    }
}
