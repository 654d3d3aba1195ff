//! Login screen: username and password form with Register and Login buttons.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::tui::screen::{KeyOutcome, Screen};
use crate::tui::ui;
use crate::{Action, FlowEvent, Message};

/// Focusable elements of the login form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Username,
    Password,
    Register,
    Login,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Register,
            Self::Register => Self::Login,
            Self::Login => Self::Username,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Username => Self::Login,
            Self::Password => Self::Username,
            Self::Register => Self::Password,
            Self::Login => Self::Register,
        }
    }
}

/// State for the login / register form.
#[derive(Debug)]
pub struct LoginScreen {
    username: String,
    password: String,
    focus: Focus,
    message: Option<Message>,
}

impl LoginScreen {
    /// Creates an empty login form, optionally showing a notice.
    #[instrument]
    pub fn new(message: Option<Message>) -> Self {
        debug!("Initializing LoginScreen");
        Self {
            username: String::new(),
            password: String::new(),
            focus: Focus::Username,
            message,
        }
    }

    fn login(&self) -> KeyOutcome {
        KeyOutcome::Submit(Action::Login {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    fn register(&self) -> KeyOutcome {
        KeyOutcome::Submit(Action::Register {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    fn field_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn button_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl Screen for LoginScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = ui::center_rect(frame.area(), 72, 21);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        ui::draw_title(frame, chunks[0], "NUMBER GUESSING GAME");

        let username = Paragraph::new(self.username.as_str())
            .style(self.field_style(Focus::Username))
            .block(Block::default().borders(Borders::ALL).title("Username"));
        frame.render_widget(username, chunks[1]);

        let masked = "*".repeat(self.password.chars().count());
        let password = Paragraph::new(masked)
            .style(self.field_style(Focus::Password))
            .block(Block::default().borders(Borders::ALL).title("Password"));
        frame.render_widget(password, chunks[2]);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        let register = Paragraph::new("Register")
            .style(self.button_style(Focus::Register))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(register, buttons[0]);
        let login = Paragraph::new("Login")
            .style(self.button_style(Focus::Login))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(login, buttons[1]);

        ui::draw_message(frame, chunks[4], self.message.as_ref());
        ui::draw_help(
            frame,
            chunks[5],
            "Tab/↑↓: Move | Enter: Confirm | Esc: Quit",
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                KeyOutcome::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                KeyOutcome::Stay
            }
            KeyCode::Enter => match self.focus {
                Focus::Username => {
                    self.focus = Focus::Password;
                    KeyOutcome::Stay
                }
                Focus::Password | Focus::Login => self.login(),
                Focus::Register => self.register(),
            },
            KeyCode::Backspace => {
                match self.focus {
                    Focus::Username => {
                        self.username.pop();
                    }
                    Focus::Password => {
                        self.password.pop();
                    }
                    Focus::Register | Focus::Login => {}
                }
                KeyOutcome::Stay
            }
            KeyCode::Char(c) => {
                match self.focus {
                    Focus::Username => self.username.push(c),
                    Focus::Password => self.password.push(c),
                    Focus::Register | Focus::Login => {}
                }
                KeyOutcome::Stay
            }
            _ => KeyOutcome::Stay,
        }
    }

    #[instrument(skip(self))]
    fn apply(&mut self, event: &FlowEvent) {
        if let FlowEvent::ShowMessage(message) = event {
            self.message = Some(message.clone());
        }
    }
}
