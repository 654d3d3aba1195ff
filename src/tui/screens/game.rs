//! Game screen: numeric input, hint line and attempt counter.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_numbers::{MAX_ATTEMPTS, MAX_SECRET, MIN_SECRET};
use tracing::{debug, instrument};

use crate::tui::screen::{KeyOutcome, Screen};
use crate::tui::ui;
use crate::{Action, FlowEvent, Message};

/// State for the guess form.
#[derive(Debug)]
pub struct GameScreen {
    username: String,
    input: String,
    attempts: u32,
    max_attempts: u32,
    message: Option<Message>,
}

impl GameScreen {
    /// Creates the guess form for `username`.
    #[instrument]
    pub fn new(username: String) -> Self {
        debug!("Initializing GameScreen");
        Self {
            username,
            input: String::new(),
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
            message: None,
        }
    }
}

impl Screen for GameScreen {
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

        ui::draw_title(frame, chunks[0], "Let's Make a Guess!");

        let player = Paragraph::new(format!(
            "Player: {}   Enter a number between {} and {}:",
            self.username, MIN_SECRET, MAX_SECRET
        ))
        .alignment(Alignment::Center);
        frame.render_widget(player, chunks[1]);

        let input = Paragraph::new(self.input.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Your guess"));
        frame.render_widget(input, chunks[2]);

        ui::draw_message(frame, chunks[3], self.message.as_ref());

        let attempts = Paragraph::new(format!(
            "Attempts: {} / {}",
            self.attempts, self.max_attempts
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(attempts, chunks[4]);

        ui::draw_help(frame, chunks[5], "Type a number | Enter: Guess | Esc: Log out");
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Enter => KeyOutcome::Submit(Action::Guess(self.input.clone())),
            KeyCode::Esc => KeyOutcome::Submit(Action::Logout),
            KeyCode::Backspace => {
                self.input.pop();
                KeyOutcome::Stay
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                KeyOutcome::Stay
            }
            _ => KeyOutcome::Stay,
        }
    }

    #[instrument(skip(self))]
    fn apply(&mut self, event: &FlowEvent) {
        match event {
            FlowEvent::ShowMessage(message) => self.message = Some(message.clone()),
            // A counted attempt means the input was accepted; rejected input stays for editing.
            FlowEvent::ShowAttempts { used, max } => {
                if *used > self.attempts {
                    self.input.clear();
                }
                self.attempts = *used;
                self.max_attempts = *max;
            }
            FlowEvent::Navigate(_) | FlowEvent::ShowOutcome(_) => {}
        }
    }
}
