//! Game-over screen: shows the outcome and offers replay or logout.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use strictly_numbers::GameOutcome;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::tui::screen::{KeyOutcome, Screen};
use crate::tui::ui;
use crate::{Action, FlowEvent};

/// Choices offered once a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
enum GameOverChoice {
    #[strum(to_string = "Play Again")]
    PlayAgain,
    #[strum(to_string = "Back to Login")]
    BackToLogin,
}

impl GameOverChoice {
    fn action(self) -> Action {
        match self {
            Self::PlayAgain => Action::Replay,
            Self::BackToLogin => Action::Logout,
        }
    }
}

/// State for the end-of-game choice.
#[derive(Debug)]
pub struct GameOverScreen {
    outcome: Option<GameOutcome>,
    list_state: ListState,
}

impl GameOverScreen {
    /// Creates the choice screen with "Play Again" selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameOverScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            outcome: None,
            list_state,
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let count = GameOverChoice::iter().count();
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.list_state.select(Some(next));
    }

    fn selected_choice(&self) -> GameOverChoice {
        let idx = self.list_state.selected().unwrap_or(0);
        GameOverChoice::iter()
            .nth(idx)
            .unwrap_or(GameOverChoice::PlayAgain)
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameOverScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = ui::center_rect(frame.area(), 72, 17);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        ui::draw_title(frame, chunks[0], "Game Over");

        let (text, color) = match &self.outcome {
            Some(outcome) if outcome.is_win() => (format!("Congratulations!\n{}", outcome), Color::Green),
            Some(outcome) => (outcome.to_string(), Color::Red),
            None => ("Game finished.".to_string(), Color::White),
        };
        let result = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(result, chunks[1]);

        let items: Vec<ListItem> = GameOverChoice::iter()
            .map(|choice| ListItem::new(choice.to_string()))
            .collect();
        let menu = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("What would you like to do next?"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        ui::draw_help(
            frame,
            chunks[3],
            "↑↓: Select | Enter: Confirm | r: Play again | l: Log out | q: Quit",
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Up => {
                self.move_selection(false);
                KeyOutcome::Stay
            }
            KeyCode::Down | KeyCode::Tab => {
                self.move_selection(true);
                KeyOutcome::Stay
            }
            KeyCode::Enter => {
                let choice = self.selected_choice();
                info!(choice = %choice, "Game over choice made");
                KeyOutcome::Submit(choice.action())
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyOutcome::Submit(Action::Replay),
            KeyCode::Char('l') | KeyCode::Char('L') => KeyOutcome::Submit(Action::Logout),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyOutcome::Quit,
            _ => KeyOutcome::Stay,
        }
    }

    #[instrument(skip(self))]
    fn apply(&mut self, event: &FlowEvent) {
        if let FlowEvent::ShowOutcome(outcome) = event {
            self.outcome = Some(*outcome);
        }
    }
}
