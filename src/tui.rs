//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides a full-screen terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `SelectingMode` → `EnteringSecret` (two players only) → `Guessing` → `GameOver`

use crate::cli::spaced;
use crate::engine::{GuessingEngine, MAX_ATTEMPTS};
use crate::gallows::gallows_lines;
use crate::game_state::{GameInterface, GameMode, GameOutcome, GuessResult, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_SECRET_LEN: usize = 32;
const GALLOWS_PANEL_WIDTH: u16 = 17;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    SelectingMode,
    EnteringSecret,
    Guessing,
    GameOver,
}

/// What the board shows, copied from the engine after each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BoardSnapshot {
    display_word: String,
    remaining_attempts: usize,
    wrong_guesses: usize,
    guessed_letters: Vec<char>,
}

impl BoardSnapshot {
    fn empty() -> Self {
        Self {
            display_word: String::new(),
            remaining_attempts: MAX_ATTEMPTS,
            wrong_guesses: 0,
            guessed_letters: Vec::new(),
        }
    }

    fn from_engine(engine: &GuessingEngine) -> Self {
        Self {
            display_word: engine.display_word(),
            remaining_attempts: engine.remaining_attempts(),
            wrong_guesses: engine.wrong_guesses(),
            guessed_letters: engine.guessed_letters().into_iter().collect(),
        }
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    board: &'a BoardSnapshot,
    current_input: &'a str,
    message: &'a str,
    message_style: Style,
    error_message: &'a str,
    status: &'a str,
}

/// Secret entry is echoed as asterisks.
fn masked(input: &str) -> String {
    "*".repeat(input.chars().count())
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Mode screen key. `Some(None)` when the player quits, `None` to keep waiting.
fn handle_mode_key(key: KeyEvent) -> Option<Option<String>> {
    match key.code {
        KeyCode::Esc => Some(None),
        KeyCode::Char(c) if !has_modifier_keys(&key) => Some(Some(c.to_string())),
        KeyCode::Enter => Some(Some(String::new())),
        _ => None,
    }
}

/// Secret entry key. Returns the finished secret on Enter (empty on Esc).
fn handle_secret_key(input: &mut String, error: &mut String, key: KeyEvent) -> Option<String> {
    error.clear();
    match key.code {
        KeyCode::Enter => Some(std::mem::take(input)),
        KeyCode::Esc => {
            input.clear();
            Some(String::new())
        }
        KeyCode::Backspace => {
            input.pop();
            None
        }
        KeyCode::Char(_) if has_modifier_keys(&key) => None,
        KeyCode::Char(c) if c.is_alphabetic() => {
            if input.chars().count() < MAX_SECRET_LEN {
                input.push(c);
            } else {
                *error = format!("At most {MAX_SECRET_LEN} letters");
            }
            None
        }
        KeyCode::Char(c) => {
            *error = format!("Only letters are allowed! ('{c}' is not a letter)");
            None
        }
        _ => None,
    }
}

/// Guessing key. `Some(None)` reports an invalid key so the turn is asked again.
fn handle_guess_key(error: &mut String, key: KeyEvent) -> Option<Option<UserAction>> {
    error.clear();
    match key.code {
        KeyCode::Esc => Some(Some(UserAction::Exit)),
        KeyCode::Char(_) if has_modifier_keys(&key) => None,
        KeyCode::Char(c) if c.is_alphabetic() => Some(Some(UserAction::Guess(c))),
        KeyCode::Char(c) => {
            *error = format!("Please enter a valid letter. ('{c}' is not a letter)");
            Some(None)
        }
        _ => None,
    }
}

fn instructions(state: TuiState) -> &'static str {
    match state {
        TuiState::SelectingMode => "1: Solo | 2: Two players | ESC: Quit",
        TuiState::EnteringSecret => "Type the secret word | ENTER: Confirm | BACKSPACE: Delete",
        TuiState::Guessing => "Type a letter to guess | ESC: Quit",
        TuiState::GameOver => "Press any key to exit",
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    board: BoardSnapshot,
    current_input: String,
    message: String,
    message_style: Style,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: TuiState::SelectingMode,
            board: BoardSnapshot::empty(),
            current_input: String::new(),
            message: String::new(),
            message_style: MESSAGE_STYLE,
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            board: &self.board,
            current_input: &self.current_input,
            message: &self.message,
            message_style: self.message_style,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn set_message(&mut self, message: String, style: Style) {
        self.message = message;
        self.message_style = style;
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Gallows and word
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_PANEL_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);
        Self::render_gallows(f, body[0], ctx.board.wrong_guesses);
        Self::render_info(f, body[1], ctx);

        Self::render_status(f, chunks[2], ctx.status);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, wrong_guesses: usize) {
        let lines: Vec<Line> = gallows_lines(wrong_guesses)
            .iter()
            .map(|line| Line::from(*line))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        match ctx.state {
            TuiState::SelectingMode => {
                lines.push(Line::from(vec![Span::styled(
                    "Choose a game mode:",
                    HEADER_STYLE,
                )]));
                lines.push(Line::from("  1. Solo (player against the computer)"));
                lines.push(Line::from("  2. Two players"));
                lines.push(Line::from(""));
            }
            TuiState::EnteringSecret => {
                lines.push(Line::from(vec![Span::styled(
                    "Player 1, enter the secret word:",
                    HEADER_STYLE,
                )]));
                lines.push(Line::from(format!("  {}_", masked(ctx.current_input))));
                lines.push(Line::from(""));
            }
            TuiState::Guessing | TuiState::GameOver => {
                lines.push(Line::from(vec![
                    Span::styled("Word: ", HEADER_STYLE),
                    Span::styled(spaced(ctx.board.display_word.chars()), INFO_STYLE),
                ]));
                lines.push(Line::from(""));
                lines.push(Line::from(format!(
                    "Attempts left: {}",
                    ctx.board.remaining_attempts
                )));
                if !ctx.board.guessed_letters.is_empty() {
                    lines.push(Line::from(format!(
                        "Guessed letters: {}",
                        spaced(ctx.board.guessed_letters.iter().copied())
                    )));
                }
                lines.push(Line::from(""));
            }
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, ctx.message_style)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Game").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let paragraph = Paragraph::new(instructions(state))
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Redraw, then wait for the next key press.
    ///
    /// Mouse, focus, paste and resize events as well as key releases are
    /// skipped; a resize still triggers a redraw on the next pass.
    fn next_key(&mut self) -> Result<KeyEvent, io::Error> {
        loop {
            self.draw()?;
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug_log!(
                        "next_key() - code={:?}, modifiers={:?}",
                        key.code,
                        key.modifiers
                    );
                    return Ok(key);
                }
                other => {
                    debug_log!("next_key() - Ignoring event: {:?}", other);
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self) {
        self.state = TuiState::SelectingMode;
        self.status = "Choose a game mode".to_string();
        self.draw_or_log();
    }

    fn read_mode(&mut self) -> Option<String> {
        loop {
            let key = match self.next_key() {
                Ok(key) => key,
                Err(e) => {
                    debug_log!("read_mode() - Input error: {}", e);
                    return None;
                }
            };
            if let Some(choice) = handle_mode_key(key) {
                info_log!("read_mode() - Selection: {:?}", choice);
                return choice;
            }
        }
    }

    fn read_secret(&mut self) -> Option<String> {
        self.state = TuiState::EnteringSecret;
        self.current_input.clear();
        self.status = "Player 2, look away!".to_string();
        loop {
            let key = match self.next_key() {
                Ok(key) => key,
                Err(e) => {
                    debug_log!("read_secret() - Input error: {}", e);
                    return None;
                }
            };
            if let Some(secret) =
                handle_secret_key(&mut self.current_input, &mut self.error_message, key)
            {
                return Some(secret);
            }
        }
    }

    fn display_secret_ready(&mut self, mode: GameMode) {
        let message = match mode {
            GameMode::SinglePlayer => "A word has been chosen at random. Good luck!",
            GameMode::TwoPlayer => "The secret word is set. Player 2, your turn!",
        };
        self.set_message(message.to_string(), MESSAGE_STYLE);
    }

    fn display_game_start(&mut self, attempts: usize) {
        self.state = TuiState::Guessing;
        self.status = format!("The game begins! You have {attempts} attempts.");
    }

    fn display_state(&mut self, engine: &GuessingEngine) {
        self.board = BoardSnapshot::from_engine(engine);
        self.draw_or_log();
    }

    fn read_letter(&mut self) -> Option<UserAction> {
        loop {
            let key = match self.next_key() {
                Ok(key) => key,
                Err(e) => {
                    debug_log!("read_letter() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            };
            if let Some(action) = handle_guess_key(&mut self.error_message, key) {
                return action;
            }
        }
    }

    fn display_guess_result(&mut self, letter: char, result: GuessResult) {
        match result {
            GuessResult::Correct => {
                self.set_message(format!("✓ Good letter! ('{letter}')"), SUCCESS_STYLE);
            }
            GuessResult::Wrong => {
                self.set_message(format!("✗ Wrong letter... ('{letter}')"), ERROR_STYLE);
            }
            GuessResult::AlreadyTried => {
                self.set_message(format!("'{letter}' was already tried."), INFO_STYLE);
            }
        }
    }

    fn display_game_over(&mut self, outcome: GameOutcome, secret: &str) {
        self.state = TuiState::GameOver;
        match outcome {
            GameOutcome::Won => {
                self.set_message(
                    format!("\\o/ CONGRATULATIONS! You found the word: {secret}"),
                    SUCCESS_STYLE,
                );
                self.status = "Game Over - You won".to_string();
            }
            GameOutcome::Lost => {
                self.set_message(format!("X HANGED! The word was: {secret}"), ERROR_STYLE);
                self.status = "Game Over - You lost".to_string();
            }
            GameOutcome::Abandoned => {
                self.set_message(format!("Game abandoned. The word was: {secret}"), INFO_STYLE);
                self.status = "Game Over".to_string();
            }
        }
        if let Err(e) = self.next_key() {
            debug_log!("display_game_over() - Input error: {}", e);
        }
    }

    fn display_exit_message(&mut self) {
        self.set_message("Exiting...".to_string(), MESSAGE_STYLE);
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
