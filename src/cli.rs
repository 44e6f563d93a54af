use crate::engine::GuessingEngine;
use crate::gallows::render_gallows;
use crate::game_state::{GameInterface, GameMode, GameOutcome, GuessResult, UserAction};
use crate::debug_log;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

const SEPARATOR_WIDTH: usize = 50;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Game mode: 1 (solo) or 2 (two players). Asked at startup when omitted
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Letters separated by spaces, e.g. `"c h _ _"`.
pub fn spaced<I: IntoIterator<Item = char>>(letters: I) -> String {
    letters
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A turn's input must be exactly one alphabetic character.
pub fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Next line with surrounding whitespace removed, `None` at end of input.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            debug_log!("read_trimmed_line() - {}", e);
            None
        }
    }
}

pub fn clear_screen() {
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
        debug_log!("clear_screen() - {}", e);
    }
}

pub fn display_welcome() {
    println!("=== HANGMAN ===");
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
}

pub fn read_mode<R: BufRead>(reader: &mut R) -> Option<String> {
    println!("Choose a game mode:");
    println!("1. Solo (player against the computer)");
    println!("2. Two players");
    prompt("Your choice: ");
    read_trimmed_line(reader)
}

pub fn read_secret<R: BufRead>(reader: &mut R) -> Option<String> {
    prompt("Player 1, enter the secret word: ");
    read_trimmed_line(reader)
}

pub fn display_secret_ready(mode: GameMode) {
    match mode {
        GameMode::SinglePlayer => println!("A word has been chosen at random. Good luck!"),
        GameMode::TwoPlayer => {
            clear_screen();
            println!("The secret word is set. Player 2, your turn!");
        }
    }
}

pub fn display_game_start(attempts: usize) {
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
    println!("The game begins! You have {attempts} attempts.");
}

pub fn display_game_state(engine: &GuessingEngine) {
    println!("\n{}\n", render_gallows(engine.wrong_guesses()));
    println!("Word: {}\n", spaced(engine.display_word().chars()));
    println!("Attempts left: {}", engine.remaining_attempts());

    let guessed = engine.guessed_letters();
    if !guessed.is_empty() {
        println!("Guessed letters: {}", spaced(guessed));
    }
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

pub fn read_letter<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    prompt("Enter a letter: ");
    let Some(input) = read_trimmed_line(reader) else {
        return Some(UserAction::Exit);
    };

    match input.to_lowercase().as_str() {
        "exit" | "quit" => Some(UserAction::Exit),
        _ => match parse_letter(&input) {
            Some(letter) => Some(UserAction::Guess(letter)),
            None => {
                println!("Please enter a valid letter.");
                None
            }
        },
    }
}

pub fn display_guess_result(letter: char, result: GuessResult) {
    println!();
    match result {
        GuessResult::Correct => println!("✓ Good letter!"),
        GuessResult::Wrong => println!("✗ Wrong letter..."),
        GuessResult::AlreadyTried => println!("'{letter}' was already tried."),
    }
    println!();
}

pub fn display_game_over(outcome: GameOutcome, secret: &str) {
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
    match outcome {
        GameOutcome::Won => println!("\\o/ CONGRATULATIONS! You found the word: {secret}"),
        GameOutcome::Lost => println!("X HANGED! The word was: {secret}"),
        GameOutcome::Abandoned => println!("Game abandoned. The word was: {secret}"),
    }
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self) {
        display_welcome();
    }

    fn read_mode(&mut self) -> Option<String> {
        read_mode(&mut self.reader)
    }

    fn read_secret(&mut self) -> Option<String> {
        read_secret(&mut self.reader)
    }

    fn display_secret_ready(&mut self, mode: GameMode) {
        display_secret_ready(mode);
    }

    fn display_game_start(&mut self, attempts: usize) {
        display_game_start(attempts);
    }

    fn display_state(&mut self, engine: &GuessingEngine) {
        display_game_state(engine);
    }

    fn read_letter(&mut self) -> Option<UserAction> {
        read_letter(&mut self.reader)
    }

    fn display_guess_result(&mut self, letter: char, result: GuessResult) {
        display_guess_result(letter, result);
    }

    fn display_game_over(&mut self, outcome: GameOutcome, secret: &str) {
        display_game_over(outcome, secret);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
