//! Error types for hangman sessions

use std::io;
use thiserror::Error;

/// Errors that end a session before or outside of play.
#[derive(Error, Debug)]
pub enum HangmanError {
    /// The startup mode selection was not 1 or 2
    #[error("Invalid game mode: '{0}' (expected 1 or 2)")]
    InvalidMode(String),

    /// The secret word was empty after trimming
    #[error("The secret word cannot be empty")]
    EmptySecret,

    /// The secret word contains characters that cannot be guessed
    #[error("The secret word must contain only letters: '{0}'")]
    InvalidSecret(String),

    /// Terminal setup or drawing failed
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
}
