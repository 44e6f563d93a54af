// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod gallows;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{GameStatus, GuessingEngine, MAX_ATTEMPTS, PLACEHOLDER};
pub use error::HangmanError;
pub use game_state::{GameInterface, GameMode, GameOutcome, GuessResult, UserAction, game_loop};
pub use wordbank::{
    DEFAULT_WORD, choose_random_word, load_wordbank_from_file, load_wordbank_from_str,
    resolve_wordbank,
};
