use crate::engine::{GuessingEngine, MAX_ATTEMPTS};
use crate::error::HangmanError;
use crate::wordbank::choose_random_word;
use crate::{debug_log, info_log};
use rand::Rng;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// The secret is drawn from the word list
    SinglePlayer,
    /// A second player types the secret
    TwoPlayer,
}

impl FromStr for GameMode {
    type Err = HangmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        match choice.to_lowercase().as_str() {
            "1" | "solo" => Ok(Self::SinglePlayer),
            "2" | "duo" => Ok(Self::TwoPlayer),
            _ => Err(HangmanError::InvalidMode(choice.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Wrong,
    AlreadyTried,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    /// The player quit before the game finished
    Abandoned,
}

/// Trait for presenting a hangman session.
///
/// Implemented by the line-oriented CLI and by the full-screen TUI;
/// [`game_loop`] drives either one.
pub trait GameInterface {
    fn display_welcome(&mut self);

    /// Raw mode selection, `None` if the player quits instead of choosing.
    fn read_mode(&mut self) -> Option<String>;

    /// Raw secret typed by the first player.
    fn read_secret(&mut self) -> Option<String>;

    fn display_secret_ready(&mut self, mode: GameMode);

    fn display_game_start(&mut self, attempts: usize);

    fn display_state(&mut self, engine: &GuessingEngine);

    /// Next turn's action. `None` means the input was not a letter and the
    /// turn should be asked again.
    fn read_letter(&mut self) -> Option<UserAction>;

    fn display_guess_result(&mut self, letter: char, result: GuessResult);

    fn display_game_over(&mut self, outcome: GameOutcome, secret: &str);

    fn display_exit_message(&mut self);
}

/// Reduce the first player's input to a single word of letters.
///
/// Only letters can be guessed, so a word with digits or punctuation could
/// never be revealed and is refused.
pub fn normalize_operator_secret(raw: &str) -> Result<String, HangmanError> {
    let word = raw.split_whitespace().next().ok_or(HangmanError::EmptySecret)?;
    if word.chars().all(char::is_alphabetic) {
        Ok(word.to_string())
    } else {
        Err(HangmanError::InvalidSecret(word.to_string()))
    }
}

/// `Ok(None)` when the player left before choosing.
fn select_mode<I: GameInterface + ?Sized>(
    preset_mode: Option<GameMode>,
    interface: &mut I,
) -> Result<Option<GameMode>, HangmanError> {
    if let Some(mode) = preset_mode {
        return Ok(Some(mode));
    }
    interface
        .read_mode()
        .map(|choice| choice.parse::<GameMode>())
        .transpose()
}

fn select_secret<I: GameInterface + ?Sized, R: Rng + ?Sized>(
    mode: GameMode,
    wordbank: &[String],
    interface: &mut I,
    rng: &mut R,
) -> Result<String, HangmanError> {
    let secret = match mode {
        GameMode::SinglePlayer => choose_random_word(wordbank, rng),
        GameMode::TwoPlayer => {
            normalize_operator_secret(interface.read_secret().as_deref().unwrap_or_default())?
        }
    };
    interface.display_secret_ready(mode);
    Ok(secret)
}

/// Play one session: choose the mode and secret, then take guesses until
/// the word is revealed, the attempts run out, or the player quits.
///
/// Mode and secret problems are returned before any engine exists.
pub fn game_loop<I: GameInterface + ?Sized, R: Rng + ?Sized>(
    wordbank: &[String],
    preset_mode: Option<GameMode>,
    interface: &mut I,
    rng: &mut R,
) -> Result<GameOutcome, HangmanError> {
    interface.display_welcome();
    let Some(mode) = select_mode(preset_mode, interface)? else {
        info_log!("game_loop() - Player quit at mode selection");
        interface.display_exit_message();
        return Ok(GameOutcome::Abandoned);
    };
    info_log!("game_loop() - Mode selected: {:?}", mode);

    let secret = select_secret(mode, wordbank, interface, rng)?;
    let mut engine = GuessingEngine::new(&secret)?;
    interface.display_game_start(MAX_ATTEMPTS);

    while !engine.is_game_over() {
        interface.display_state(&engine);

        let letter = match interface.read_letter() {
            Some(UserAction::Guess(letter)) => letter,
            Some(UserAction::Exit) => {
                info_log!("game_loop() - Player quit");
                interface.display_exit_message();
                return Ok(GameOutcome::Abandoned);
            }
            None => continue,
        };

        let result = if engine.has_tried(letter) {
            GuessResult::AlreadyTried
        } else if engine.submit_guess(letter) {
            GuessResult::Correct
        } else {
            GuessResult::Wrong
        };
        debug_log!("game_loop() - '{}' -> {:?}", letter, result);
        interface.display_guess_result(letter, result);
    }

    interface.display_state(&engine);
    let outcome = if engine.has_won() {
        GameOutcome::Won
    } else {
        GameOutcome::Lost
    };
    info_log!("game_loop() - Game over: {:?}", outcome);
    interface.display_game_over(outcome, &secret);
    Ok(outcome)
}
