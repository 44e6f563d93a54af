//! Letter-guessing state machine.
//!
//! A [`GuessingEngine`] owns the secret word, the reveal mask, the set of
//! letters tried so far and the remaining attempts. Everything is stored
//! lower-cased; callers may submit either case.

use crate::debug_log;
use crate::error::HangmanError;
use std::collections::BTreeSet;

/// Wrong guesses allowed before the game is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// Shown in the reveal mask for positions not yet guessed.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessingEngine {
    secret: Vec<char>,
    revealed: Vec<bool>,
    tried_letters: BTreeSet<char>,
    attempts_remaining: usize,
}

/// Lower-case a single character, keeping a one-to-one mapping so the mask
/// length always matches the secret.
fn normalize_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl GuessingEngine {
    /// Start a new game for `secret_word`.
    ///
    /// Returns [`HangmanError::EmptySecret`] when the word is empty.
    pub fn new(secret_word: &str) -> Result<Self, HangmanError> {
        if secret_word.is_empty() {
            return Err(HangmanError::EmptySecret);
        }
        let secret: Vec<char> = secret_word.chars().map(normalize_letter).collect();
        let revealed = vec![false; secret.len()];
        debug_log!("GuessingEngine::new() - {} letter secret", secret.len());

        Ok(Self {
            secret,
            revealed,
            tried_letters: BTreeSet::new(),
            attempts_remaining: MAX_ATTEMPTS,
        })
    }

    /// Submit one letter.
    ///
    /// Returns `true` only when the letter is new and reveals at least one
    /// position. A new letter absent from the secret costs one attempt; a
    /// repeated letter, or any guess once the game is over, changes nothing.
    pub fn submit_guess(&mut self, letter: char) -> bool {
        if self.is_game_over() {
            return false;
        }
        let letter = normalize_letter(letter);
        if !self.tried_letters.insert(letter) {
            debug_log!("submit_guess() - '{}' already tried", letter);
            return false;
        }

        let mut found = false;
        for (shown, &c) in self.revealed.iter_mut().zip(&self.secret) {
            if c == letter {
                *shown = true;
                found = true;
            }
        }

        if !found {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        }
        debug_log!(
            "submit_guess() - '{}' found={} remaining={}",
            letter,
            found,
            self.attempts_remaining
        );
        found
    }

    pub fn is_game_over(&self) -> bool {
        self.attempts_remaining == 0 || self.is_word_guessed()
    }

    pub fn is_word_guessed(&self) -> bool {
        self.revealed.iter().all(|&shown| shown)
    }

    // Correct guesses never cost an attempt, so a completed word always
    // leaves at least one attempt and won/lost cannot both hold.
    pub fn has_won(&self) -> bool {
        self.is_word_guessed() && self.attempts_remaining > 0
    }

    pub fn has_lost(&self) -> bool {
        self.attempts_remaining == 0 && !self.is_word_guessed()
    }

    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.has_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The reveal mask as a string, e.g. `"ch__"`.
    pub fn display_word(&self) -> String {
        self.secret
            .iter()
            .zip(&self.revealed)
            .map(|(&c, &shown)| if shown { c } else { PLACEHOLDER })
            .collect()
    }

    pub fn remaining_attempts(&self) -> usize {
        self.attempts_remaining
    }

    /// Wrong guesses so far; selects the gallows stage.
    pub fn wrong_guesses(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    pub fn guessed_letters(&self) -> BTreeSet<char> {
        self.tried_letters.clone()
    }

    pub fn has_tried(&self, letter: char) -> bool {
        self.tried_letters.contains(&normalize_letter(letter))
    }

    /// The lower-cased secret.
    pub fn secret(&self) -> String {
        self.secret.iter().collect()
    }

    pub fn word_len(&self) -> usize {
        self.secret.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(secret: &str, letters: &str) -> GuessingEngine {
        let mut engine = GuessingEngine::new(secret).unwrap();
        for c in letters.chars() {
            engine.submit_guess(c);
        }
        engine
    }

    #[test]
    fn test_initial_state() {
        let engine = GuessingEngine::new("Bonjour").unwrap();
        assert_eq!(engine.display_word(), "_______");
        assert_eq!(engine.remaining_attempts(), MAX_ATTEMPTS);
        assert!(engine.guessed_letters().is_empty());
        assert!(!engine.is_game_over());
        assert!(!engine.has_won());
        assert!(!engine.has_lost());
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.wrong_guesses(), 0);
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            GuessingEngine::new(""),
            Err(HangmanError::EmptySecret)
        ));
    }

    #[test]
    fn test_secret_is_lowercased() {
        let engine = GuessingEngine::new("BonJour").unwrap();
        assert_eq!(engine.secret(), "bonjour");
        assert_eq!(engine.word_len(), 7);
    }

    #[test]
    fn test_correct_guess_reveals_all_positions() {
        let mut engine = GuessingEngine::new("bonjour").unwrap();
        assert!(engine.submit_guess('o'));
        assert_eq!(engine.display_word(), "_o__o__");
        assert_eq!(engine.remaining_attempts(), MAX_ATTEMPTS);
        assert!(engine.guessed_letters().contains(&'o'));
    }

    #[test]
    fn test_wrong_guess_costs_one_attempt() {
        let mut engine = GuessingEngine::new("bonjour").unwrap();
        assert!(!engine.submit_guess('z'));
        assert_eq!(engine.remaining_attempts(), 5);
        assert_eq!(engine.wrong_guesses(), 1);
        assert!(engine.guessed_letters().contains(&'z'));
    }

    #[test]
    fn test_repeated_wrong_guess_not_penalized() {
        let mut engine = GuessingEngine::new("bonjour").unwrap();
        engine.submit_guess('x');
        let attempts = engine.remaining_attempts();
        assert!(!engine.submit_guess('x'));
        assert!(!engine.submit_guess('X'));
        assert_eq!(engine.remaining_attempts(), attempts);
    }

    #[test]
    fn test_repeated_correct_guess_returns_false() {
        let mut engine = GuessingEngine::new("abc").unwrap();
        assert!(engine.submit_guess('a'));
        assert!(!engine.submit_guess('a'));
        assert_eq!(engine.display_word(), "a__");
        assert_eq!(engine.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_uppercase_guess_matches() {
        let mut engine = GuessingEngine::new("Bonjour").unwrap();
        assert!(engine.submit_guess('B'));
        assert_eq!(engine.display_word(), "b______");
        assert!(engine.has_tried('b'));
        assert!(engine.has_tried('B'));
        assert_eq!(engine.guessed_letters().into_iter().collect::<Vec<_>>(), vec!['b']);
    }

    #[test]
    fn test_win_abc() {
        let mut engine = GuessingEngine::new("abc").unwrap();
        let mut displays = Vec::new();
        for c in ['a', 'b', 'c'] {
            assert!(engine.submit_guess(c));
            displays.push(engine.display_word());
        }
        assert_eq!(displays, vec!["a__", "ab_", "abc"]);
        assert!(engine.has_won());
        assert!(engine.is_game_over());
        assert!(!engine.has_lost());
        assert_eq!(engine.remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn test_loss_abc() {
        let mut engine = GuessingEngine::new("abc").unwrap();
        for (i, c) in ['x', 'y', 'z', 'u', 'v', 'w'].into_iter().enumerate() {
            assert!(!engine.submit_guess(c));
            assert_eq!(engine.remaining_attempts(), MAX_ATTEMPTS - i - 1);
        }
        assert!(engine.has_lost());
        assert!(engine.is_game_over());
        assert!(!engine.has_won());
        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.wrong_guesses(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_win_after_wrong_guess() {
        let mut engine = GuessingEngine::new("chat").unwrap();
        assert!(!engine.submit_guess('z'));
        assert_eq!(engine.display_word(), "____");
        for (c, expected) in [('c', "c___"), ('h', "ch__"), ('a', "cha_"), ('t', "chat")] {
            assert!(engine.submit_guess(c));
            assert_eq!(engine.display_word(), expected);
            assert_eq!(engine.remaining_attempts(), 5);
        }
        assert!(engine.has_won());
    }

    #[test]
    fn test_win_on_last_attempt() {
        let mut engine = play("ab", "uvwxy");
        assert_eq!(engine.remaining_attempts(), 1);
        assert!(engine.submit_guess('a'));
        assert!(engine.submit_guess('b'));
        assert!(engine.has_won());
        assert!(!engine.has_lost());
        assert_eq!(engine.remaining_attempts(), 1);
    }

    #[test]
    fn test_guesses_after_game_over_are_ignored() {
        let mut engine = play("abc", "xyzuvw");
        assert!(!engine.submit_guess('q'));
        assert!(!engine.submit_guess('a'));
        assert_eq!(engine.remaining_attempts(), 0);
        assert_eq!(engine.display_word(), "___");
        assert!(!engine.has_tried('a'));

        let mut won = play("ab", "ab");
        assert!(!won.submit_guess('z'));
        assert_eq!(won.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_attempts_monotonic_and_exclusive_outcomes() {
        let mut engine = GuessingEngine::new("hangman").unwrap();
        let mut previous = engine.remaining_attempts();
        for c in "qqhzxxaywvutsrnmg".chars() {
            engine.submit_guess(c);
            let now = engine.remaining_attempts();
            assert!(now <= previous);
            assert!(previous - now <= 1);
            assert!(!(engine.has_won() && engine.has_lost()));
            previous = now;
        }
        assert_eq!(engine.remaining_attempts(), 0);
        assert!(engine.has_lost());
    }

    #[test]
    fn test_mask_only_holds_placeholder_or_secret() {
        let engine = play("mississippi", "sxp");
        let secret: Vec<char> = engine.secret().chars().collect();
        for (i, c) in engine.display_word().chars().enumerate() {
            assert!(c == PLACEHOLDER || c == secret[i]);
        }
        assert_eq!(engine.display_word(), "__ss_ss_pp_");
    }

    #[test]
    fn test_guessed_letters_is_a_snapshot() {
        let mut engine = GuessingEngine::new("abc").unwrap();
        engine.submit_guess('a');
        let snapshot = engine.guessed_letters();
        engine.submit_guess('z');
        assert_eq!(snapshot.len(), 1);
        assert_eq!(engine.guessed_letters().len(), 2);
    }

    #[test]
    fn test_placeholder_in_secret_must_be_guessed() {
        let engine = GuessingEngine::new("_").unwrap();
        assert_eq!(engine.display_word(), "_");
        assert!(!engine.is_game_over());
        assert!(!engine.has_won());

        let mut engine = GuessingEngine::new("a_").unwrap();
        assert!(engine.submit_guess('a'));
        assert!(!engine.is_word_guessed());
        assert!(!engine.has_won());
        assert!(engine.submit_guess('_'));
        assert!(engine.has_won());
    }

    #[test]
    fn test_non_ascii_secret() {
        let mut engine = GuessingEngine::new("Été").unwrap();
        assert_eq!(engine.display_word(), "___");
        assert!(engine.submit_guess('É'));
        assert_eq!(engine.display_word(), "é_é");
    }
}
