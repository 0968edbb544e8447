//! Hangman word-guessing game
//!
//! Pure game state; drawing the figure and the DOM are left to the caller,
//! which reads `misses()` to decide how many figure parts to show.

use serde::{Deserialize, Serialize};

/// Word used when none is supplied
pub const DEFAULT_WORD: &str = "SNYGGE STOFFE";
/// Wrong guesses allowed before the game is lost (one per figure part)
pub const MAX_ATTEMPTS: u32 = 6;

/// Placeholder for letters not yet guessed
const HIDDEN: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HangmanStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    /// Not a letter, already guessed, or the game is over
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hangman {
    word: String,
    max_attempts: u32,
    /// All accepted guesses, in order
    guessed: Vec<char>,
    misses: u32,
}

impl Default for Hangman {
    fn default() -> Self {
        Self::new(DEFAULT_WORD, MAX_ATTEMPTS)
    }
}

impl Hangman {
    pub fn new(word: &str, max_attempts: u32) -> Self {
        Self {
            word: word.to_uppercase(),
            max_attempts,
            guessed: Vec::new(),
            misses: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn status(&self) -> HangmanStatus {
        if self.misses >= self.max_attempts {
            HangmanStatus::Lost
        } else if self
            .word
            .chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| self.guessed.contains(&c))
        {
            HangmanStatus::Won
        } else {
            HangmanStatus::Playing
        }
    }

    /// Guess a letter (case-insensitive)
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status() != HangmanStatus::Playing || !letter.is_alphabetic() {
            return GuessOutcome::Ignored;
        }
        // Multi-char uppercase forms (e.g. 'ß') are ignored
        let mut upper = letter.to_uppercase();
        let (Some(letter), None) = (upper.next(), upper.next()) else {
            return GuessOutcome::Ignored;
        };
        if self.guessed.contains(&letter) {
            return GuessOutcome::Ignored;
        }

        self.guessed.push(letter);
        if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            self.misses += 1;
            GuessOutcome::Incorrect
        }
    }

    /// The word with unguessed letters replaced by `_`; spaces stay visible
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if c.is_whitespace() || self.guessed.contains(&c) {
                    c
                } else {
                    HIDDEN
                }
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.guessed.clear();
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win() {
        let mut game = Hangman::new("ab ba", 6);
        assert_eq!(game.masked_word(), "__ __");
        assert_eq!(game.guess('a'), GuessOutcome::Correct);
        assert_eq!(game.masked_word(), "A_ _A");
        assert_eq!(game.guess('B'), GuessOutcome::Correct);
        assert_eq!(game.status(), HangmanStatus::Won);
        assert_eq!(game.guess('c'), GuessOutcome::Ignored);
    }

    #[test]
    fn test_loss_after_max_attempts() {
        let mut game = Hangman::new("xyz", 3);
        for c in ['a', 'b'] {
            assert_eq!(game.guess(c), GuessOutcome::Incorrect);
            assert_eq!(game.status(), HangmanStatus::Playing);
        }
        assert_eq!(game.guess('c'), GuessOutcome::Incorrect);
        assert_eq!(game.status(), HangmanStatus::Lost);
        assert_eq!(game.misses(), 3);
        assert_eq!(game.guess('x'), GuessOutcome::Ignored);
    }

    #[test]
    fn test_ignored_guesses() {
        let mut game = Hangman::default();
        assert_eq!(game.guess(' '), GuessOutcome::Ignored);
        assert_eq!(game.guess('3'), GuessOutcome::Ignored);
        assert_eq!(game.guess('q'), GuessOutcome::Incorrect);
        assert_eq!(game.guess('Q'), GuessOutcome::Ignored);
        assert_eq!(game.misses(), 1);
        assert_eq!(game.guessed_letters(), &['Q']);
    }

    #[test]
    fn test_default_word_and_reset() {
        let mut game = Hangman::default();
        assert_eq!(game.masked_word(), "______ ______");
        for c in "SNYGETOF".chars() {
            game.guess(c);
        }
        assert_eq!(game.status(), HangmanStatus::Won);
        assert_eq!(game.masked_word(), DEFAULT_WORD);

        game.reset();
        assert_eq!(game.status(), HangmanStatus::Playing);
        assert!(game.guessed_letters().is_empty());
    }
}
