use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is in the word at this location.
    Exact,
    /// The letter is in the word, but not at this location.
    Present,
    /// The letter is not in the word (or not any more often than it was marked elsewhere).
    Absent,
}

impl LetterResult {
    /// Decodes a single feedback character as sent by a game oracle.
    ///
    /// `G`/`g` is [`Exact`](LetterResult::Exact), `Y`/`y` is
    /// [`Present`](LetterResult::Present), and `.` is [`Absent`](LetterResult::Absent).
    pub fn from_char(symbol: char) -> Result<LetterResult, WordleError> {
        match symbol {
            'G' | 'g' => Ok(LetterResult::Exact),
            'Y' | 'y' => Ok(LetterResult::Present),
            '.' => Ok(LetterResult::Absent),
            _ => Err(WordleError::InvalidSymbol(symbol)),
        }
    }

    /// Encodes this result in the oracle's character format.
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Exact => 'G',
            LetterResult::Present => 'Y',
            LetterResult::Absent => '.',
        }
    }
}

/// Decodes a full feedback string, such as `"G.Y.."`.
pub fn parse_results(encoded: &str) -> Result<Vec<LetterResult>, WordleError> {
    encoded.chars().map(LetterResult::from_char).collect()
}

/// Encodes the given results in the oracle's character format.
pub fn format_results(results: &[LetterResult]) -> String {
    results.iter().map(|result| result.to_char()).collect()
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error)]
pub enum WordleError {
    /// No candidate words remain. Either the word is not in the word bank, or the feedback was
    /// contradictory.
    #[error("no candidate words remain")]
    Exhausted,
    /// The feedback did not have one result per letter of the guess.
    #[error("expected {expected} feedback symbols but got {actual}")]
    InvalidFeedback { expected: usize, actual: usize },
    /// A feedback character was not one of the supported symbols.
    #[error("unsupported feedback symbol {0:?}")]
    InvalidSymbol(char),
    /// The game oracle could not be reached, or gave an unusable response.
    #[error("game oracle failed: {0}")]
    Oracle(String),
    /// An earlier puzzle of the session failed, so the session cannot continue.
    #[error("the session already failed")]
    SessionFailed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Pairs a guess with its feedback, failing if they don't have the same length.
    pub fn new(guess: &'a str, results: Vec<LetterResult>) -> Result<Self, WordleError> {
        let expected = guess.chars().count();
        if expected != results.len() {
            return Err(WordleError::InvalidFeedback {
                expected,
                actual: results.len(),
            });
        }
        Ok(GuessResult { guess, results })
    }

    /// Returns true iff every letter was marked [`LetterResult::Exact`].
    pub fn is_solved(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Exact)
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Box<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Box<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Repeated letters are scored the standard way: exact matches are marked first, then each
/// remaining copy in the guess is marked present only while the objective still has an unmatched
/// copy of that letter.
///
/// ```
/// use wordle_autoplay::*;
///
/// let result = get_result_for_guess("abide", "speed").unwrap();
/// assert_eq!(format_results(&result.results), "..Y.Y");
/// ```
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective.len() != guess_letters.len() {
        return Err(WordleError::InvalidFeedback {
            expected: guess_letters.len(),
            actual: objective.len(),
        });
    }

    let mut results = vec![LetterResult::Absent; guess_letters.len()];
    let mut unmatched: Vec<Option<char>> = Vec::with_capacity(objective.len());
    for (index, letter) in objective.iter().enumerate() {
        if guess_letters[index] == *letter {
            results[index] = LetterResult::Exact;
            unmatched.push(None);
        } else {
            unmatched.push(Some(*letter));
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Exact {
            continue;
        }
        if let Some(slot) = unmatched.iter_mut().find(|slot| **slot == Some(*letter)) {
            *slot = None;
            results[index] = LetterResult::Present;
        }
    }
    Ok(GuessResult { guess, results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn from_char_accepts_both_cases() -> Result<(), WordleError> {
        assert_eq!(LetterResult::from_char('G')?, LetterResult::Exact);
        assert_eq!(LetterResult::from_char('g')?, LetterResult::Exact);
        assert_eq!(LetterResult::from_char('Y')?, LetterResult::Present);
        assert_eq!(LetterResult::from_char('y')?, LetterResult::Present);
        assert_eq!(LetterResult::from_char('.')?, LetterResult::Absent);
        Ok(())
    }

    #[test]
    fn from_char_rejects_unknown_symbol() {
        assert_matches!(
            LetterResult::from_char('x'),
            Err(WordleError::InvalidSymbol('x'))
        );
    }

    #[test]
    fn parse_and_format_results() -> Result<(), WordleError> {
        let results = parse_results("gY..G")?;

        assert_eq!(
            results,
            vec![
                LetterResult::Exact,
                LetterResult::Present,
                LetterResult::Absent,
                LetterResult::Absent,
                LetterResult::Exact,
            ]
        );
        assert_eq!(format_results(&results), "GY..G");
        Ok(())
    }

    #[test]
    fn guess_result_new_checks_length() {
        assert_matches!(
            GuessResult::new("crane", vec![LetterResult::Exact; 4]),
            Err(WordleError::InvalidFeedback {
                expected: 5,
                actual: 4
            })
        );
        assert_matches!(
            GuessResult::new("crane", vec![LetterResult::Exact; 5]),
            Ok(_)
        );
    }

    #[test]
    fn is_solved() {
        let solved = GuessResult {
            guess: "abc",
            results: vec![LetterResult::Exact; 3],
        };
        let unsolved = GuessResult {
            guess: "abc",
            results: vec![
                LetterResult::Exact,
                LetterResult::Present,
                LetterResult::Exact,
            ],
        };

        assert!(solved.is_solved());
        assert!(!unsolved.is_solved());
    }
}
