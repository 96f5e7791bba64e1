use crate::results::get_result_for_guess;
use crate::results::LetterResult;
use crate::results::WordleError;
use std::collections::VecDeque;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Information revealed about the next puzzle.
///
/// Only its length is used for guessing: the objective word has as many letters as the hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hint {
    pub text: String,
}

impl Hint {
    pub fn new<S: Into<String>>(text: S) -> Hint {
        Hint { text: text.into() }
    }

    /// The number of letters in the objective word.
    pub fn word_length(&self) -> usize {
        self.text.chars().count()
    }
}

/// The response to starting a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewGame {
    pub game_id: String,
    pub hint: Hint,
}

/// The response to a single guess.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResponse {
    /// One result per letter of the guess.
    pub results: Vec<LetterResult>,
    /// Whether the guess solved the current puzzle.
    pub solved: bool,
    /// The hint for the following puzzle. Only present if this guess solved the current puzzle
    /// and there is another one to play.
    pub next_hint: Option<Hint>,
}

/// A game service that knows the objective words and scores guesses against them.
///
/// A game is a sequence of puzzles. Solving one puzzle reveals the hint for the next, until none
/// remain.
pub trait Oracle {
    /// Starts a new game, returning its id and the hint for the first puzzle.
    fn start_game(&mut self) -> Result<NewGame, WordleError>;

    /// Submits a guess for the current puzzle of the given game.
    fn make_guess(&mut self, game_id: &str, guess: &str) -> Result<GuessResponse, WordleError>;

    /// Returns a human-readable description of the game's progress.
    fn get_status(&mut self, game_id: &str) -> Result<String, WordleError>;
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn start_game(&mut self) -> Result<NewGame, WordleError> {
        (**self).start_game()
    }

    fn make_guess(&mut self, game_id: &str, guess: &str) -> Result<GuessResponse, WordleError> {
        (**self).make_guess(game_id, guess)
    }

    fn get_status(&mut self, game_id: &str) -> Result<String, WordleError> {
        (**self).get_status(game_id)
    }
}

/// An in-process [`Oracle`] that plays through a fixed list of objective words.
///
/// Guesses are scored with [`get_result_for_guess`]. The hint for each puzzle is the objective
/// with every letter masked.
///
/// ```
/// use wordle_autoplay::*;
///
/// let mut oracle = LocalOracle::new(vec!["crane"]);
/// let game = oracle.start_game().unwrap();
/// assert_eq!(game.hint.word_length(), 5);
///
/// let response = oracle.make_guess(&game.game_id, "crane").unwrap();
/// assert!(response.solved);
/// assert_eq!(response.next_hint, None);
/// ```
#[derive(Debug, Clone)]
pub struct LocalOracle {
    game_id: String,
    objectives: VecDeque<Arc<str>>,
    num_solved: usize,
    num_guesses: usize,
}

impl LocalOracle {
    pub fn new<S, I>(objectives: I) -> LocalOracle
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        LocalOracle {
            game_id: String::from("local"),
            objectives: objectives
                .into_iter()
                .map(|word| Arc::from(word.as_ref().trim().to_lowercase().as_str()))
                .collect(),
            num_solved: 0,
            num_guesses: 0,
        }
    }

    fn current_hint(&self) -> Option<Hint> {
        self.objectives
            .front()
            .map(|objective| Hint::new("_".repeat(objective.chars().count())))
    }

    fn check_game_id(&self, game_id: &str) -> Result<(), WordleError> {
        if game_id != self.game_id {
            return Err(WordleError::Oracle(format!("unknown game id {:?}", game_id)));
        }
        Ok(())
    }
}

impl Oracle for LocalOracle {
    fn start_game(&mut self) -> Result<NewGame, WordleError> {
        let hint = self
            .current_hint()
            .ok_or_else(|| WordleError::Oracle(String::from("no puzzles to play")))?;
        Ok(NewGame {
            game_id: self.game_id.clone(),
            hint,
        })
    }

    fn make_guess(&mut self, game_id: &str, guess: &str) -> Result<GuessResponse, WordleError> {
        self.check_game_id(game_id)?;
        let objective = self
            .objectives
            .front()
            .map(Arc::clone)
            .ok_or_else(|| WordleError::Oracle(String::from("game is already over")))?;
        let result = get_result_for_guess(&objective, guess)?;
        self.num_guesses += 1;

        let solved = result.is_solved();
        if solved {
            self.objectives.pop_front();
            self.num_solved += 1;
        }
        Ok(GuessResponse {
            results: result.results,
            solved,
            next_hint: if solved { self.current_hint() } else { None },
        })
    }

    fn get_status(&mut self, game_id: &str) -> Result<String, WordleError> {
        self.check_game_id(game_id)?;
        Ok(format!(
            "{} solved, {} remaining, {} guesses made",
            self.num_solved,
            self.objectives.len(),
            self.num_guesses
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn hint_word_length() {
        assert_eq!(Hint::new("_____").word_length(), 5);
        assert_eq!(Hint::new("").word_length(), 0);
    }

    #[test]
    fn local_oracle_moves_to_next_puzzle_when_solved() -> Result<(), WordleError> {
        let mut oracle = LocalOracle::new(vec!["spare", "pit"]);
        let game = oracle.start_game()?;
        assert_eq!(game.hint.word_length(), 5);

        let response = oracle.make_guess(&game.game_id, "crane")?;
        assert!(!response.solved);
        assert_eq!(response.next_hint, None);
        assert_eq!(response.results.len(), 5);

        let response = oracle.make_guess(&game.game_id, "spare")?;
        assert!(response.solved);
        assert_eq!(response.next_hint.map(|hint| hint.word_length()), Some(3));

        let response = oracle.make_guess(&game.game_id, "pit")?;
        assert!(response.solved);
        assert_eq!(response.next_hint, None);

        assert_eq!(
            oracle.get_status(&game.game_id)?,
            "2 solved, 0 remaining, 3 guesses made"
        );
        Ok(())
    }

    #[test]
    fn local_oracle_errors() {
        let mut oracle = LocalOracle::new(Vec::<String>::new());

        assert_matches!(oracle.start_game(), Err(WordleError::Oracle(_)));
        assert_matches!(oracle.make_guess("other", "abc"), Err(WordleError::Oracle(_)));
        assert_matches!(oracle.make_guess("local", "abc"), Err(WordleError::Oracle(_)));
    }

    #[test]
    fn local_oracle_rejects_wrong_length_guess() -> Result<(), WordleError> {
        let mut oracle = LocalOracle::new(vec!["spare"]);
        let game = oracle.start_game()?;

        assert_matches!(
            oracle.make_guess(&game.game_id, "spa"),
            Err(WordleError::InvalidFeedback { .. })
        );
        Ok(())
    }
}
