use crate::data::WordBank;
use crate::oracle::Hint;
use crate::oracle::Oracle;
use crate::restrictions::filter_candidates;
use crate::restrictions::ConstraintState;
use crate::results::*;
use crate::selectors::GuessSelector;
use log::{debug, info, warn};
use std::sync::Arc;

/// Tracks what is known about a single puzzle, and which words could still be the answer.
#[derive(Clone, Debug)]
pub struct PuzzleSolver {
    constraints: ConstraintState,
    candidates: Vec<Arc<str>>,
}

impl PuzzleSolver {
    /// Starts a puzzle whose objective is one of the bank's words with `word_length` letters.
    pub fn new(bank: &WordBank, word_length: usize) -> PuzzleSolver {
        PuzzleSolver::from_candidates(bank.words_with_length(word_length))
    }

    /// Starts a puzzle whose objective is one of the given words.
    pub fn from_candidates(candidates: Vec<Arc<str>>) -> PuzzleSolver {
        PuzzleSolver {
            constraints: ConstraintState::new(),
            candidates,
        }
    }

    /// Asks the selector for the next guess among the remaining candidates.
    pub fn select_next_guess<S: GuessSelector + ?Sized>(
        &self,
        selector: &mut S,
    ) -> Result<Arc<str>, WordleError> {
        let guess = selector.select(&self.candidates);
        if guess.is_err() {
            warn!("No candidates remain after {:?}", self.constraints);
        }
        guess
    }

    /// Adds the given result to the known constraints and removes every candidate that no longer
    /// fits, along with the guess itself.
    pub fn update(&mut self, result: &GuessResult) -> Result<(), WordleError> {
        self.constraints.update(result)?;
        self.candidates = filter_candidates(&self.candidates, &self.constraints);
        self.candidates.retain(|word| &**word != result.guess);
        Ok(())
    }

    /// The words that could still be the objective, in word bank order.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }
}

/// One guess and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Arc<str>,
    pub results: Vec<LetterResult>,
}

/// The rounds played for a single solved puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleOutcome {
    pub rounds: Vec<Round>,
}

impl PuzzleOutcome {
    /// The word that solved the puzzle.
    pub fn solution(&self) -> Option<&Arc<str>> {
        self.rounds.last().map(|round| &round.guess)
    }
}

/// Plays every puzzle of one game against an [`Oracle`].
///
/// ```
/// use wordle_autoplay::*;
/// use wordle_autoplay::selectors::MaxUniqueLetterFrequencySelector;
///
/// let bank = WordBank::from_iterator(vec!["crane", "share", "spare", "stare", "pit", "pot"]);
/// let oracle = LocalOracle::new(vec!["spare", "pot"]);
/// let mut session = Session::start(oracle, &bank, MaxUniqueLetterFrequencySelector::new()).unwrap();
///
/// let mut solutions = Vec::new();
/// while let Some(outcome) = session.solve_next().unwrap() {
///     solutions.push(outcome.solution().unwrap().to_string());
/// }
/// assert_eq!(solutions, vec!["spare", "pot"]);
/// ```
pub struct Session<'b, O: Oracle, S: GuessSelector> {
    oracle: O,
    bank: &'b WordBank,
    selector: S,
    game_id: String,
    current_hint: Option<Hint>,
    failed: bool,
}

impl<'b, O: Oracle, S: GuessSelector> Session<'b, O, S> {
    /// Starts a new game with the oracle.
    pub fn start(mut oracle: O, bank: &'b WordBank, selector: S) -> Result<Self, WordleError> {
        let game = oracle.start_game()?;
        info!(
            "Started game {} with a {}-letter puzzle",
            game.game_id,
            game.hint.word_length()
        );
        Ok(Session {
            oracle,
            bank,
            selector,
            game_id: game.game_id,
            current_hint: Some(game.hint),
            failed: false,
        })
    }

    /// The hint for the puzzle that will be played next, if any remain.
    pub fn current_hint(&self) -> Option<&Hint> {
        self.current_hint.as_ref()
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Asks the oracle for its description of the game's progress.
    pub fn status(&mut self) -> Result<String, WordleError> {
        self.oracle.get_status(&self.game_id)
    }

    /// Plays the current puzzle until it is solved.
    ///
    /// Returns `Ok(None)` once no puzzles remain. Any error from the oracle, or running out of
    /// candidates, ends the session: every later call fails with [`WordleError::SessionFailed`].
    pub fn solve_next(&mut self) -> Result<Option<PuzzleOutcome>, WordleError> {
        self.solve_next_with(|_| {})
    }

    /// Like [`Session::solve_next`], but passes each round to `on_round` as soon as its feedback
    /// arrives, including the rounds of a puzzle that ends in an error.
    pub fn solve_next_with<F>(&mut self, on_round: F) -> Result<Option<PuzzleOutcome>, WordleError>
    where
        F: FnMut(&Round),
    {
        if self.failed {
            return Err(WordleError::SessionFailed);
        }
        let hint = match self.current_hint.take() {
            Some(hint) => hint,
            None => return Ok(None),
        };
        match self.play_puzzle(&hint, on_round) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) => {
                warn!("Puzzle {:?} failed: {}", hint.text, e);
                self.failed = true;
                self.current_hint = Some(hint);
                Err(e)
            }
        }
    }

    fn play_puzzle<F>(&mut self, hint: &Hint, mut on_round: F) -> Result<PuzzleOutcome, WordleError>
    where
        F: FnMut(&Round),
    {
        let mut solver = PuzzleSolver::new(self.bank, hint.word_length());
        debug!(
            "{} candidates for a {}-letter puzzle",
            solver.candidates().len(),
            hint.word_length()
        );
        let mut rounds: Vec<Round> = Vec::new();
        loop {
            let guess = solver.select_next_guess(&mut self.selector)?;
            let response = self.oracle.make_guess(&self.game_id, &guess)?;
            let result = GuessResult::new(&guess, response.results)?;
            info!("{} -> {}", guess, format_results(&result.results));

            let solved = response.solved || response.next_hint.is_some() || result.is_solved();
            let round = Round {
                guess: Arc::clone(&guess),
                results: result.results.clone(),
            };
            on_round(&round);
            rounds.push(round);
            if solved {
                info!("Solved {} in {} guesses", guess, rounds.len());
                self.current_hint = response.next_hint;
                return Ok(PuzzleOutcome { rounds });
            }
            solver.update(&result)?;
        }
    }
}

/// Attempts to guess the given word within the maximum number of guesses, using words from the
/// word bank.
pub fn play_game_with_selector<S: GuessSelector>(
    word_to_guess: &str,
    max_num_guesses: u32,
    bank: &WordBank,
    mut selector: S,
) -> GameResult {
    let mut solver = PuzzleSolver::new(bank, word_to_guess.chars().count());
    let mut guesses: Vec<Box<str>> = Vec::new();
    for _ in 1..=max_num_guesses {
        let guess = match solver.select_next_guess(&mut selector) {
            Ok(guess) => guess,
            Err(_) => return GameResult::UnknownWord,
        };
        guesses.push(Box::from(&*guess));
        let result = match get_result_for_guess(word_to_guess, &guess) {
            Ok(result) => result,
            Err(_) => return GameResult::UnknownWord,
        };
        if result.is_solved() {
            return GameResult::Success(guesses);
        }
        if solver.update(&result).is_err() {
            return GameResult::UnknownWord;
        }
    }
    GameResult::Failure(guesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::MaxUniqueLetterFrequencySelector;

    fn words(words: &[&str]) -> Vec<Arc<str>> {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    #[test]
    fn puzzle_solver_new_uses_words_of_hint_length() {
        let bank = WordBank::from_iterator(vec!["abc", "worda", "de", "wordb"]);

        let solver = PuzzleSolver::new(&bank, 5);

        assert_eq!(solver.candidates(), &words(&["worda", "wordb"])[..]);
        assert_eq!(solver.constraints(), &ConstraintState::new());
    }

    #[test]
    fn puzzle_solver_update_filters_candidates() -> Result<(), WordleError> {
        let mut solver = PuzzleSolver::from_candidates(words(&["crane", "share", "spare", "stare"]));

        solver.update(&get_result_for_guess("spare", "crane")?)?;

        assert_eq!(solver.candidates(), &words(&["share", "spare", "stare"])[..]);
        Ok(())
    }

    #[test]
    fn puzzle_solver_update_removes_consistent_guess() -> Result<(), WordleError> {
        let mut solver = PuzzleSolver::from_candidates(words(&["abcd", "abca", "abcf"]));

        // The second 'a' is absent, but 'a' is confirmed elsewhere so nothing is excluded and the
        // guess itself still fits.
        solver.update(&GuessResult {
            guess: "abca",
            results: vec![
                LetterResult::Exact,
                LetterResult::Exact,
                LetterResult::Exact,
                LetterResult::Absent,
            ],
        })?;

        assert_eq!(solver.candidates(), &words(&["abcd", "abcf"])[..]);
        Ok(())
    }

    #[test]
    fn puzzle_solver_select_next_guess() -> Result<(), WordleError> {
        let solver = PuzzleSolver::from_candidates(words(&["share", "spare", "stare"]));
        let mut selector = MaxUniqueLetterFrequencySelector::new();

        assert_eq!(&*solver.select_next_guess(&mut selector)?, "share");
        Ok(())
    }

    #[test]
    fn puzzle_outcome_solution_is_last_guess() {
        let outcome = PuzzleOutcome {
            rounds: vec![
                Round {
                    guess: Arc::from("crane"),
                    results: vec![LetterResult::Absent; 5],
                },
                Round {
                    guess: Arc::from("spare"),
                    results: vec![LetterResult::Exact; 5],
                },
            ],
        };

        assert_eq!(outcome.solution().map(|word| &**word), Some("spare"));
        assert_eq!(PuzzleOutcome { rounds: vec![] }.solution(), None);
    }
}
