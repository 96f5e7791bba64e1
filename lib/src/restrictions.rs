use crate::data::LocatedLetter;
use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use log::debug;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything learned about the objective word so far in one puzzle.
///
/// The state only grows as results are added: letters confirmed at a location stay confirmed,
/// letters marked present keep their excluded locations until the letter is confirmed somewhere,
/// and letters known to be absent stay absent. A letter that is confirmed or present is never
/// treated as absent, even if some other copy of it in a guess was marked
/// [`LetterResult::Absent`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintState {
    /// Letters that must occur at specific locations in the word.
    confirmed: HashSet<LocatedLetter>,
    /// Letters that must be in the word, mapped to the locations where they must not be.
    misplaced: HashMap<char, BTreeSet<usize>>,
    /// Letters that must not be in the word.
    excluded: HashSet<char>,
}

impl ConstraintState {
    /// Creates an empty `ConstraintState`, which every word satisfies.
    pub fn new() -> ConstraintState {
        ConstraintState::default()
    }

    /// Returns the constraints imposed by the given result.
    pub fn from_result(result: &GuessResult) -> Result<ConstraintState, WordleError> {
        let mut constraints = ConstraintState::new();
        constraints.update(result)?;
        Ok(constraints)
    }

    /// Adds constraints arising from the given guess result.
    ///
    /// Exact results are recorded first, then present results, and only then are absent letters
    /// excluded, so that a repeated letter marked absent in one place doesn't exclude a letter
    /// that was found elsewhere in the same guess.
    ///
    /// Fails without modifying the state if the guess and results differ in length.
    pub fn update(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        let letters: Vec<char> = guess_result.guess.chars().collect();
        if letters.len() != guess_result.results.len() {
            return Err(WordleError::InvalidFeedback {
                expected: letters.len(),
                actual: guess_result.results.len(),
            });
        }
        let located = || {
            letters
                .iter()
                .zip(guess_result.results.iter())
                .enumerate()
                .map(|(index, (letter, result))| (index, *letter, *result))
        };

        for (index, letter, _) in located().filter(|(_, _, result)| *result == LetterResult::Exact)
        {
            self.confirmed.insert(LocatedLetter::new(letter, index));
            self.misplaced.remove(&letter);
            self.excluded.remove(&letter);
        }
        for (index, letter, _) in
            located().filter(|(_, _, result)| *result == LetterResult::Present)
        {
            self.misplaced.entry(letter).or_default().insert(index);
        }
        for (_, letter, _) in located().filter(|(_, _, result)| *result == LetterResult::Absent) {
            if !self.misplaced.contains_key(&letter) && !self.is_confirmed_letter(letter) {
                self.excluded.insert(letter);
            }
        }
        Ok(())
    }

    /// Returns `true` iff the given word satisfies these constraints.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        self.confirmed
            .iter()
            .all(|ll| letters.get(ll.location) == Some(&ll.letter))
            && self.misplaced.iter().all(|(letter, locations)| {
                letters.contains(letter)
                    && locations
                        .iter()
                        .all(|location| letters.get(*location) != Some(letter))
            })
            && !letters.iter().any(|letter| self.excluded.contains(letter))
    }

    /// Letters known to be at specific locations.
    pub fn confirmed(&self) -> &HashSet<LocatedLetter> {
        &self.confirmed
    }

    /// Letters known to be in the word, with the locations they are known not to be at.
    pub fn misplaced(&self) -> &HashMap<char, BTreeSet<usize>> {
        &self.misplaced
    }

    /// Letters known not to be in the word.
    pub fn excluded(&self) -> &HashSet<char> {
        &self.excluded
    }

    fn is_confirmed_letter(&self, letter: char) -> bool {
        self.confirmed.iter().any(|ll| ll.letter == letter)
    }
}

/// Returns the words that satisfy the given constraints, in their original order.
pub fn filter_candidates(candidates: &[Arc<str>], constraints: &ConstraintState) -> Vec<Arc<str>> {
    let remaining: Vec<Arc<str>> = candidates
        .iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .map(Arc::clone)
        .collect();
    debug!(
        "Filtered {} candidates down to {}",
        candidates.len(),
        remaining.len()
    );
    remaining
}
