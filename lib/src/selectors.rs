use crate::data::LetterCounter;
use crate::results::WordleError;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;

/// Chooses the next guess from the words that are still possible.
///
/// Implementations must not assume anything about the candidates beyond their order, and must
/// fail with [`WordleError::Exhausted`] when given no candidates.
pub trait GuessSelector {
    /// Selects one of the given candidates as the next guess.
    fn select(&mut self, candidates: &[Arc<str>]) -> Result<Arc<str>, WordleError>;
}

impl<S: GuessSelector + ?Sized> GuessSelector for Box<S> {
    fn select(&mut self, candidates: &[Arc<str>]) -> Result<Arc<str>, WordleError> {
        (**self).select(candidates)
    }
}

impl<S: GuessSelector + ?Sized> GuessSelector for &mut S {
    fn select(&mut self, candidates: &[Arc<str>]) -> Result<Arc<str>, WordleError> {
        (**self).select(candidates)
    }
}

/// Selects the candidate whose unique letters appear in the most candidates.
///
/// Each candidate is scored as the sum, over its distinct letters, of the number of candidates
/// containing that letter. The highest score wins, and ties go to the earliest candidate, so the
/// same candidates always produce the same guess.
///
/// ```
/// use std::sync::Arc;
/// use wordle_autoplay::GuessSelector;
/// use wordle_autoplay::selectors::MaxUniqueLetterFrequencySelector;
///
/// let candidates: Vec<Arc<str>> = vec![Arc::from("abc"), Arc::from("bcd"), Arc::from("xyz")];
/// let mut selector = MaxUniqueLetterFrequencySelector::new();
///
/// assert_eq!(&*selector.select(&candidates).unwrap(), "abc");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxUniqueLetterFrequencySelector;

impl MaxUniqueLetterFrequencySelector {
    pub fn new() -> MaxUniqueLetterFrequencySelector {
        MaxUniqueLetterFrequencySelector
    }

    /// Scores `word` against the letter counts of the current candidates.
    pub fn score_word(counter: &LetterCounter, word: &str) -> u32 {
        let unique_letters: HashSet<char> = word.chars().collect();
        unique_letters
            .iter()
            .map(|letter| counter.num_words_with_letter(*letter))
            .sum()
    }
}

impl GuessSelector for MaxUniqueLetterFrequencySelector {
    fn select(&mut self, candidates: &[Arc<str>]) -> Result<Arc<str>, WordleError> {
        let counter = LetterCounter::new(candidates);
        let mut best: Option<(&Arc<str>, u32)> = None;
        for word in candidates {
            let score = MaxUniqueLetterFrequencySelector::score_word(&counter, word);
            // Strictly greater, so the first of several equal scores is kept.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }
        let (word, score) = best.ok_or(WordleError::Exhausted)?;
        debug!(
            "Selected {} with score {} from {} candidates",
            word,
            score,
            candidates.len()
        );
        Ok(Arc::clone(word))
    }
}

/// Guesses at random from the candidates.
///
/// Use [`RandomSelector::seeded`], or supply your own generator with
/// [`RandomSelector::from_rng`], to make the guesses reproducible.
#[derive(Clone, Debug)]
pub struct RandomSelector<R: Rng = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Creates a selector seeded from the operating system's entropy source.
    pub fn new() -> RandomSelector<StdRng> {
        RandomSelector {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a selector that always makes the same sequence of choices for the same seed.
    pub fn seeded(seed: u64) -> RandomSelector<StdRng> {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector<StdRng> {
    fn default() -> Self {
        RandomSelector::new()
    }
}

impl<R: Rng> RandomSelector<R> {
    pub fn from_rng(rng: R) -> RandomSelector<R> {
        RandomSelector { rng }
    }
}

impl<R: Rng> GuessSelector for RandomSelector<R> {
    fn select(&mut self, candidates: &[Arc<str>]) -> Result<Arc<str>, WordleError> {
        candidates
            .choose(&mut self.rng)
            .map(Arc::clone)
            .ok_or(WordleError::Exhausted)
    }
}
