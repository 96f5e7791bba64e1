use crate::results::WordleError;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: usize,
}

impl LocatedLetter {
    pub fn new(letter: char, location: usize) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// Contains all the words that may appear in a game, in their original order.
///
/// Words of different lengths may be mixed; each puzzle draws the words of its own length with
/// [`WordBank::words_with_length`]. The bank is never modified once built, and can be shared
/// between threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;
        Ok(WordBank::from_iterator(lines))
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to lower case, and empty words are skipped.
    ///
    /// ```
    /// use wordle_autoplay::WordBank;
    ///
    /// let bank = WordBank::from_iterator(vec!["Crane", " ", "spare "]);
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(&*bank[1], "spare");
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .filter_map(|word| {
                    let word = word.as_ref().trim();
                    if word.is_empty() {
                        return None;
                    }
                    Some(Arc::from(word.to_lowercase().as_str()))
                })
                .collect(),
        }
    }

    /// Returns the words with exactly `word_length` letters, in bank order.
    pub fn words_with_length(&self, word_length: usize) -> Vec<Arc<str>> {
        self.all_words
            .iter()
            .filter(|word| word.chars().count() == word_length)
            .map(Arc::clone)
            .collect()
    }

    /// Returns the distinct word lengths present in the bank.
    pub fn word_lengths(&self) -> BTreeSet<usize> {
        self.all_words
            .iter()
            .map(|word| word.chars().count())
            .collect()
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Counts the number of words that contain each letter.
///
/// A word with a repeated letter is only counted once for that letter.
#[derive(Clone, Debug, Default)]
pub struct LetterCounter {
    num_words_by_letter: HashMap<char, u32>,
}

impl LetterCounter {
    /// Creates a new letter counter based on the given word list.
    pub fn new<S>(words: &[S]) -> LetterCounter
    where
        S: AsRef<str>,
    {
        let mut num_words_by_letter: HashMap<char, u32> = HashMap::new();
        for word in words {
            let unique_letters: HashSet<char> = word.as_ref().chars().collect();
            for letter in unique_letters {
                *num_words_by_letter.entry(letter).or_insert(0) += 1;
            }
        }
        LetterCounter {
            num_words_by_letter,
        }
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        *self.num_words_by_letter.get(&letter).unwrap_or(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn word_bank_from_reader_trims_and_skips_blank_lines() -> Result<(), WordleError> {
        let cursor = Cursor::new(String::from("\n\nworda\n  WordB \n\t\nabc\n"));

        let word_bank = WordBank::from_reader(cursor)?;

        assert_eq!(word_bank.len(), 3);
        assert_eq!(&*word_bank[0], "worda");
        assert_eq!(&*word_bank[1], "wordb");
        assert_eq!(&*word_bank[2], "abc");
        Ok(())
    }

    #[test]
    fn word_bank_words_with_length_keeps_order() {
        let word_bank = WordBank::from_iterator(vec!["other", "abc", "worda", "de", "smore"]);

        let five_words = word_bank.words_with_length(5);
        let five: Vec<&str> = five_words.iter().map(|word| &**word).collect();

        assert_eq!(five, vec!["other", "worda", "smore"]);
        assert!(word_bank.words_with_length(4).is_empty());
        assert_eq!(word_bank.word_lengths(), BTreeSet::from([2, 3, 5]));
    }

    #[test]
    fn letter_counter_num_words_with_letter() {
        let counter = LetterCounter::new(&["hello", "hallo", "worda"]);

        assert_eq!(counter.num_words_with_letter('h'), 2);
        assert_eq!(counter.num_words_with_letter('e'), 1);
        assert_eq!(counter.num_words_with_letter('l'), 2);
        assert_eq!(counter.num_words_with_letter('o'), 3);
        assert_eq!(counter.num_words_with_letter('a'), 2);
        assert_eq!(counter.num_words_with_letter('w'), 1);
        assert_eq!(counter.num_words_with_letter('r'), 1);
        assert_eq!(counter.num_words_with_letter('d'), 1);

        // Missing letters:
        assert_eq!(counter.num_words_with_letter('z'), 0);
    }

    #[test]
    fn letter_counter_empty() {
        let counter = LetterCounter::new::<&str>(&[]);

        assert_eq!(counter.num_words_with_letter('a'), 0);
    }
}
