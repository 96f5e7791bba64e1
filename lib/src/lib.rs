//! Plays Wordle-style puzzles automatically.
//!
//! Each guess's feedback is folded into a [`ConstraintState`], the remaining candidate words are
//! filtered against it with [`filter_candidates`], and a [`GuessSelector`] picks the next guess
//! from whatever is left. A [`Session`] drives this loop against an [`Oracle`] that knows the
//! objective words.

mod data;
mod engine;
mod oracle;
mod restrictions;
mod results;
pub mod selectors;

pub use data::LetterCounter;
pub use data::LocatedLetter;
pub use data::WordBank;
pub use engine::*;
pub use oracle::*;
pub use restrictions::filter_candidates;
pub use restrictions::ConstraintState;
pub use results::*;
pub use selectors::GuessSelector;
