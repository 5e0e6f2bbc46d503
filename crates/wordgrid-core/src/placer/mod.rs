//! Phrase placement strategies.

mod crossword;
mod word_search;

pub use crossword::CrosswordBoard;
pub use word_search::WordSearchBoard;

use crate::normalize::normalized_chars;
use crate::puzzle::PlacedPhrase;
use crate::types::{Direction, Phrase, Position};

/// A phrase ready for placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub phrase: Phrase,
    pub letters: Vec<char>,
}

impl Candidate {
    pub fn new(phrase: Phrase) -> Self {
        let letters = normalized_chars(&phrase.text);
        Self { phrase, letters }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn answer(&self) -> String {
        self.letters.iter().collect()
    }
}

/// Normalize phrases and drop those shorter than `min_len` letters
pub fn prepare(phrases: &[Phrase], min_len: usize) -> Vec<Candidate> {
    phrases
        .iter()
        .cloned()
        .map(Candidate::new)
        .filter(|c| c.len() >= min_len)
        .collect()
}

/// Sort longest-first, keeping input order among equal lengths
pub fn longest_first(candidates: &mut [&Candidate]) {
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));
}

/// Which strategy committed a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementTier {
    /// First crossword phrase, centered
    Anchor,
    Intersection,
    RandomScored,
    Systematic,
}

/// A validated, not yet committed placement
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placement {
    pub coords: Vec<Position>,
    pub direction: Direction,
    pub score: f64,
}

impl Placement {
    /// Keep `candidate` if it beats the current best
    pub fn keep_best(best: &mut Option<Placement>, candidate: Placement) {
        if best.as_ref().map_or(true, |b| candidate.score > b.score) {
            *best = Some(candidate);
        }
    }
}

/// Common view over a board's committed phrases
pub trait Board {
    fn size(&self) -> usize;
    fn placed(&self) -> &[PlacedPhrase];

    fn placed_count(&self) -> usize {
        self.placed().len()
    }
}
