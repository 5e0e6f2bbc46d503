//! Word search and crossword grid generation.
//!
//! Phrases are normalized, sorted longest-first and placed into a square
//! grid. Word search placement tries shared-letter anchors, then scored
//! random trials, then an exhaustive scan; crosswords only accept
//! placements that cross an existing phrase. A retry loop drives both
//! toward the requested phrase count.
//!
//! ```
//! use wordgrid_core::{GameType, GenerateRequest, Generator, Phrase};
//!
//! let phrases = vec![Phrase::new("house", "casa"), Phrase::new("garden", "jardín")];
//! let request = GenerateRequest::new(phrases, GameType::WordSearch).with_size(8);
//! let puzzle = Generator::with_seed(7).generate(&request).unwrap();
//! assert_eq!(puzzle.grid.len(), 8);
//! ```

mod error;
mod filler;
mod generator;
mod grid;
mod normalize;
mod placer;
mod puzzle;
mod scoring;
mod sizing;
mod types;

pub use error::{GenerationError, Result};
pub use filler::fill_empty;
pub use generator::{generate_with_rng, GenerateRequest, Generator, GeneratorConfig};
pub use grid::{CrosswordCell, CrosswordGrid, LetterGrid, LetterView};
pub use normalize::{find_intersections, normalize, normalized_chars};
pub use placer::{prepare, Board, Candidate, CrosswordBoard, PlacementTier, WordSearchBoard};
pub use puzzle::{Clue, ClueList, PlacedPhrase, Puzzle};
pub use scoring::score;
pub use sizing::estimate_size;
pub use types::{Difficulty, Direction, GameType, Phrase, Position};
