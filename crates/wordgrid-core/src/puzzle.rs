//! Generated puzzle records and their exported shape.

use crate::types::{Direction, GameType, Phrase, Position};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// A phrase committed to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedPhrase {
    /// The caller's phrase, unchanged
    pub phrase: Phrase,
    /// Normalized letters written into the grid
    pub answer: String,
    /// One coordinate per letter of `answer`
    pub coords: Vec<Position>,
    pub direction: Direction,
    /// Crossword only
    pub clue_number: Option<u32>,
}

impl PlacedPhrase {
    pub fn start(&self) -> Option<Position> {
        self.coords.first().copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// A crossword clue entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub number: u32,
    pub answer: String,
    /// The phrase translation, shown as the clue text
    pub clue: String,
    pub start: Position,
    pub length: usize,
}

/// Across and down clue lists, each sorted by number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueList {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

/// A finished puzzle
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub game_type: GameType,
    pub size: usize,
    /// `None` cells only appear in crosswords
    pub grid: Vec<Vec<Option<char>>>,
    pub placed: Vec<PlacedPhrase>,
    /// Number of phrases the caller asked for
    pub target_count: usize,
}

impl Puzzle {
    pub fn cell(&self, pos: Position) -> Option<char> {
        self.grid.get(pos.row).and_then(|r| r.get(pos.col)).copied().flatten()
    }

    /// True when fewer phrases were placed than requested
    pub fn is_short(&self) -> bool {
        self.placed.len() < self.target_count
    }

    /// Cells covered by placed phrases
    pub fn solution_mask(&self) -> Vec<Vec<bool>> {
        let mut mask = vec![vec![false; self.size]; self.size];
        for placed in &self.placed {
            for pos in &placed.coords {
                mask[pos.row][pos.col] = true;
            }
        }
        mask
    }

    /// Crossword clue lists. Empty for word search.
    pub fn clues(&self) -> ClueList {
        let mut list = ClueList::default();
        if self.game_type != GameType::Crossword {
            return list;
        }

        for placed in &self.placed {
            let (Some(number), Some(start)) = (placed.clue_number, placed.start()) else {
                continue;
            };
            let clue = Clue {
                number,
                answer: placed.answer.clone(),
                clue: placed.phrase.translation.clone(),
                start,
                length: placed.len(),
            };
            if placed.direction == Direction::DOWN {
                list.down.push(clue);
            } else {
                list.across.push(clue);
            }
        }

        list.across.sort_by_key(|c| c.number);
        list.down.sort_by_key(|c| c.number);
        list
    }
}

/// Exported direction: axis name for crosswords, raw vector for word search
#[derive(serde::Serialize)]
#[serde(untagged)]
enum DirectionRepr {
    Axis(&'static str),
    Vector([i8; 2]),
}

#[derive(serde::Serialize)]
struct PlacedRecord<'a> {
    #[serde(flatten)]
    phrase: &'a Phrase,
    coords: &'a [Position],
    direction: DirectionRepr,
    #[serde(skip_serializing_if = "Option::is_none")]
    clue_number: Option<u32>,
}

impl Serialize for Puzzle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let grid: Vec<Vec<Option<String>>> = self
            .grid
            .iter()
            .map(|row| row.iter().map(|c| c.map(String::from)).collect())
            .collect();

        let placed: Vec<PlacedRecord<'_>> = self
            .placed
            .iter()
            .map(|p| PlacedRecord {
                phrase: &p.phrase,
                coords: &p.coords,
                direction: match (self.game_type, p.direction.axis_name()) {
                    (GameType::Crossword, Some(name)) => DirectionRepr::Axis(name),
                    _ => DirectionRepr::Vector([p.direction.dr, p.direction.dc]),
                },
                clue_number: p.clue_number,
            })
            .collect();

        let mut state = serializer.serialize_struct("Puzzle", 2)?;
        state.serialize_field("grid", &grid)?;
        state.serialize_field("placed", &placed)?;
        state.end()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| "#".to_string(), String::from))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        if self.game_type == GameType::Crossword {
            let clues = self.clues();
            for (title, entries) in [("Across", &clues.across), ("Down", &clues.down)] {
                writeln!(f)?;
                writeln!(f, "{}:", title)?;
                for clue in entries {
                    writeln!(f, "{:>3}. {} ({})", clue.number, clue.clue, clue.length)?;
                }
            }
        }
        Ok(())
    }
}
