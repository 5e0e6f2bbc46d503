//! Across/down crossword placement with buffer and adjacency rules.

use super::{Board, Candidate, Placement, PlacementTier};
use crate::grid::{CrosswordGrid, LetterView};
use crate::normalize::find_intersections;
use crate::puzzle::PlacedPhrase;
use crate::types::{Direction, Position};
use log::trace;
use std::collections::HashMap;

/// Bonus per letter shared with an existing phrase
pub const CROSSING_WEIGHT: f64 = 10.0;

/// Grid, committed phrases and clue numbering for one crossword attempt
#[derive(Debug, Clone)]
pub struct CrosswordBoard {
    grid: CrosswordGrid,
    placed: Vec<PlacedPhrase>,
    clue_numbers: HashMap<Position, u32>,
    next_clue: u32,
}

impl Board for CrosswordBoard {
    fn size(&self) -> usize {
        self.grid.size()
    }

    fn placed(&self) -> &[PlacedPhrase] {
        &self.placed
    }
}

impl CrosswordBoard {
    pub fn new(size: usize) -> Self {
        Self {
            grid: CrosswordGrid::new(size),
            placed: Vec::new(),
            clue_numbers: HashMap::new(),
            next_clue: 1,
        }
    }

    pub fn grid(&self) -> &CrosswordGrid {
        &self.grid
    }

    pub fn into_parts(self) -> (CrosswordGrid, Vec<PlacedPhrase>) {
        (self.grid, self.placed)
    }

    /// Rebuild a board from a prefix of placements; clue numbers are reassigned
    pub fn replay(size: usize, placements: &[PlacedPhrase]) -> Self {
        let mut board = Self::new(size);
        for p in placements {
            let candidate = Candidate {
                phrase: p.phrase.clone(),
                letters: p.answer.chars().collect(),
            };
            board.commit(
                &candidate,
                Placement {
                    coords: p.coords.clone(),
                    direction: p.direction,
                    score: 0.0,
                },
            );
        }
        board
    }

    /// Place one phrase. The first goes across the middle row; every later
    /// phrase must cross an existing one.
    pub fn place(&mut self, candidate: &Candidate) -> Option<PlacementTier> {
        let size = self.size();
        if candidate.is_empty() || candidate.len() > size {
            trace!("dropping {:?}: does not fit a {}x{} grid", candidate.phrase.text, size, size);
            return None;
        }

        if self.placed.is_empty() {
            let row = (size / 2) as isize;
            let col = ((size - candidate.len()) / 2) as isize;
            let coords = Direction::ACROSS.walk(row, col, candidate.len(), size)?;
            self.commit(
                candidate,
                Placement {
                    coords,
                    direction: Direction::ACROSS,
                    score: 0.0,
                },
            );
            return Some(PlacementTier::Anchor);
        }

        match self.best_crossing(&candidate.letters) {
            Some(placement) => {
                self.commit(candidate, placement);
                Some(PlacementTier::Intersection)
            }
            None => {
                trace!("no crossing for {:?}", candidate.phrase.text);
                None
            }
        }
    }

    fn best_crossing(&self, letters: &[char]) -> Option<Placement> {
        let size = self.size();
        let mut best = None;

        for existing in &self.placed {
            let old: Vec<char> = existing.answer.chars().collect();
            let dir = existing.direction.perpendicular();
            for (pos_new, pos_old) in find_intersections(letters, &old) {
                let anchor = existing.coords[pos_old];
                let row = anchor.row as isize - dir.dr as isize * pos_new as isize;
                let col = anchor.col as isize - dir.dc as isize * pos_new as isize;
                let Some(coords) = dir.walk(row, col, letters.len(), size) else {
                    continue;
                };
                if self.is_valid(letters, &coords, dir) {
                    let score = self.score(letters, &coords);
                    Placement::keep_best(
                        &mut best,
                        Placement {
                            coords,
                            direction: dir,
                            score,
                        },
                    );
                }
            }
        }

        best
    }

    /// Letters agree, the ends are buffered, and no new cell touches a
    /// neighbor across the phrase's axis.
    fn is_valid(&self, letters: &[char], coords: &[Position], dir: Direction) -> bool {
        let size = self.size();
        let (Some(&first), Some(&last)) = (coords.first(), coords.last()) else {
            return false;
        };

        let blocked = |pos: Option<Position>| pos.map_or(false, |p| self.grid.is_occupied(p));
        if blocked(first.step(dir, -1, size)) || blocked(last.step(dir, 1, size)) {
            return false;
        }

        let side = dir.perpendicular();
        for (&pos, &ch) in coords.iter().zip(letters) {
            match self.grid.cell(pos) {
                Some(cell) => {
                    if cell.letter != ch {
                        return false;
                    }
                    // Never run along a phrase that already occupies this axis
                    if cell.owners.iter().any(|&i| self.placed[i].direction == dir) {
                        return false;
                    }
                }
                None => {
                    if blocked(pos.step(side, -1, size)) || blocked(pos.step(side, 1, size)) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Crossings minus the centroid's Manhattan distance from the center
    fn score(&self, letters: &[char], coords: &[Position]) -> f64 {
        let crossings = coords
            .iter()
            .zip(letters)
            .filter(|&(&pos, &ch)| self.grid.letter(pos) == Some(ch))
            .count();

        let n = coords.len() as f64;
        let mean_row = coords.iter().map(|p| p.row as f64).sum::<f64>() / n;
        let mean_col = coords.iter().map(|p| p.col as f64).sum::<f64>() / n;
        let center = (self.size() / 2) as f64;
        let distance = (mean_row - center).abs() + (mean_col - center).abs();

        crossings as f64 * CROSSING_WEIGHT - distance
    }

    fn clue_number_for(&mut self, start: Position) -> u32 {
        let next = &mut self.next_clue;
        *self.clue_numbers.entry(start).or_insert_with(|| {
            let n = *next;
            *next += 1;
            n
        })
    }

    fn commit(&mut self, candidate: &Candidate, placement: Placement) {
        let index = self.placed.len();
        self.grid.write(index, &candidate.letters, &placement.coords);
        let clue_number = placement.coords.first().map(|&start| self.clue_number_for(start));
        self.placed.push(PlacedPhrase {
            phrase: candidate.phrase.clone(),
            answer: candidate.answer(),
            coords: placement.coords,
            direction: placement.direction,
            clue_number,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phrase;

    fn cand(text: &str) -> Candidate {
        Candidate::new(Phrase::new(text, ""))
    }

    fn assert_buffered(board: &CrosswordBoard) {
        let size = board.size();
        for p in board.placed() {
            let first = p.coords[0];
            let last = *p.coords.last().unwrap();
            for pos in [first.step(p.direction, -1, size), last.step(p.direction, 1, size)]
                .into_iter()
                .flatten()
            {
                assert!(!board.grid().is_occupied(pos), "{} not buffered at {:?}", p.answer, pos);
            }
        }
    }

    #[test]
    fn test_first_phrase_centered() {
        let mut board = CrosswordBoard::new(10);
        assert_eq!(board.place(&cand("HELLO")), Some(PlacementTier::Anchor));
        let p = &board.placed()[0];
        assert_eq!(p.direction, Direction::ACROSS);
        assert_eq!(p.clue_number, Some(1));
        let expected: Vec<Position> = (2..=6).map(|c| Position::new(5, c)).collect();
        assert_eq!(p.coords, expected);
    }

    #[test]
    fn test_second_phrase_crosses_down() {
        let mut board = CrosswordBoard::new(10);
        board.place(&cand("HELLO"));
        assert_eq!(board.place(&cand("WORLD")), Some(PlacementTier::Intersection));
        let p = &board.placed()[1];
        assert_eq!(p.direction, Direction::DOWN);
        assert_eq!(p.clue_number, Some(2));
        let shared: Vec<&Position> = p.coords.iter().filter(|c| board.placed()[0].coords.contains(c)).collect();
        assert_eq!(shared.len(), 1);
        assert_buffered(&board);
    }

    #[test]
    fn test_no_shared_letter_is_dropped() {
        let mut board = CrosswordBoard::new(10);
        board.place(&cand("ABC"));
        assert_eq!(board.place(&cand("XYZ")), None);
        assert_eq!(board.placed_count(), 1);
        assert_eq!(board.grid().occupied_count(), 3);
    }

    #[test]
    fn test_adjacency_rules() {
        // "CAT" sits across row 3, columns 2..=4
        let mut board = CrosswordBoard::new(7);
        board.place(&cand("CAT"));

        let crossing: Vec<Position> = (2..5).map(|r| Position::new(r, 3)).collect();
        assert!(board.is_valid(&['B', 'A', 'D'], &crossing, Direction::DOWN));

        // Starts right after the 'T', so the buffer cell is taken
        let run_on = vec![Position::new(3, 5), Position::new(3, 6)];
        assert!(!board.is_valid(&['X', 'Y'], &run_on, Direction::ACROSS));

        // Column 1 would touch the 'C' at (3, 2)
        let beside: Vec<Position> = (2..5).map(|r| Position::new(r, 1)).collect();
        assert!(!board.is_valid(&['Q', 'R', 'S'], &beside, Direction::DOWN));

        // Running along the across word itself is never allowed
        let along: Vec<Position> = (2..5).map(|c| Position::new(3, c)).collect();
        assert!(!board.is_valid(&['C', 'A', 'T'], &along, Direction::ACROSS));
    }

    #[test]
    fn test_shared_start_reuses_clue_number() {
        let mut board = CrosswordBoard::new(9);
        board.place(&cand("SEVEN"));
        board.place(&cand("SOUTH"));
        let across = &board.placed()[0];
        let down = &board.placed()[1];
        assert_eq!(across.start(), down.start());
        assert_eq!(across.clue_number, down.clue_number);
        assert_eq!(board.next_clue, 2);
    }

    #[test]
    fn test_many_phrases_keep_invariants() {
        let mut board = CrosswordBoard::new(13);
        for word in ["ELEPHANT", "GIRAFFE", "LEOPARD", "RABBIT", "PARROT", "TIGER", "OTTER", "HORSE"] {
            board.place(&cand(word));
        }
        assert!(board.placed_count() >= 3);
        assert_buffered(&board);
        for (i, p) in board.placed().iter().enumerate() {
            for (pos, ch) in p.coords.iter().zip(p.answer.chars()) {
                let cell = board.grid().cell(*pos).unwrap();
                assert_eq!(cell.letter, ch);
                assert!(cell.owners.contains(&i));
            }
        }
    }

    #[test]
    fn test_replay_prefix() {
        let mut board = CrosswordBoard::new(10);
        for word in ["HELLO", "WORLD", "LOOP"] {
            board.place(&cand(word));
        }
        let count = board.placed_count();
        assert!(count >= 2);
        let trimmed = CrosswordBoard::replay(10, &board.placed()[..2]);
        assert_eq!(trimmed.placed_count(), 2);
        assert_eq!(trimmed.placed()[0].clue_number, Some(1));
        let occupied: usize = 5 + 5 - 1;
        assert_eq!(trimmed.grid().occupied_count(), occupied);
    }
}
