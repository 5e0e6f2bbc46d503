//! Square grid buffers for the two puzzle kinds.

use crate::types::Position;
use std::collections::BTreeSet;

/// Read access shared by both grid kinds
pub trait LetterView {
    fn size(&self) -> usize;

    /// Letter at `pos`, or `None` if the cell is unoccupied
    fn letter(&self, pos: Position) -> Option<char>;

    fn is_occupied(&self, pos: Position) -> bool {
        self.letter(pos).is_some()
    }

    /// True if every coordinate is empty or already holds the matching letter
    fn fits(&self, letters: &[char], coords: &[Position]) -> bool {
        coords
            .iter()
            .zip(letters)
            .all(|(&pos, &ch)| self.letter(pos).map_or(true, |existing| existing == ch))
    }
}

/// Word search grid: one letter per cell, `None` until filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn idx(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn set(&mut self, pos: Position, ch: char) {
        let idx = self.idx(pos);
        self.cells[idx] = Some(ch);
    }

    /// Write a phrase's letters along its coordinates
    pub fn write(&mut self, letters: &[char], coords: &[Position]) {
        for (&pos, &ch) in coords.iter().zip(letters) {
            self.set(pos, ch);
        }
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Rows of cells, as exported in puzzle output
    pub fn rows(&self) -> Vec<Vec<Option<char>>> {
        self.cells.chunks(self.size.max(1)).map(|r| r.to_vec()).collect()
    }
}

impl LetterView for LetterGrid {
    fn size(&self) -> usize {
        self.size
    }

    fn letter(&self, pos: Position) -> Option<char> {
        self.cells[self.idx(pos)]
    }
}

/// An occupied crossword cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordCell {
    pub letter: char,
    /// Indices into the placed-phrase list of every phrase covering this cell
    pub owners: BTreeSet<usize>,
}

/// Crossword grid: unoccupied cells stay `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordGrid {
    size: usize,
    cells: Vec<Option<CrosswordCell>>,
}

impl CrosswordGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn idx(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn cell(&self, pos: Position) -> Option<&CrosswordCell> {
        self.cells[self.idx(pos)].as_ref()
    }

    /// Write phrase `owner`'s letters. Existing cells must already agree.
    pub fn write(&mut self, owner: usize, letters: &[char], coords: &[Position]) {
        for (&pos, &ch) in coords.iter().zip(letters) {
            let idx = self.idx(pos);
            let cell = self.cells[idx].get_or_insert_with(|| CrosswordCell {
                letter: ch,
                owners: BTreeSet::new(),
            });
            debug_assert_eq!(cell.letter, ch);
            cell.owners.insert(owner);
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn rows(&self) -> Vec<Vec<Option<char>>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|r| r.iter().map(|c| c.as_ref().map(|c| c.letter)).collect())
            .collect()
    }
}

impl LetterView for CrosswordGrid {
    fn size(&self) -> usize {
        self.size
    }

    fn letter(&self, pos: Position) -> Option<char> {
        self.cell(pos).map(|c| c.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grid_fits() {
        let mut grid = LetterGrid::new(4);
        let coords = vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        grid.write(&['C', 'A', 'T'], &coords);

        assert!(grid.fits(&['C', 'A', 'T'], &coords));
        assert!(!grid.fits(&['D', 'O', 'G'], &coords));
        let down = vec![Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)];
        assert!(grid.fits(&['A', 'P', 'E'], &down));
        assert_eq!(grid.empty_count(), 13);
    }

    #[test]
    fn test_crossword_owners() {
        let mut grid = CrosswordGrid::new(5);
        let across = vec![Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)];
        let down = vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)];
        grid.write(0, &['C', 'A', 'T'], &across);
        grid.write(1, &['B', 'A', 'D'], &down);

        let shared = grid.cell(Position::new(2, 1)).unwrap();
        assert_eq!(shared.letter, 'A');
        assert_eq!(shared.owners.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(grid.occupied_count(), 5);
        assert_eq!(grid.rows()[2][0], Some('C'));
        assert_eq!(grid.rows()[0][0], None);
    }
}
