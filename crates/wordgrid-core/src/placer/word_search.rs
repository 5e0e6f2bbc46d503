//! Eight-direction word search placement.
//!
//! Each phrase goes through up to three tiers: anchor on a shared letter of
//! an already placed phrase, randomized scored trials, then an exhaustive
//! scan that takes the first fit.

use super::{Board, Candidate, Placement, PlacementTier};
use crate::generator::GeneratorConfig;
use crate::grid::{LetterGrid, LetterView};
use crate::normalize::find_intersections;
use crate::puzzle::PlacedPhrase;
use crate::scoring;
use crate::types::{Direction, Position};
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

/// Grid and committed phrases for one word search attempt
#[derive(Debug, Clone)]
pub struct WordSearchBoard {
    grid: LetterGrid,
    placed: Vec<PlacedPhrase>,
}

impl Board for WordSearchBoard {
    fn size(&self) -> usize {
        self.grid.size()
    }

    fn placed(&self) -> &[PlacedPhrase] {
        &self.placed
    }
}

impl WordSearchBoard {
    pub fn new(size: usize) -> Self {
        Self {
            grid: LetterGrid::new(size),
            placed: Vec::new(),
        }
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn into_parts(self) -> (LetterGrid, Vec<PlacedPhrase>) {
        (self.grid, self.placed)
    }

    /// Rebuild a board holding only the given placements, in order
    pub fn replay(size: usize, placements: &[PlacedPhrase]) -> Self {
        let mut board = Self::new(size);
        for p in placements {
            let letters: Vec<char> = p.answer.chars().collect();
            board.grid.write(&letters, &p.coords);
            board.placed.push(p.clone());
        }
        board
    }

    /// Place one phrase. Returns the tier that committed it, or `None` if dropped.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        candidate: &Candidate,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Option<PlacementTier> {
        let size = self.size();
        if candidate.is_empty() || candidate.len() > size {
            trace!("dropping {:?}: does not fit a {}x{} grid", candidate.phrase.text, size, size);
            return None;
        }

        let attempt = if self.placed.is_empty() {
            None
        } else {
            self.try_intersection(&candidate.letters)
                .map(|p| (p, PlacementTier::Intersection))
        };

        let chosen = attempt
            .or_else(|| {
                self.try_random_scored(&candidate.letters, config, rng)
                    .map(|p| (p, PlacementTier::RandomScored))
            })
            .or_else(|| {
                self.try_systematic(&candidate.letters)
                    .map(|p| (p, PlacementTier::Systematic))
            });

        match chosen {
            Some((placement, tier)) => {
                trace!("placed {:?} via {:?}", candidate.phrase.text, tier);
                self.commit(candidate, placement);
                Some(tier)
            }
            None => {
                trace!("no placement for {:?}", candidate.phrase.text);
                None
            }
        }
    }

    fn candidate_at(&self, letters: &[char], row: isize, col: isize, dir: Direction) -> Option<Vec<Position>> {
        let coords = dir.walk(row, col, letters.len(), self.size())?;
        self.grid.fits(letters, &coords).then_some(coords)
    }

    fn scored(&self, letters: &[char], coords: Vec<Position>, direction: Direction) -> Placement {
        let score = scoring::score(&self.grid, letters, &coords, &self.placed, direction);
        Placement {
            coords,
            direction,
            score,
        }
    }

    /// Best-scoring placement that shares a letter with a placed phrase
    fn try_intersection(&self, letters: &[char]) -> Option<Placement> {
        let mut best = None;

        for existing in &self.placed {
            let old: Vec<char> = existing.answer.chars().collect();
            for (pos_new, pos_old) in find_intersections(letters, &old) {
                let anchor = existing.coords[pos_old];
                for &dir in &Direction::ALL {
                    let row = anchor.row as isize - dir.dr as isize * pos_new as isize;
                    let col = anchor.col as isize - dir.dc as isize * pos_new as isize;
                    if let Some(coords) = self.candidate_at(letters, row, col, dir) {
                        Placement::keep_best(&mut best, self.scored(letters, coords, dir));
                    }
                }
            }
        }

        best
    }

    /// Random start cells, all directions per cell, until the score clears a relaxing threshold
    fn try_random_scored<R: Rng + ?Sized>(
        &self,
        letters: &[char],
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Option<Placement> {
        let size = self.size();
        let trials = (size * size).min(config.random_trial_cap);
        let mut best: Option<Placement> = None;
        let mut directions = Direction::ALL;

        for attempt in 0..trials {
            let row = rng.gen_range(0..size) as isize;
            let col = rng.gen_range(0..size) as isize;
            directions.shuffle(rng);

            for &dir in &directions {
                if let Some(coords) = self.candidate_at(letters, row, col, dir) {
                    Placement::keep_best(&mut best, self.scored(letters, coords, dir));
                }
            }

            if let Some(b) = &best {
                if b.score >= config.acceptance_threshold(attempt) {
                    break;
                }
            }
        }

        best
    }

    /// First fit in row, column, direction order
    fn try_systematic(&self, letters: &[char]) -> Option<Placement> {
        for start in Position::all(self.size()) {
            for &dir in &Direction::ALL {
                if let Some(coords) = self.candidate_at(letters, start.row as isize, start.col as isize, dir) {
                    return Some(Placement {
                        coords,
                        direction: dir,
                        score: 0.0,
                    });
                }
            }
        }
        None
    }

    fn commit(&mut self, candidate: &Candidate, placement: Placement) {
        self.grid.write(&candidate.letters, &placement.coords);
        self.placed.push(PlacedPhrase {
            phrase: candidate.phrase.clone(),
            answer: candidate.answer(),
            coords: placement.coords,
            direction: placement.direction,
            clue_number: None,
        });
    }
}
