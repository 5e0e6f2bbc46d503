//! Candidate ranking for word search placements.

use crate::grid::LetterView;
use crate::puzzle::PlacedPhrase;
use crate::types::{Direction, Position};

/// Bonus per coordinate landing on a matching occupied cell
pub const INTERSECTION_WEIGHT: f64 = 15.0;
/// Penalty multiplier for local density
pub const DENSITY_WEIGHT: f64 = 2.0;
/// Neighborhood radius used for density
pub const DENSITY_RADIUS: isize = 2;
/// Flat bonus for any valid placement
pub const PLACEMENT_BONUS: f64 = 1.0;

/// Score a candidate placement. Higher is better; never used to reject.
pub fn score<G: LetterView>(
    grid: &G,
    letters: &[char],
    coords: &[Position],
    placed: &[PlacedPhrase],
    direction: Direction,
) -> f64 {
    let intersections = coords
        .iter()
        .zip(letters)
        .filter(|&(&pos, &ch)| grid.letter(pos) == Some(ch))
        .count();

    let density = density(grid, coords);

    let same_direction = placed.iter().filter(|p| p.direction == direction).count();
    let diversity = 2usize.saturating_sub(same_direction) as f64;

    intersections as f64 * INTERSECTION_WEIGHT - DENSITY_WEIGHT * density + diversity + PLACEMENT_BONUS
}

/// Fraction of occupied cells within `DENSITY_RADIUS` of the coordinates, in `[0, 1]`
pub fn density<G: LetterView>(grid: &G, coords: &[Position]) -> f64 {
    let size = grid.size();
    let mut occupied = 0usize;
    let mut total = 0usize;

    for pos in coords {
        for dr in -DENSITY_RADIUS..=DENSITY_RADIUS {
            for dc in -DENSITY_RADIUS..=DENSITY_RADIUS {
                if let Some(n) = Position::checked(pos.row as isize + dr, pos.col as isize + dc, size) {
                    total += 1;
                    if grid.is_occupied(n) {
                        occupied += 1;
                    }
                }
            }
        }
    }

    if total == 0 {
        0.0
    } else {
        occupied as f64 / total as f64
    }
}
