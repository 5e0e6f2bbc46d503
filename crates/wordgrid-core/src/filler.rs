use crate::grid::{LetterGrid, LetterView};
use crate::types::Position;
use rand::Rng;

/// Give every empty word search cell a uniformly random letter A-Z
pub fn fill_empty<R: Rng + ?Sized>(grid: &mut LetterGrid, rng: &mut R) {
    for pos in Position::all(grid.size()) {
        if !grid.is_occupied(pos) {
            let ch = (b'A' + rng.gen_range(0..26u8)) as char;
            grid.set(pos, ch);
        }
    }
}
