//! Basic example of using the puzzle engine

use wordgrid_core::{Difficulty, GameType, GenerateRequest, Generator, Phrase};

fn main() {
    let phrases = vec![
        Phrase::new("apple", "manzana"),
        Phrase::new("banana", "plátano"),
        Phrase::new("cherry", "cereza"),
        Phrase::new("grape", "uva"),
        Phrase::new("lemon", "limón"),
        Phrase::new("orange", "naranja"),
        Phrase::new("pear", "pera"),
        Phrase::new("peach", "melocotón"),
        Phrase::new("melon", "melón"),
        Phrase::new("plum", "ciruela"),
        Phrase::new("strawberry", "fresa"),
        Phrase::new("watermelon", "sandía"),
    ];

    let mut generator = Generator::new();

    // Word search
    println!("Generating an Easy word search...\n");
    let request = GenerateRequest::new(phrases.clone(), GameType::WordSearch).with_difficulty(Difficulty::Easy);
    match generator.generate(&request) {
        Ok(puzzle) => {
            println!("{}", puzzle);
            for placed in &puzzle.placed {
                println!("{:<12} {:?} {}", placed.answer, placed.start(), placed.direction);
            }
            if puzzle.is_short() {
                println!("Only placed {} of {}", puzzle.placed.len(), puzzle.target_count);
            }
        }
        Err(e) => println!("Error: {}", e),
    }

    // Crossword
    println!("\nGenerating a Medium crossword...\n");
    let request = GenerateRequest::new(phrases, GameType::Crossword).with_difficulty(Difficulty::Medium);
    match generator.generate(&request) {
        Ok(puzzle) => println!("{}", puzzle),
        Err(e) => println!("Error: {}", e),
    }
}
