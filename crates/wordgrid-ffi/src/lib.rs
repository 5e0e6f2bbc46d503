use wordgrid_core::{
    Difficulty, GameType, GenerateRequest, GenerationError, Generator, Phrase, PlacedPhrase, Puzzle,
};

uniffi::setup_scaffolding!();

/// Puzzle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum PuzzleKind {
    WordSearch,
    Crossword,
}

impl From<PuzzleKind> for GameType {
    fn from(k: PuzzleKind) -> Self {
        match k {
            PuzzleKind::WordSearch => GameType::WordSearch,
            PuzzleKind::Crossword => GameType::Crossword,
        }
    }
}

/// Difficulty level for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum PuzzleDifficulty {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl From<PuzzleDifficulty> for Difficulty {
    fn from(d: PuzzleDifficulty) -> Self {
        match d {
            PuzzleDifficulty::VeryEasy => Difficulty::VeryEasy,
            PuzzleDifficulty::Easy => Difficulty::Easy,
            PuzzleDifficulty::Medium => Difficulty::Medium,
            PuzzleDifficulty::Hard => Difficulty::Hard,
            PuzzleDifficulty::VeryHard => Difficulty::VeryHard,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct PhraseInput {
    pub text: String,
    pub translation: String,
    pub categories: Option<Vec<String>>,
}

impl From<PhraseInput> for Phrase {
    fn from(p: PhraseInput) -> Self {
        let phrase = Phrase::new(p.text, p.translation);
        match p.categories {
            Some(categories) => phrase.with_categories(categories),
            None => phrase,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct PuzzleRequest {
    pub phrases: Vec<PhraseInput>,
    pub kind: PuzzleKind,
    pub difficulty: Option<PuzzleDifficulty>,
    pub size: Option<u32>,
    pub target_count: Option<u32>,
    /// Fixed seed for reproducible puzzles
    pub seed: Option<u64>,
}

/// A grid coordinate
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct PlacedEntry {
    pub text: String,
    pub translation: String,
    pub categories: Option<Vec<String>>,
    pub answer: String,
    pub coords: Vec<GridCell>,
    pub direction_row: i8,
    pub direction_col: i8,
    /// "across" or "down" for crosswords
    pub direction_name: Option<String>,
    pub clue_number: Option<u32>,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct PuzzleResult {
    pub size: u32,
    /// Row-major letters; empty string for unused crossword cells
    pub cells: Vec<String>,
    pub placed: Vec<PlacedEntry>,
    pub target_count: u32,
    /// Fewer phrases placed than requested
    pub short: bool,
    /// The puzzle in its JSON export shape
    pub json: String,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct DifficultyParams {
    pub grid_size: u32,
    pub target_count: u32,
}

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PuzzleError {
    #[error("{message}")]
    Infeasible { needed: u32, placed: u32, size: u32, message: String },
    #[error("{message}")]
    InvalidRequest { message: String },
}

impl From<GenerationError> for PuzzleError {
    fn from(e: GenerationError) -> Self {
        let message = e.to_string();
        match e {
            GenerationError::CrosswordInfeasible { needed, placed, size } => PuzzleError::Infeasible {
                needed: needed as u32,
                placed: placed as u32,
                size: size as u32,
                message,
            },
            GenerationError::NoEligiblePhrases { needed, size } => PuzzleError::Infeasible {
                needed: needed as u32,
                placed: 0,
                size: size as u32,
                message,
            },
            GenerationError::InvalidSize(_) => PuzzleError::InvalidRequest { message },
        }
    }
}

fn placed_entry(game_type: GameType, p: &PlacedPhrase) -> PlacedEntry {
    PlacedEntry {
        text: p.phrase.text.clone(),
        translation: p.phrase.translation.clone(),
        categories: p.phrase.categories.clone(),
        answer: p.answer.clone(),
        coords: p
            .coords
            .iter()
            .map(|c| GridCell {
                row: c.row as u32,
                col: c.col as u32,
            })
            .collect(),
        direction_row: p.direction.dr,
        direction_col: p.direction.dc,
        direction_name: match game_type {
            GameType::Crossword => p.direction.axis_name().map(String::from),
            GameType::WordSearch => None,
        },
        clue_number: p.clue_number,
    }
}

fn puzzle_result(puzzle: &Puzzle) -> Result<PuzzleResult, PuzzleError> {
    let json = serde_json::to_string(puzzle).map_err(|e| PuzzleError::InvalidRequest { message: e.to_string() })?;
    Ok(PuzzleResult {
        size: puzzle.size as u32,
        cells: puzzle
            .grid
            .iter()
            .flatten()
            .map(|c| c.map(String::from).unwrap_or_default())
            .collect(),
        placed: puzzle.placed.iter().map(|p| placed_entry(puzzle.game_type, p)).collect(),
        target_count: puzzle.target_count as u32,
        short: puzzle.is_short(),
        json,
    })
}

/// Generate a puzzle
#[uniffi::export]
pub fn generate_puzzle(request: PuzzleRequest) -> Result<PuzzleResult, PuzzleError> {
    let phrases = request
        .phrases
        .into_iter()
        .map(Phrase::from)
        .collect();

    let mut req = GenerateRequest::new(phrases, request.kind.into());
    req.difficulty = request.difficulty.map(Difficulty::from);
    req.size = request.size.map(|s| s as usize);
    req.target_count = request.target_count.map(|n| n as usize);

    let mut generator = match request.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    let puzzle = generator.generate(&req)?;
    puzzle_result(&puzzle)
}

/// Letters a phrase contributes to the grid
#[uniffi::export]
pub fn normalize_phrase(text: String) -> String {
    wordgrid_core::normalize(&text)
}

/// Grid size and phrase count for a difficulty
#[uniffi::export]
pub fn difficulty_params(difficulty: PuzzleDifficulty) -> DifficultyParams {
    let (grid_size, target_count) = Difficulty::from(difficulty).params();
    DifficultyParams {
        grid_size: grid_size as u32,
        target_count: target_count as u32,
    }
}
