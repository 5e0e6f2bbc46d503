use serde::{Deserialize, Serialize};

/// A phrase supplied by the caller. Copied verbatim into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Phrase {
    pub fn new(text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: translation.into(),
            categories: None,
        }
    }

    /// Attach category metadata
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// A cell position in a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `dir`, returning `None` when leaving a `size`x`size` grid
    pub fn step(self, dir: Direction, steps: isize, size: usize) -> Option<Position> {
        let row = self.row as isize + dir.dr as isize * steps;
        let col = self.col as isize + dir.dc as isize * steps;
        Position::checked(row, col, size)
    }

    /// Build a position from signed coordinates if they fall inside the grid
    pub fn checked(row: isize, col: isize, size: usize) -> Option<Position> {
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            None
        } else {
            Some(Position::new(row as usize, col as usize))
        }
    }

    /// Iterate over every position of a `size`x`size` grid in row-major order
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }
}

impl Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.row, self.col].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [row, col] = <[usize; 2]>::deserialize(deserializer)?;
        Ok(Position::new(row, col))
    }
}

/// Unit step vector for a placed phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const ACROSS: Direction = Direction::new(0, 1);
    pub const DOWN: Direction = Direction::new(1, 0);

    /// The eight word search directions, in systematic scan order
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    /// Crossword axis name, if this is one of the two crossword directions
    pub fn axis_name(&self) -> Option<&'static str> {
        match (self.dr, self.dc) {
            (0, 1) => Some("across"),
            (1, 0) => Some("down"),
            _ => None,
        }
    }

    /// The other crossword axis
    pub fn perpendicular(&self) -> Direction {
        Direction::new(self.dc, self.dr)
    }

    /// Coordinates of a phrase of `len` letters starting at signed `(row, col)`.
    /// Returns `None` if any cell leaves the grid.
    pub fn walk(&self, row: isize, col: isize, len: usize, size: usize) -> Option<Vec<Position>> {
        (0..len as isize)
            .map(|i| {
                Position::checked(
                    row + self.dr as isize * i,
                    col + self.dc as isize * i,
                    size,
                )
            })
            .collect()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.axis_name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.dr, self.dc),
        }
    }
}

/// Kind of puzzle to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    #[default]
    WordSearch,
    Crossword,
}

impl GameType {
    /// Minimum number of placed phrases for a valid puzzle of `size`
    pub fn min_phrases(&self, size: usize) -> usize {
        match self {
            GameType::WordSearch => 0,
            GameType::Crossword => size / 2 + 1,
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameType::WordSearch => write!(f, "Word Search"),
            GameType::Crossword => write!(f, "Crossword"),
        }
    }
}

/// Difficulty level of a puzzle.
///
/// Unrecognized names resolve to the same parameters as `Easy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Difficulty {
    VeryEasy,
    #[default]
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// Parse a difficulty name. Anything unrecognized falls back to `Easy`.
    pub fn from_name(name: &str) -> Difficulty {
        match name.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "very_easy" => Difficulty::VeryEasy,
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "very_hard" => Difficulty::VeryHard,
            _ => Difficulty::Easy,
        }
    }

    /// `(grid_size, target_count)` for this difficulty
    pub fn params(&self) -> (usize, usize) {
        match self {
            Difficulty::VeryEasy => (8, 5),
            Difficulty::Easy => (10, 7),
            Difficulty::Medium => (13, 10),
            Difficulty::Hard => (15, 12),
            Difficulty::VeryHard => (20, 16),
        }
    }

    pub fn grid_size(&self) -> usize {
        self.params().0
    }

    pub fn target_count(&self) -> usize {
        self.params().1
    }

    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::VeryEasy,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::VeryHard,
        ]
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Difficulty::from_name(&name)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::VeryEasy => write!(f, "Very Easy"),
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::VeryHard => write!(f, "Very Hard"),
        }
    }
}
