use crossterm::style::Color;

/// Colors for terminal puzzle output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Filler letters in a word search
    pub noise: Color,
    /// Letters belonging to a placed phrase
    pub answer: Color,
    /// Crossword block cells
    pub block: Color,
    /// Headings and clue numbers
    pub heading: Color,
    /// Secondary text
    pub info: Color,
    /// Shortfall warnings
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            noise: Color::Rgb { r: 140, g: 150, b: 180 },
            answer: Color::Rgb { r: 80, g: 180, b: 255 },
            block: Color::Rgb { r: 70, g: 75, b: 90 },
            heading: Color::Rgb { r: 255, g: 210, b: 100 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            warning: Color::Rgb { r: 255, g: 90, b: 90 },
        }
    }
}
