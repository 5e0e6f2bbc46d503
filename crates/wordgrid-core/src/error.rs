use thiserror::Error;

/// Errors raised by puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A crossword never reached `floor(size / 2) + 1` placed phrases
    #[error("could not generate puzzle: needed {needed}, placed {placed} for grid size {size}")]
    CrosswordInfeasible {
        needed: usize,
        placed: usize,
        size: usize,
    },

    /// No phrase survived normalization with enough letters
    #[error("could not generate puzzle: no eligible phrases, needed {needed} for grid size {size}")]
    NoEligiblePhrases { needed: usize, size: usize },

    #[error("invalid grid size {0}")]
    InvalidSize(usize),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_message() {
        let err = GenerationError::CrosswordInfeasible {
            needed: 6,
            placed: 1,
            size: 10,
        };
        assert_eq!(
            err.to_string(),
            "could not generate puzzle: needed 6, placed 1 for grid size 10"
        );
    }
}
