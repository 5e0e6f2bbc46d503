use crate::error::{GenerationError, Result};
use crate::filler::fill_empty;
use crate::placer::{longest_first, prepare, Board, Candidate, CrosswordBoard, WordSearchBoard};
use crate::puzzle::Puzzle;
use crate::sizing::estimate_size_from_lengths;
use crate::types::{Difficulty, GameType, Phrase};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Tuning knobs for generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Word search attempts before settling for the best result
    pub max_attempts: usize,
    /// Crossword attempts before giving up
    pub max_retries: usize,
    /// Crossword pool size as a multiple of the target count
    pub crossword_oversample: usize,
    /// Upper bound on random trials per phrase
    pub random_trial_cap: usize,
    /// Random-tier acceptance threshold at trial zero
    pub threshold_base: i64,
    /// Trials per one-point drop of the threshold
    pub threshold_decay: usize,
    /// Floor for the acceptance threshold
    pub min_threshold: i64,
    /// Phrases with fewer normalized letters are never placed
    pub min_phrase_len: usize,
    /// Largest grid side accepted, explicit or derived
    pub max_grid_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            max_retries: 5,
            crossword_oversample: 3,
            random_trial_cap: 200,
            threshold_base: 5,
            threshold_decay: 20,
            min_threshold: 1,
            min_phrase_len: 3,
            max_grid_size: 256,
        }
    }
}

impl GeneratorConfig {
    /// Score a random-tier candidate must reach to stop early at trial `attempt`
    pub fn acceptance_threshold(&self, attempt: usize) -> f64 {
        let decay = self.threshold_decay.max(1);
        let relaxed = self.threshold_base - (attempt / decay) as i64;
        relaxed.max(self.min_threshold) as f64
    }
}

/// A single generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub game_type: GameType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Explicit grid size, overriding the difficulty table and estimation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Explicit phrase count, overriding the difficulty table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_count: Option<usize>,
}

impl GenerateRequest {
    pub fn new(phrases: Vec<Phrase>, game_type: GameType) -> Self {
        Self {
            phrases,
            game_type,
            difficulty: None,
            size: None,
            target_count: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_target_count(mut self, count: usize) -> Self {
        self.target_count = Some(count);
        self
    }
}

/// Puzzle generator owning its configuration and random source
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(entropy_seed()),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config_and_seed(GeneratorConfig::default(), seed)
    }

    pub fn with_config_and_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle for `request`
    pub fn generate(&mut self, request: &GenerateRequest) -> Result<Puzzle> {
        generate_with_rng(request, &self.config, &mut self.rng)
    }
}

/// Seed from the OS, falling back to a process-wide counter where unavailable
fn entropy_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    if getrandom::getrandom(&mut seed_bytes).is_err() {
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    }
    u64::from_le_bytes(seed_bytes)
}

/// Generate a puzzle drawing all randomness from `rng`
pub fn generate_with_rng<R: Rng + ?Sized>(
    request: &GenerateRequest,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Puzzle> {
    let pool = prepare(&request.phrases, config.min_phrase_len);

    let size = match (request.size, request.difficulty) {
        (Some(size), _) => size,
        (None, Some(difficulty)) => difficulty.grid_size(),
        (None, None) => {
            let lengths: Vec<usize> = pool.iter().map(Candidate::len).collect();
            estimate_size_from_lengths(&lengths)
        }
    };
    if size == 0 || size > config.max_grid_size {
        return Err(GenerationError::InvalidSize(size));
    }

    let target = match (request.target_count, request.difficulty) {
        (Some(count), _) => count,
        (None, Some(difficulty)) => difficulty.target_count(),
        (None, None) => pool.len(),
    };

    debug!(
        "generating {} of size {} with {} eligible phrases, target {}",
        request.game_type,
        size,
        pool.len(),
        target
    );

    match request.game_type {
        GameType::WordSearch => Ok(word_search(pool, size, target, config, rng)),
        GameType::Crossword => crossword(pool, size, target, config, rng),
    }
}

/// Best board seen across attempts, ranked by placed count
struct BestAttempt<B> {
    board: Option<B>,
    placed: usize,
    attempt: usize,
}

impl<B: Board> BestAttempt<B> {
    fn new() -> Self {
        Self {
            board: None,
            placed: 0,
            attempt: 0,
        }
    }

    /// Keep `board` if it placed strictly more phrases than the current best
    fn offer(&mut self, attempt: usize, board: B) {
        let placed = board.placed_count();
        if self.board.is_none() || placed > self.placed {
            self.board = Some(board);
            self.placed = placed;
            self.attempt = attempt;
        }
    }
}

fn word_search<R: Rng + ?Sized>(
    mut pool: Vec<Candidate>,
    size: usize,
    target: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Puzzle {
    pool.shuffle(rng);
    let take = target.min(pool.len());
    let mut reserve = pool.split_off(take);
    let mut working = pool;

    let mut best = BestAttempt::new();

    for attempt in 1..=config.max_attempts.max(1) {
        let mut order: Vec<&Candidate> = working.iter().collect();
        longest_first(&mut order);

        let mut board = WordSearchBoard::new(size);
        let mut dropped = Vec::new();
        for candidate in order {
            if board.place(candidate, config, rng).is_none() {
                dropped.push(candidate.clone());
            }
        }

        let placed = board.placed_count();
        debug!(
            "word search attempt {}: placed {}/{} (best {})",
            attempt, placed, target, best.placed
        );
        best.offer(attempt, board);

        // Every working phrase placed: nothing better is reachable
        if placed >= target || dropped.is_empty() {
            break;
        }

        swap_dropped(&mut working, &mut reserve, &dropped, rng);
    }

    let board = match best.board {
        Some(board) if board.placed_count() > target => {
            WordSearchBoard::replay(size, &board.placed()[..target])
        }
        Some(board) => board,
        None => WordSearchBoard::new(size),
    };

    if board.placed_count() < target {
        warn!(
            "word search placed {} of {} requested phrases (best at attempt {})",
            board.placed_count(),
            target,
            best.attempt
        );
    }

    let (mut grid, placed) = board.into_parts();
    fill_empty(&mut grid, rng);

    Puzzle {
        game_type: GameType::WordSearch,
        size,
        grid: grid.rows(),
        placed,
        target_count: target,
    }
}

/// Swap each dropped phrase for a random unused one. Phrases dropped this
/// round are parked past `fresh` so they are not drawn back in.
fn swap_dropped<R: Rng + ?Sized>(
    working: &mut [Candidate],
    reserve: &mut [Candidate],
    dropped: &[Candidate],
    rng: &mut R,
) {
    let mut fresh = reserve.len();
    for failed in dropped {
        if fresh == 0 {
            break;
        }
        let pick = rng.gen_range(0..fresh);
        if let Some(slot) = working.iter().position(|c| c == failed) {
            std::mem::swap(&mut working[slot], &mut reserve[pick]);
            fresh -= 1;
            reserve.swap(pick, fresh);
        }
    }
}

fn crossword<R: Rng + ?Sized>(
    mut pool: Vec<Candidate>,
    size: usize,
    target: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Puzzle> {
    let needed = GameType::Crossword.min_phrases(size);
    if pool.is_empty() {
        return Err(GenerationError::NoEligiblePhrases { needed, size });
    }

    let keep = target.max(needed);
    let sample = pool.len().min(config.crossword_oversample.max(1) * keep);
    let mut best = BestAttempt::new();

    for attempt in 1..=config.max_retries.max(1) {
        pool.shuffle(rng);
        let mut order: Vec<&Candidate> = pool[..sample].iter().collect();
        longest_first(&mut order);

        let mut board = CrosswordBoard::new(size);
        for candidate in order {
            board.place(candidate);
        }

        let placed = board.placed_count();
        debug!(
            "crossword attempt {}: placed {} (needed {}, best {})",
            attempt, placed, needed, best.placed
        );
        best.offer(attempt, board);

        if placed >= needed {
            break;
        }
    }

    let board = match best.board {
        Some(board) if board.placed_count() >= needed => board,
        _ => {
            return Err(GenerationError::CrosswordInfeasible {
                needed,
                placed: best.placed,
                size,
            })
        }
    };

    let board = if board.placed_count() > keep {
        CrosswordBoard::replay(size, &board.placed()[..keep])
    } else {
        board
    };

    let (grid, placed) = board.into_parts();
    Ok(Puzzle {
        game_type: GameType::Crossword,
        size,
        grid: grid.rows(),
        placed,
        target_count: target,
    })
}
