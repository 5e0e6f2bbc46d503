mod config;
mod logging;
mod phrases;
mod render;
mod theme;

use clap::{Parser, ValueEnum};
use config::{CliConfig, Overrides};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use theme::Theme;
use wordgrid_core::{Difficulty, GameType, GenerateRequest, Generator, GeneratorConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameArg {
    WordSearch,
    Crossword,
}

impl From<GameArg> for GameType {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::WordSearch => GameType::WordSearch,
            GameArg::Crossword => GameType::Crossword,
        }
    }
}

/// Generate a word search or crossword from a phrase list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Phrase file: JSON array or one `text<TAB>translation` per line; `-` for stdin
    phrases: String,

    /// Puzzle kind
    #[arg(short, long, value_enum)]
    game_type: Option<GameArg>,

    /// very_easy, easy, medium, hard or very_hard
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Grid size, overriding the difficulty table
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of phrases to place
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the puzzle as JSON
    #[arg(long)]
    json: bool,

    /// Highlight answers in a word search
    #[arg(long)]
    answers: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load().merge(&Overrides {
        game_type: cli.game_type.map(GameType::from),
        difficulty: cli.difficulty.as_deref().map(Difficulty::from_name),
        seed: cli.seed,
        no_color: cli.no_color,
    });
    log::debug!("using {:?} (config file {})", config, CliConfig::path().display());

    let input = if cli.phrases == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&cli.phrases)?
    };
    let phrases = phrases::parse_phrases(&input)?;
    log::info!("read {} phrases", phrases.len());

    let mut request = GenerateRequest::new(phrases, config.game_type);
    request.difficulty = config.difficulty;
    request.size = cli.size;
    request.target_count = cli.count;

    let mut generator = match config.seed {
        Some(seed) => Generator::with_config_and_seed(GeneratorConfig::default(), seed),
        None => Generator::new(),
    };
    let puzzle = generator.generate(&request)?;

    let mut stdout = io::stdout();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &puzzle)?;
        println!();
    } else {
        let theme = Theme::default();
        let use_color = config.color && stdout.is_terminal();
        render::render(&mut stdout, &puzzle, use_color.then_some(&theme), cli.answers)?;
    }
    Ok(())
}
