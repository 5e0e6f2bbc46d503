use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};
use wordgrid_core::{GameType, Puzzle};

/// Print the grid and phrase list. `highlight` marks answer cells in a word search.
pub fn render<W: Write>(out: &mut W, puzzle: &Puzzle, theme: Option<&Theme>, highlight: bool) -> io::Result<()> {
    let mask = puzzle.solution_mask();

    heading(out, theme, &format!("{} {}x{}", puzzle.game_type, puzzle.size, puzzle.size))?;
    queue!(out, Print("\n\n"))?;

    for (r, row) in puzzle.grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (text, color) = match cell {
                Some(ch) if highlight && mask[r][c] => (ch.to_string(), theme.map(|t| t.answer)),
                Some(ch) if puzzle.game_type == GameType::WordSearch => (ch.to_string(), theme.map(|t| t.noise)),
                Some(ch) => (ch.to_string(), theme.map(|t| t.answer)),
                None => ("#".to_string(), theme.map(|t| t.block)),
            };
            colored(out, color, &text)?;
            queue!(out, Print(" "))?;
        }
        queue!(out, Print("\n"))?;
    }
    queue!(out, Print("\n"))?;

    match puzzle.game_type {
        GameType::WordSearch => render_word_list(out, puzzle, theme)?,
        GameType::Crossword => render_clues(out, puzzle, theme)?,
    }

    if puzzle.is_short() {
        queue!(out, Print("\n"))?;
        colored(
            out,
            theme.map(|t| t.warning),
            &format!("Placed {} of {} requested phrases\n", puzzle.placed.len(), puzzle.target_count),
        )?;
    }

    out.flush()
}

fn render_word_list<W: Write>(out: &mut W, puzzle: &Puzzle, theme: Option<&Theme>) -> io::Result<()> {
    heading(out, theme, "Find")?;
    queue!(out, Print("\n"))?;
    for placed in &puzzle.placed {
        queue!(out, Print(format!("  {:<16}", placed.answer)))?;
        colored(out, theme.map(|t| t.info), &format!("{}\n", placed.phrase.translation))?;
    }
    Ok(())
}

fn render_clues<W: Write>(out: &mut W, puzzle: &Puzzle, theme: Option<&Theme>) -> io::Result<()> {
    let clues = puzzle.clues();
    for (title, entries) in [("Across", &clues.across), ("Down", &clues.down)] {
        heading(out, theme, title)?;
        queue!(out, Print("\n"))?;
        for clue in entries {
            colored(out, theme.map(|t| t.heading), &format!("{:>4}. ", clue.number))?;
            queue!(out, Print(format!("{} ({})\n", clue.clue, clue.length)))?;
        }
        queue!(out, Print("\n"))?;
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, theme: Option<&Theme>, text: &str) -> io::Result<()> {
    if theme.is_some() {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    colored(out, theme.map(|t| t.heading), text)?;
    if theme.is_some() {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn colored<W: Write>(out: &mut W, color: Option<Color>, text: &str) -> io::Result<()> {
    match color {
        Some(color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor),
        None => queue!(out, Print(text)),
    }
}
