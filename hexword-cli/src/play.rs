//! Play command - a terminal game against the AI
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_session(), save_record()
//! - Level 3: parse_command()
//! - Level 4: help text

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use hexword_core::{GameConfig, GameRecord, GameState, Hex, SharedOracle};

use crate::render::{render_board, render_report, render_status};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Save the game record as JSON when the session ends
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,
}

/// A line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Place { hex: Hex, letter: char },
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  q r LETTER   place LETTER from your rack at axial coordinate (q, r)
  help         show this text
  quit         leave the game";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Start a game
/// 2. Read placements until the game ends or the player quits
/// 3. Save the record if requested
pub fn run(args: PlayArgs, config: GameConfig, oracle: SharedOracle) -> Result<()> {
    let mut game = GameState::new(config, oracle)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_session(&mut game, stdin.lock(), &mut stdout)?;

    if let Some(path) = args.record {
        save_record(&game, &path)?;
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Drive one game from `input`, writing the display to `out`
fn play_session<R: BufRead, W: Write>(game: &mut GameState, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to Hexagonal Scrabble. Type 'help' for commands.")?;
    write!(out, "{}{}> ", render_board(game.board(), &[]), render_status(game))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Place { hex, letter }) => match game.request_placement(hex, letter) {
                Ok(report) => {
                    write!(out, "{}", render_report(&report))?;
                    write!(
                        out,
                        "{}{}",
                        render_board(game.board(), game.last_highlights()),
                        render_status(game)
                    )?;
                    if let Some(winner) = report.winner {
                        writeln!(out, "{}", winner)?;
                        return Ok(());
                    }
                }
                Err(e) => writeln!(out, "Rejected: {}", e)?,
            },
            Err(e) => writeln!(out, "{}", e)?,
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}

/// Write the game record to disk
fn save_record(game: &GameState, path: &Path) -> Result<()> {
    GameRecord::from_game(game)
        .save(path)
        .with_context(|| format!("Failed to save record to {}", path.display()))?;
    tracing::info!("Saved game record to {}", path.display());
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Parse `q r LETTER`, `help` or `quit`
fn parse_command(line: &str) -> Result<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["help"] | ["?"] => Ok(Command::Help),
        [q, r, letter] => {
            let q: i8 = q.parse().with_context(|| format!("Bad q coordinate: {}", q))?;
            let r: i8 = r.parse().with_context(|| format!("Bad r coordinate: {}", r))?;
            let mut chars = letter.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => Ok(Command::Place {
                    hex: Hex::new(q, r),
                    letter,
                }),
                _ => anyhow::bail!("Expected a single letter, got '{}'", letter),
            }
        }
        _ => anyhow::bail!("Unrecognized input '{}'. Type 'help' for commands.", line.trim()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hexword_core::Dictionary;
    use std::sync::Arc;

    fn seeded_game() -> GameState {
        let config = GameConfig::default().with_seed(1);
        GameState::new(config, Arc::new(Dictionary::from_words(["cat"]))).unwrap()
    }

    #[test]
    fn test_parse_place() {
        assert_eq!(
            parse_command("  -2 3 x ").unwrap(),
            Command::Place {
                hex: Hex::new(-2, 3),
                letter: 'x'
            }
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("a b c").is_err());
        assert!(parse_command("0 0 AB").is_err());
        assert!(parse_command("0 0").is_err());
    }

    #[test]
    fn test_session_plays_a_turn() {
        let mut game = seeded_game();
        let letter = game.rack().letters()[0];
        let input = format!("0 0 {}\nquit\n", letter);

        let mut out = Vec::new();
        play_session(&mut game, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("You placed {} at (0, 0)", letter)));
        assert!(text.contains("AI placed"));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_session_reports_rejection() {
        let mut game = seeded_game();
        let letter = game.rack().letters()[0];
        let input = format!("9 9 {}\nquit\n", letter);

        let mut out = Vec::new();
        play_session(&mut game, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rejected: coordinate (9, 9) is not on the board"));
        assert!(game.history().is_empty());
    }
}
