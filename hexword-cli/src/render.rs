//! Text rendering of the board and game status

use hexword_core::{GameState, Hex, HexBoard, HighlightPath, Owner, TurnReport};

/// Draw the board one axial row per line.
///
/// Player tiles are upper case, AI tiles lower case, empty cells `.`.
/// Cells on a just-scored word are followed by `*`.
pub fn render_board(board: &HexBoard, highlights: &[HighlightPath]) -> String {
    let radius = board.radius();
    let mut out = String::new();

    for r in -radius..=radius {
        let q_min = (-radius).max(-radius - r);
        let q_max = radius.min(radius - r);

        out.push_str(&format!("{:>3} ", r));
        out.push_str(&" ".repeat(r.unsigned_abs() as usize));

        for q in q_min..=q_max {
            let hex = Hex::new(q, r);
            let glyph = match board.tile_at(hex) {
                Some(tile) if tile.owner == Owner::Ai => tile.letter.to_ascii_lowercase(),
                Some(tile) => tile.letter,
                None => '.',
            };
            let marked = highlights.iter().any(|h| h.path.contains(&hex));
            out.push(glyph);
            out.push(if marked { '*' } else { ' ' });
        }

        out.push('\n');
    }

    out
}

/// Scores, rack and the latest scored words
pub fn render_status(game: &GameState) -> String {
    let scores = game.scores();
    let mut out = format!(
        "Player: {}   AI: {}   (first to {})\nRack: {}\n",
        scores.player,
        scores.ai,
        game.config().win_threshold,
        game.rack()
    );

    for h in game.last_highlights() {
        out.push_str(&format!("  {:?} scored '{}' for {}\n", h.owner, h.word, h.points));
    }

    out
}

/// One line per half-turn
pub fn render_report(report: &TurnReport) -> String {
    let mut out = String::new();

    for placed in std::iter::once(&report.player).chain(report.ai.as_ref()) {
        let who = match placed.owner {
            Owner::Player => "You",
            Owner::Ai => "AI",
        };
        out.push_str(&format!("{} placed {} at {}", who, placed.letter, placed.hex));
        if placed.words.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!(
                " and scored {} ({})\n",
                placed.points,
                placed.words.join(", ")
            ));
        }
    }

    out
}
