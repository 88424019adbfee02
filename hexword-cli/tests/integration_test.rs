//! Integration tests for HEXWORD
//!
//! Tests the full stack: board, scanning, scoring, AI replies and records

use hexword_core::{
    check_winner, Dictionary, GameConfig, GameError, GameRecord, GameState, Hex, LetterSource,
    Owner, Phase, ScoreState, SharedOracle, Winner,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Hands out a fixed sequence of letters, repeating
struct Cycle {
    letters: Vec<char>,
    next: usize,
}

impl Cycle {
    fn new(letters: &str) -> Self {
        Self {
            letters: letters.chars().collect(),
            next: 0,
        }
    }
}

impl LetterSource for Cycle {
    fn next_letter(&mut self) -> char {
        let letter = self.letters[self.next % self.letters.len()];
        self.next += 1;
        letter
    }
}

fn oracle(words: &[&str]) -> SharedOracle {
    Arc::new(Dictionary::from_words(words))
}

const WORDS: &[&str] = &[
    "cat", "act", "tab", "bat", "ten", "net", "eat", "tea", "ate", "sea", "tin", "nit",
    "ant", "tan", "rat", "art", "tar", "car", "arc", "ear", "era", "are", "one", "eon",
    "cart", "care", "race", "acre", "neat", "rate", "tear",
];

// ============================================================================
// SCORING SCENARIOS
// ============================================================================

#[test]
fn test_cat_scores_five_for_player() {
    let mut game = GameState::with_letter_source(
        GameConfig::default(),
        oracle(&["cat"]),
        Box::new(Cycle::new("CAT")),
    )
    .unwrap();

    game.request_placement(Hex::new(0, 0), 'C').unwrap();
    game.request_placement(Hex::new(1, 0), 'A').unwrap();
    let before = game.scores().player;

    let report = game.request_placement(Hex::new(2, 0), 'T').unwrap();

    assert_eq!(report.player.points, 5);
    assert_eq!(report.player.words, vec!["cat"]);
    assert_eq!(game.scores().player, before + 5);
    assert!(game.ledger().is_validated("cat"));
    for hex in [Hex::new(0, 0), Hex::new(1, 0), Hex::new(2, 0)] {
        assert_eq!(game.board().tile_at(hex).map(|t| t.owner), Some(Owner::Player));
    }
}

#[test]
fn test_word_is_never_scored_twice() {
    let mut game = GameState::with_letter_source(
        GameConfig::default(),
        oracle(&["cat"]),
        Box::new(Cycle::new("CAT")),
    )
    .unwrap();

    for (q, letter) in [(0, 'C'), (1, 'A'), (2, 'T')] {
        game.request_placement(Hex::new(q, 0), letter).unwrap();
    }
    assert_eq!(game.scores().player, 5);

    // Spell it again on another row
    for (q, letter) in [(-2, 'C'), (-1, 'A'), (0, 'T')] {
        let report = game.request_placement(Hex::new(q, 3), letter).unwrap();
        assert_eq!(report.player.points, 0);
    }
    assert_eq!(game.scores().player, 5);
}

#[test]
fn test_threshold_rules() {
    let s = |player, ai| ScoreState { player, ai };
    assert_eq!(check_winner(s(149, 149), 150), None);
    assert_eq!(check_winner(s(150, 0), 150), Some(Winner::Player));
    assert_eq!(check_winner(s(3, 200), 150), Some(Winner::Ai));
    assert_eq!(check_winner(s(150, 150), 150), Some(Winner::Tie));
}

// ============================================================================
// FULL GAMES
// ============================================================================

/// Play random legal moves until the game ends, checking invariants each turn
fn random_playout(seed: u64) -> GameState {
    let config = GameConfig {
        radius: 2,
        win_threshold: 40,
        ..GameConfig::default().with_seed(seed)
    };
    let mut game = GameState::new(config, oracle(WORDS)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    while game.winner().is_none() {
        let before = game.scores();
        let tiles_before: Vec<_> = game.board().tiles().collect();

        let empty = game.board().empty_coordinates();
        let hex = *empty.choose(&mut rng).unwrap();
        let letter = *game.rack().letters().choose(&mut rng).unwrap();
        game.request_placement(hex, letter).unwrap();

        let after = game.scores();
        assert!(after.player >= before.player);
        assert!(after.ai >= before.ai);
        for (hex, tile) in tiles_before {
            assert_eq!(game.board().tile_at(hex), Some(tile));
        }
        assert_eq!(game.rack().letters().len(), 8);
    }

    game
}

#[test]
fn test_random_playout_reaches_an_end() {
    for seed in 0..5 {
        let mut game = random_playout(seed);
        let winner = game.winner().unwrap();
        let scores = game.scores();

        match check_winner(scores, 40) {
            Some(expected) => assert_eq!(winner, expected),
            None => assert!(game.board().is_full()),
        }
        assert_eq!(game.phase(), Phase::Finished(winner));
        assert!(matches!(
            game.request_placement(Hex::new(0, 0), 'A'),
            Err(GameError::GameOver)
        ));
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let a = GameRecord::from_game(&random_playout(17));
    let b = GameRecord::from_game(&random_playout(17));
    assert_eq!(a, b);
}

#[test]
fn test_record_round_trip_on_disk() {
    let game = random_playout(3);
    let record = GameRecord::from_game(&game);

    let path = std::env::temp_dir().join(format!("hexword-record-{}.json", std::process::id()));
    record.save(&path).unwrap();
    let loaded = GameRecord::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, record);
    assert_eq!(loaded.moves.len(), game.history().len());
    assert_eq!(loaded.winner, game.winner());
}
