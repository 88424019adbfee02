//! The human player's letter rack and its random refill source

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Default number of letters held by the player
pub const RACK_CAPACITY: usize = 8;

/// Supplies letters for rack refills
pub trait LetterSource {
    /// Next uppercase letter
    fn next_letter(&mut self) -> char;
}

/// Uniformly random letters A-Z (no frequency weighting)
#[derive(Clone, Debug)]
pub struct RandomLetters {
    rng: ChaCha8Rng,
}

impl RandomLetters {
    /// Seeded when `seed` is given, otherwise seeded from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl LetterSource for RandomLetters {
    fn next_letter(&mut self) -> char {
        (b'A' + self.rng.gen_range(0..26u8)) as char
    }
}

/// Ordered letters available to the human player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    letters: Vec<char>,
    capacity: usize,
}

impl Rack {
    /// A full rack drawn from `source`
    pub fn new(capacity: usize, source: &mut dyn LetterSource) -> Self {
        let mut rack = Self {
            letters: Vec::with_capacity(capacity),
            capacity,
        };
        rack.refill(source);
        rack
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Remove the first copy of `letter`; `false` if the rack has none
    pub fn consume(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        match self.letters.iter().position(|&l| l == letter) {
            Some(i) => {
                self.letters.remove(i);
                true
            }
            None => false,
        }
    }

    /// Top the rack back up to capacity
    pub fn refill(&mut self, source: &mut dyn LetterSource) {
        while self.letters.len() < self.capacity {
            self.letters.push(source.next_letter());
        }
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: Vec<String> = self.letters.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", letters.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed sequence of letters
    struct Scripted {
        letters: Vec<char>,
        next: usize,
    }

    impl LetterSource for Scripted {
        fn next_letter(&mut self) -> char {
            let letter = self.letters[self.next % self.letters.len()];
            self.next += 1;
            letter
        }
    }

    #[test]
    fn test_random_letters_are_uppercase() {
        let mut source = RandomLetters::new(Some(7));
        for _ in 0..500 {
            assert!(source.next_letter().is_ascii_uppercase());
        }
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let mut a = RandomLetters::new(Some(42));
        let mut b = RandomLetters::new(Some(42));
        let xs: Vec<char> = (0..32).map(|_| a.next_letter()).collect();
        let ys: Vec<char> = (0..32).map(|_| b.next_letter()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_consume_and_refill() {
        let mut source = Scripted {
            letters: vec!['A', 'B', 'A', 'C'],
            next: 0,
        };
        let mut rack = Rack::new(4, &mut source);
        assert_eq!(rack.letters(), &['A', 'B', 'A', 'C']);

        assert!(rack.consume('a'));
        assert_eq!(rack.letters(), &['B', 'A', 'C']);
        assert!(!rack.consume('Z'));
        assert_eq!(rack.letters().len(), 3);

        rack.refill(&mut source);
        assert_eq!(rack.letters(), &['B', 'A', 'C', 'A']);
        assert_eq!(rack.to_string(), "B A C A");
    }
}
