//! Celebratory openers for callers who are off the hook.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CELEBRATIONS: &[&str] = &[
    "Rad!",
    "Awesome!",
    "Neat-o!",
    "Yee-haw!",
    "Hot Diggity!",
    "Huzzah!",
    "Cowabunga!",
    "Wonderful!",
];

/// Picks which of `count` phrases to use.
pub trait PhraseSource: Send + Sync {
    /// Index in `0..count`. `count` is never zero.
    fn pick(&self, count: usize) -> usize;
}

/// Choose a celebration using `source`.
pub fn celebration(source: &dyn PhraseSource) -> &'static str {
    let index = source.pick(CELEBRATIONS.len()) % CELEBRATIONS.len();
    CELEBRATIONS[index]
}

/// Uniform choice from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPhrases;

impl PhraseSource for RandomPhrases {
    fn pick(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Reproducible sequence from a fixed seed.
#[derive(Debug)]
pub struct SeededPhrases {
    rng: Mutex<StdRng>,
}

impl SeededPhrases {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PhraseSource for SeededPhrases {
    fn pick(&self, count: usize) -> usize {
        self.rng.lock().gen_range(0..count)
    }
}

/// Always the same index.
#[derive(Debug, Clone, Copy)]
pub struct FixedPhrase(pub usize);

impl PhraseSource for FixedPhrase {
    fn pick(&self, count: usize) -> usize {
        self.0 % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_phrase_is_a_celebration() {
        for _ in 0..100 {
            assert!(CELEBRATIONS.contains(&celebration(&RandomPhrases)));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededPhrases::new(42);
        let b = SeededPhrases::new(42);
        let first: Vec<_> = (0..10).map(|_| celebration(&a)).collect();
        let second: Vec<_> = (0..10).map(|_| celebration(&b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_phrase() {
        assert_eq!(celebration(&FixedPhrase(0)), "Rad!");
        assert_eq!(celebration(&FixedPhrase(7)), "Wonderful!");
        assert_eq!(celebration(&FixedPhrase(9)), "Awesome!");
    }
}
