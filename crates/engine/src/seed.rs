//! Entropy for new games.
//!
//! The reducer itself is pure; the only outside input it needs is a seed
//! when a game (re)starts. That comes from a [`SeedSource`] so tests can
//! pin it.

use std::time::{SystemTime, UNIX_EPOCH};

pub trait SeedSource {
    fn next_seed(&mut self) -> u32;
}

/// Seeds from the wall clock (milliseconds since the epoch, folded into u32)
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn next_seed(&mut self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            // Only the low bits matter for seeding.
            .map(|d| (d.as_millis() % u128::from(u32::MAX)) as u32)
            .unwrap_or(0)
    }
}

/// Always the same seed
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u32 {
        self.0
    }
}

/// Cycles through a list of seeds
#[derive(Debug, Clone)]
pub struct SeedList {
    seeds: Vec<u32>,
    index: usize,
}

impl SeedList {
    pub fn new(seeds: Vec<u32>) -> Self {
        Self { seeds, index: 0 }
    }
}

impl SeedSource for SeedList {
    fn next_seed(&mut self) -> u32 {
        if self.seeds.is_empty() {
            return 0;
        }
        let seed = self.seeds[self.index % self.seeds.len()];
        self.index += 1;
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list_cycles() {
        let mut seeds = SeedList::new(vec![3, 5]);
        assert_eq!(seeds.next_seed(), 3);
        assert_eq!(seeds.next_seed(), 5);
        assert_eq!(seeds.next_seed(), 3);
    }

    #[test]
    fn test_empty_seed_list() {
        assert_eq!(SeedList::new(vec![]).next_seed(), 0);
    }

    #[test]
    fn test_fixed_seed() {
        let mut seeds = FixedSeed(9);
        assert_eq!(seeds.next_seed(), 9);
        assert_eq!(seeds.next_seed(), 9);
    }

    #[test]
    fn test_clock_seed_tracks_wall_clock() {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let seed = ClockSeed.next_seed();
        assert!(seed < u32::MAX);
        // The epoch-millisecond count is well past u32::MAX, so folding is exercised.
        assert!(millis > u128::from(u32::MAX));
        let folded = (millis % u128::from(u32::MAX)) as u32;
        assert!(seed.wrapping_sub(folded) < 60_000);
    }
}
