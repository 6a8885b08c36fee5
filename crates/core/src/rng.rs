//! RNG module - deterministic piece selection
//!
//! A linear congruential step drives the piece sequence. The generator keeps
//! no state of its own: the running seed lives in the game state and is
//! advanced by one [`hash`] per tick, so a fixed seed always replays the same
//! sequence of pieces.

/// LCG multiplier
pub const LCG_A: u64 = 1_103_515_245;
/// LCG increment
pub const LCG_C: u64 = 12_345;
/// LCG modulus (2^31)
pub const LCG_M: u64 = 1 << 31;

/// Next value of the sequence: `(a * seed + c) mod m`.
///
/// The result is always below 2^31.
#[inline]
pub fn hash(seed: u32) -> u32 {
    ((LCG_A * seed as u64 + LCG_C) % LCG_M) as u32
}

/// Map a hash linearly into `[1.5, 6.5]`.
///
/// Flooring the result picks one of six kinds numbered 1..=6.
#[inline]
pub fn scale(hash: u32) -> f64 {
    hash as f64 / (LCG_M - 1) as f64 * 5.0 + 1.5
}

/// Zero-based catalog index for a hash, given `len` kinds.
///
/// Generalises [`scale`] to any catalog size: the span is `len - 1` instead
/// of 5, so with six kinds this is exactly `floor(scale(hash)) - 1`.
pub fn select_index(hash: u32, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let span = (len - 1) as f64;
    let kind = (hash as f64 / (LCG_M - 1) as f64 * span + 1.5).floor() as usize;
    kind.clamp(1, len) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash(0), 12345);
        assert_eq!(hash(1), 1_103_527_590);
        assert_eq!(hash(42), 1_250_496_027);
    }

    #[test]
    fn test_hash_stays_below_modulus() {
        for seed in [0, 1, u32::MAX, (1 << 31) - 1, 1 << 31] {
            assert!((hash(seed) as u64) < LCG_M);
        }
    }

    #[test]
    fn test_hash_deterministic() {
        let mut a = 12345;
        let mut b = 12345;
        for _ in 0..100 {
            a = hash(a);
            b = hash(b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_scale_range() {
        assert_eq!(scale(0), 1.5);
        assert_eq!(scale((LCG_M - 1) as u32), 6.5);
        assert_eq!(scale(hash(0)).floor(), 1.0);
        assert_eq!(scale(hash(1)).floor(), 4.0);
    }

    #[test]
    fn test_select_index_matches_scale_for_six_kinds() {
        let mut seed = 42;
        for _ in 0..500 {
            seed = hash(seed);
            let via_scale = scale(seed).floor() as usize - 1;
            assert_eq!(select_index(seed, 6), via_scale);
        }
    }

    #[test]
    fn test_select_index_bounds() {
        assert_eq!(select_index(0, 7), 0);
        assert_eq!(select_index((LCG_M - 1) as u32, 7), 6);
        assert_eq!(select_index(123, 1), 0);
    }

    #[test]
    fn test_known_kind_sequence() {
        let mut seed = 42;
        let mut kinds = Vec::new();
        for _ in 0..12 {
            seed = hash(seed);
            kinds.push(scale(seed).floor() as u32);
        }
        assert_eq!(kinds, vec![4, 4, 3, 5, 3, 1, 3, 5, 4, 5, 2, 4]);
    }
}
