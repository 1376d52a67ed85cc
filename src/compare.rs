//! Similarity scoring between two fuzzy hash signatures.
//!
//! Scores run from 0 (nothing in common) to 100 (identical); malformed input
//! scores -1. Two signatures are only comparable when their block sizes are
//! equal or one is exactly double the other, since only then do they share a
//! digest computed at the same block size.

use crate::edit_distance::edit_distance;
use crate::fuzzy_hash::{eliminate_sequences, MIN_BLOCK_SIZE, SPAMSUM_LENGTH};
use crate::rolling_hash::{RollingHash, ROLLING_WINDOW};

/// Score for input that is not a signature.
pub const INVALID: i32 = -1;

/// Block sizes at or above this are not capped by digest length when scored.
const WEAK_BLOCK_SIZE_LIMIT: u64 =
    (99 + ROLLING_WINDOW as u64) / ROLLING_WINDOW as u64 * MIN_BLOCK_SIZE as u64;

struct ParsedSignature {
    block_size: u64,
    part1: Vec<u8>,
    part2: Vec<u8>,
}

impl ParsedSignature {
    fn parse(sig: &str) -> Option<Self> {
        let (block_size, rest) = sig.split_once(':')?;
        if block_size.is_empty() || !block_size.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let block_size: u64 = block_size.parse().ok()?;

        let (part1, rest) = rest.split_once(':')?;
        // Anything after a comma is a filename or comment.
        let part2 = rest.split_once(',').map_or(rest, |(part, _)| part);
        if part2.contains(':') || part1.len() > SPAMSUM_LENGTH || part2.len() > SPAMSUM_LENGTH {
            return None;
        }

        Some(Self {
            block_size,
            part1: eliminate_sequences(part1.as_bytes()).collect(),
            part2: eliminate_sequences(part2.as_bytes()).collect(),
        })
    }
}

/// True when `sig` parses as a signature the comparator accepts.
pub fn is_valid_signature(sig: &str) -> bool {
    ParsedSignature::parse(sig).is_some()
}

/// Compare two signature strings.
pub fn compare(a: &str, b: &str) -> i32 {
    let (Some(a), Some(b)) = (ParsedSignature::parse(a), ParsedSignature::parse(b)) else {
        return INVALID;
    };

    if a.block_size == b.block_size && a.part1 == b.part1 && a.part2 == b.part2 {
        return 100;
    }

    let score = if a.block_size == b.block_size {
        let first = score_strings(&a.part1, &b.part1, a.block_size);
        let second = a
            .block_size
            .checked_mul(2)
            .map_or(0, |doubled| score_strings(&a.part2, &b.part2, doubled));
        first.max(second)
    } else if a.block_size.checked_mul(2) == Some(b.block_size) {
        score_strings(&b.part1, &a.part2, b.block_size)
    } else if b.block_size.checked_mul(2) == Some(a.block_size) {
        score_strings(&a.part1, &b.part2, a.block_size)
    } else {
        0
    };

    score as i32
}

/// Score two digest parts produced at `block_size`, 0..=100.
pub fn score_strings(a: &[u8], b: &[u8], block_size: u64) -> u32 {
    if a.len() > SPAMSUM_LENGTH || b.len() > SPAMSUM_LENGTH {
        return 0;
    }
    if !has_common_substring(a, b) {
        return 0;
    }

    let distance = edit_distance(a, b);
    let scaled = distance * SPAMSUM_LENGTH as u32 / (a.len() + b.len()) as u32;
    let scaled = 100 * scaled / SPAMSUM_LENGTH as u32;
    let score = 100u32.saturating_sub(scaled);

    if block_size >= WEAK_BLOCK_SIZE_LIMIT {
        return score;
    }
    let cap = block_size / MIN_BLOCK_SIZE as u64 * a.len().min(b.len()) as u64;
    score.min(cap as u32)
}

/// True when `a` and `b` share a run of at least [`ROLLING_WINDOW`] symbols.
///
/// Windows are prefiltered by their rolling sum, which depends only on the
/// last seven symbols fed.
fn has_common_substring(a: &[u8], b: &[u8]) -> bool {
    if a.len() < ROLLING_WINDOW || b.len() < ROLLING_WINDOW || a.len() > SPAMSUM_LENGTH {
        return false;
    }

    let mut hashes = [0u32; SPAMSUM_LENGTH];
    let mut roll = RollingHash::new();
    for (i, &c) in a.iter().enumerate() {
        roll.update_byte(c);
        if i + 1 >= ROLLING_WINDOW {
            hashes[i + 1 - ROLLING_WINDOW] = roll.sum();
        }
    }
    let hashes = &hashes[..=a.len() - ROLLING_WINDOW];

    let mut roll = RollingHash::new();
    for (j, &c) in b.iter().enumerate() {
        roll.update_byte(c);
        if j + 1 < ROLLING_WINDOW {
            continue;
        }
        let h = roll.sum();
        let window = &b[j + 1 - ROLLING_WINDOW..=j];
        let found = hashes
            .iter()
            .enumerate()
            .any(|(i, &candidate)| candidate == h && &a[i..i + ROLLING_WINDOW] == window);
        if found {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy_hash::hash_bytes;
    use crate::fuzzy_hash::tests::lcg_bytes;
    use proptest::prelude::*;

    const SIG_A: &str = "3:hMCPQCE6AFQxWyENFACBE+rW6Tj7SMQmKozr9MVERkL:hZRdxZENFs+rPSromekL";
    const SIG_B: &str = "3:hMCERJAFQxWyENFACBE+rW6Tj7SMQmKozr9MVERkL:huRJdxZENFs+rPSromekL";

    #[test]
    fn test_small_block_size_regression() {
        assert_eq!(compare(SIG_A, SIG_B), 41);
        assert_eq!(compare(SIG_B, SIG_A), 41);
    }

    #[test]
    fn test_identical() {
        assert_eq!(compare(SIG_A, SIG_A), 100);
        assert_eq!(compare("3::", "3::"), 100);
    }

    #[test]
    fn test_long_runs_are_collapsed() {
        assert_eq!(
            compare(
                "500:AAAAAAAAAAAAAAAAAAAAAAAAyENFACBE+rW6Tj7SMQmK:4",
                "500:AAAyENFACBE+rW6Tj7SMQmK:4"
            ),
            100
        );
    }

    #[test]
    fn test_trailing_data_ignored() {
        let plain = compare(SIG_A, SIG_B);
        let a = format!("{SIG_A},ANYTHING");
        let b = format!("{SIG_B},NOTHING");
        assert_eq!(compare(&a, &b), plain);
        assert_eq!(compare(&a, SIG_B), plain);
        assert_eq!(compare(&format!("{SIG_A},\"C:\\dir\\file\""), SIG_A), 100);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(compare("", ""), INVALID);
        assert_eq!(compare("", SIG_A), INVALID);
        assert_eq!(compare(SIG_A, ""), INVALID);
        assert_eq!(compare("3:abcdefgh", SIG_A), INVALID);
        assert_eq!(compare("x:abcdefgh:abc", SIG_A), INVALID);
        assert_eq!(compare(":abcdefgh:abc", SIG_A), INVALID);
        assert_eq!(compare("-3:abcdefgh:abc", SIG_A), INVALID);
        assert_eq!(compare("3:abc:def:ghi", SIG_A), INVALID);
        assert_eq!(compare("99999999999999999999999:abc:def", SIG_A), INVALID);
        let too_long = format!("3:{}:abc", "a".repeat(SPAMSUM_LENGTH + 1));
        assert_eq!(compare(&too_long, SIG_A), INVALID);
    }

    #[test]
    fn test_incompatible_block_sizes() {
        assert_eq!(compare("3:ABCDEFGHIJ:ABCDEFGHIJ", "24:ABCDEFGHIJ:ABCDEFGHIJ"), 0);
        assert_eq!(compare("96:ABCDEFGHIJ:ABCDEFGHIJ", "12:ABCDEFGHIJ:ABCDEFGHIJ"), 0);
        assert_eq!(compare("7:ABCDEFGHIJ:ABCDEFGHIJ", "3:ABCDEFGHIJ:ABCDEFGHIJ"), 0);
    }

    #[test]
    fn test_double_block_size_uses_shared_part() {
        // a.part2 and b.part1 were both computed at block size 12.
        let a = "6:ABCDEFGHIJ:KLMNOPQRST";
        let b = "12:KLMNOPQRST:xyz";
        // Identical strings, but capped at 12 / 3 * 10 for a weak block size.
        assert_eq!(compare(a, b), 40);
        assert_eq!(compare(b, a), 40);
    }

    #[test]
    fn test_large_block_size_is_not_capped() {
        assert_eq!(compare("96:ABCDEFGHIJ:xyz", "96:ABCDEFGHIJ:uvw"), 100);
        assert_eq!(compare("48:ABCDEFGHIJ:xyz", "48:ABCDEFGHIJ:uvw"), 100);
        assert_eq!(compare("24:ABCDEFGHIJ:xyz", "24:ABCDEFGHIJ:uvw"), 80);
    }

    #[test]
    fn test_short_parts_never_match() {
        assert_eq!(compare("3:ABCDEF:XYZ", "3:ABCDEF:XYW"), 0);
        assert_eq!(score_strings(b"ABCDEF", b"ABCDEF", 1536), 0);
    }

    #[test]
    fn test_no_common_substring() {
        assert!(!has_common_substring(b"ABCDEFGHIJ", b"BCDEFGAHIJ"));
        assert!(has_common_substring(b"xxABCDEFGyy", b"ABCDEFG"));
    }

    #[test]
    fn test_one_byte_change_scores_high() {
        let mut data = lcg_bytes(65536, 42);
        let original = hash_bytes(&data).unwrap();
        data[30000] ^= 0xFF;
        let modified = hash_bytes(&data).unwrap();
        assert_eq!(compare(original.as_str(), modified.as_str()), 99);
    }

    #[test]
    fn test_unrelated_data_scores_zero() {
        let a = hash_bytes(&lcg_bytes(65536, 42)).unwrap();
        let b = hash_bytes(&lcg_bytes(65536, 43)).unwrap();
        assert_eq!(compare(a.as_str(), b.as_str()), 0);
    }

    proptest! {
        #[test]
        fn self_similarity(data in proptest::collection::vec(any::<u8>(), 0..16_384)) {
            let sig = hash_bytes(&data).unwrap();
            prop_assert_eq!(compare(sig.as_str(), sig.as_str()), 100);
        }

        #[test]
        fn symmetric_and_in_range(
            data in proptest::collection::vec(any::<u8>(), 0..16_384),
            edits in proptest::collection::vec((any::<prop::sample::Index>(), any::<u8>()), 0..16),
        ) {
            let mut mutated = data.clone();
            if !mutated.is_empty() {
                for (at, byte) in &edits {
                    let i = at.index(mutated.len());
                    mutated[i] = *byte;
                }
            }
            let a = hash_bytes(&data).unwrap();
            let b = hash_bytes(&mutated).unwrap();
            let forward = compare(a.as_str(), b.as_str());
            prop_assert_eq!(forward, compare(b.as_str(), a.as_str()));
            prop_assert!((0..=100).contains(&forward));
        }
    }
}
