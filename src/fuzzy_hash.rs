//! Context-triggered piecewise hashing (ssdeep-compatible signatures).
//!
//! A [`FuzzyHasher`] follows up to 31 block sizes (`3 * 2^i`) at once. Each
//! block size owns a small context that folds bytes into a six-bit running
//! hash and emits one base64 symbol whenever the rolling checksum marks a
//! boundary for that block size. New block sizes are forked from the largest
//! one on its first boundary; the smallest is retired once the input is
//! clearly too big for it to be chosen. At finalize time the block size whose
//! digest best fits 64 symbols is picked, and the signature is written as
//! `"<blocksize>:<digest>:<digest of blocksize * 2>"`.

use std::fmt;

use crate::error::{FuzzyError, Result};
use crate::rolling_hash::RollingHash;
use crate::sum_table::{sum_hash, HASH_INIT};

pub const MIN_BLOCK_SIZE: u32 = 3;
pub const SPAMSUM_LENGTH: usize = 64;
pub const NUM_BLOCKHASHES: usize = 31;

/// Longest signature string this hasher can produce.
pub const MAX_RESULT_LEN: usize = 2 * SPAMSUM_LENGTH + 20 - 1;

/// Largest input the biggest block size can summarize in 64 symbols.
pub const TOTAL_SIZE_MAX: u64 = block_size(NUM_BLOCKHASHES - 1) as u64 * SPAMSUM_LENGTH as u64;

pub const B64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Longest run of one symbol kept when sequences are eliminated.
pub const MAX_RUN: usize = 3;

const HALF_LENGTH: usize = SPAMSUM_LENGTH / 2;

/// Block size tracked at arena index `index`.
pub const fn block_size(index: usize) -> u32 {
    MIN_BLOCK_SIZE << index
}

/// Output tweaks applied when a hasher is finalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestOptions {
    /// Keep at most three identical consecutive symbols in each part.
    pub eliminate_sequences: bool,
    /// Emit the full second part instead of cutting it at 32 symbols.
    pub no_truncate: bool,
}

/// Digest state for one block size.
#[derive(Debug, Clone, Copy)]
struct BlockHashContext {
    /// Emitted symbols; `digest[digest_len]` holds a pending symbol once full.
    digest: [u8; SPAMSUM_LENGTH],
    digest_len: usize,
    h: u8,
    half_h: u8,
    half_digest: u8,
}

impl BlockHashContext {
    const fn new() -> Self {
        Self {
            digest: [0; SPAMSUM_LENGTH],
            digest_len: 0,
            h: HASH_INIT,
            half_h: HASH_INIT,
            half_digest: 0,
        }
    }

    /// Start a larger block size mid-stream from a smaller one's running state.
    fn forked_from(parent: &Self) -> Self {
        Self {
            h: parent.h,
            half_h: parent.half_h,
            ..Self::new()
        }
    }

    #[inline]
    fn update(&mut self, c: u8) {
        self.h = sum_hash(c, self.h);
        self.half_h = sum_hash(c, self.half_h);
    }

    /// Record a boundary. Returns `false` when the digest is already full, in
    /// which case the running hash keeps absorbing the tail of the input.
    fn trigger(&mut self) -> bool {
        self.digest[self.digest_len] = B64[self.h as usize];
        self.half_digest = B64[self.half_h as usize];
        if self.digest_len >= SPAMSUM_LENGTH - 1 {
            return false;
        }

        self.digest_len += 1;
        self.digest[self.digest_len] = 0;
        self.h = HASH_INIT;
        if self.digest_len < HALF_LENGTH {
            self.half_h = HASH_INIT;
            self.half_digest = 0;
        }
        true
    }

    fn emitted(&self) -> &[u8] {
        &self.digest[..self.digest_len]
    }

    fn pending(&self) -> Option<u8> {
        nonzero(self.digest[self.digest_len])
    }
}

fn nonzero(c: u8) -> Option<u8> {
    (c != 0).then_some(c)
}

/// Keep the first [`MAX_RUN`] symbols of every run and drop the rest.
pub(crate) fn eliminate_sequences(symbols: &[u8]) -> impl Iterator<Item = u8> + '_ {
    symbols
        .iter()
        .enumerate()
        .filter(move |&(i, &c)| i < MAX_RUN || symbols[i - MAX_RUN..i].iter().any(|&p| p != c))
        .map(|(_, &c)| c)
}

/// Incremental signature builder. Feed it the whole input in order, then
/// call [`FuzzyHasher::finalize`], which consumes it.
#[derive(Debug, Clone)]
pub struct FuzzyHasher {
    contexts: [BlockHashContext; NUM_BLOCKHASHES],
    /// Active contexts are `contexts[start..end]`.
    start: usize,
    end: usize,
    end_limit: usize,
    total_size: u64,
    declared_size: Option<u64>,
    reduce_border: u64,
    roll_mask: u32,
    /// Running hash for the block size past the last arena slot.
    last_hash: Option<u8>,
    roll: RollingHash,
}

impl FuzzyHasher {
    pub fn new() -> Self {
        Self {
            contexts: [BlockHashContext::new(); NUM_BLOCKHASHES],
            start: 0,
            end: 1,
            end_limit: NUM_BLOCKHASHES - 1,
            total_size: 0,
            declared_size: None,
            reduce_border: MIN_BLOCK_SIZE as u64 * SPAMSUM_LENGTH as u64,
            roll_mask: 0,
            last_hash: None,
            roll: RollingHash::new(),
        }
    }

    /// Declare the total input length ahead of time.
    ///
    /// Lets the hasher stop forking block sizes it can never select and
    /// retire small ones early. Finalizing fails if the bytes actually fed
    /// differ from the declared length.
    pub fn set_total_input_length(&mut self, len: u64) -> Result<()> {
        if len > TOTAL_SIZE_MAX {
            return Err(FuzzyError::TooLarge {
                size: len,
                max: TOTAL_SIZE_MAX,
            });
        }
        if let Some(declared) = self.declared_size {
            if declared != len {
                return Err(FuzzyError::LengthMismatch {
                    declared,
                    actual: len,
                });
            }
        }

        self.declared_size = Some(len);
        self.end_limit = (initial_index(len) + 1).min(NUM_BLOCKHASHES - 1);
        Ok(())
    }

    /// Bytes fed so far (saturating).
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn update(&mut self, data: &[u8]) {
        self.total_size = self.total_size.saturating_add(data.len() as u64);
        for &c in data {
            self.step(c);
        }
    }

    pub fn update_byte(&mut self, c: u8) {
        self.update(std::slice::from_ref(&c));
    }

    fn step(&mut self, c: u8) {
        self.roll.update_byte(c);
        let sum = self.roll.sum().wrapping_add(1);

        for ctx in &mut self.contexts[self.start..self.end] {
            ctx.update(c);
        }
        if let Some(last) = self.last_hash.as_mut() {
            *last = sum_hash(c, *last);
        }

        // A wrapped sum of zero came from 0xFFFFFFFF, which is not -1 mod 3.
        if sum == 0 {
            return;
        }
        let mut mask = sum / MIN_BLOCK_SIZE;
        if (mask & self.roll_mask) != 0 {
            return;
        }
        if sum % MIN_BLOCK_SIZE != 0 {
            return;
        }

        // Bit k of `mask` clear means block size 3 * 2^(start + k + 1) triggers too.
        mask >>= self.start;
        let mut i = self.start;
        while i < self.end {
            if self.contexts[i].digest_len == 0 {
                self.try_fork();
            }
            if !self.contexts[i].trigger() {
                self.try_reduce();
            }
            if (mask & 1) != 0 {
                break;
            }
            mask >>= 1;
            i += 1;
        }
    }

    fn try_fork(&mut self) {
        let parent = self.contexts[self.end - 1];
        if self.end <= self.end_limit {
            self.contexts[self.end] = BlockHashContext::forked_from(&parent);
            self.end += 1;
        } else if self.end == NUM_BLOCKHASHES && self.last_hash.is_none() {
            self.last_hash = Some(parent.h);
        }
    }

    fn try_reduce(&mut self) {
        if self.end - self.start < 2 {
            return;
        }
        // The initial estimate at finalize would still pick this block size.
        if self.reduce_border >= self.declared_size.unwrap_or(self.total_size) {
            return;
        }
        // The next block size might still be walked back to this one.
        if self.contexts[self.start + 1].digest_len < HALF_LENGTH {
            return;
        }

        self.start += 1;
        self.reduce_border *= 2;
        self.roll_mask = self.roll_mask * 2 + 1;
    }

    pub fn finalize(self) -> Result<FuzzyDigest> {
        self.finalize_with(DigestOptions::default())
    }

    pub fn finalize_with(self, options: DigestOptions) -> Result<FuzzyDigest> {
        let total = self.total_size;
        let mut bi = self.start;

        if bi > 0 && block_size(bi) as u64 / 2 * SPAMSUM_LENGTH as u64 >= total {
            return Err(FuzzyError::PrematureReduction {
                block_size: block_size(bi),
                total_size: total,
            });
        }
        if total > TOTAL_SIZE_MAX {
            return Err(FuzzyError::TooLarge {
                size: total,
                max: TOTAL_SIZE_MAX,
            });
        }
        if let Some(declared) = self.declared_size {
            if declared != total {
                return Err(FuzzyError::LengthMismatch {
                    declared,
                    actual: total,
                });
            }
        }

        bi = initial_index(total).clamp(self.start, self.end - 1);
        while bi > self.start && self.contexts[bi].digest_len < HALF_LENGTH {
            bi -= 1;
        }
        if bi > 0 && self.contexts[bi].digest_len < HALF_LENGTH {
            return Err(FuzzyError::DigestUnderflow {
                block_size: block_size(bi),
                digest_len: self.contexts[bi].digest_len,
            });
        }

        let unflushed = self.roll.sum() != 0;
        let mut out = String::with_capacity(MAX_RESULT_LEN);
        out.push_str(&block_size(bi).to_string());
        out.push(':');

        let first = &self.contexts[bi];
        let trailing = if unflushed {
            Some(B64[first.h as usize])
        } else {
            first.pending()
        };
        push_part(&mut out, first.emitted(), trailing, options.eliminate_sequences);
        out.push(':');

        if bi + 1 < self.end {
            let second = &self.contexts[bi + 1];
            let (symbols, trailing) = if options.no_truncate {
                let trailing = if unflushed {
                    Some(B64[second.h as usize])
                } else {
                    second.pending()
                };
                (second.emitted(), trailing)
            } else {
                let len = second.digest_len.min(HALF_LENGTH - 1);
                let trailing = if unflushed {
                    Some(B64[second.half_h as usize])
                } else {
                    nonzero(second.half_digest)
                };
                (&second.digest[..len], trailing)
            };
            push_part(&mut out, symbols, trailing, options.eliminate_sequences);
        } else if unflushed {
            // Only reachable with a single context, or with every arena slot in use.
            let h = match self.last_hash {
                Some(last) if bi == NUM_BLOCKHASHES - 1 => last,
                _ => first.h,
            };
            out.push(char::from(B64[h as usize]));
        }

        debug_assert!(out.len() <= MAX_RESULT_LEN);
        Ok(FuzzyDigest(out))
    }
}

impl Default for FuzzyHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest index whose block size covers `total` bytes in 64 symbols.
fn initial_index(total: u64) -> usize {
    let mut bi = 0;
    while bi < NUM_BLOCKHASHES - 1 && (block_size(bi) as u64) * (SPAMSUM_LENGTH as u64) < total {
        bi += 1;
    }
    bi
}

fn push_part(out: &mut String, symbols: &[u8], trailing: Option<u8>, eliminate: bool) {
    let start = out.len();
    if eliminate {
        out.extend(eliminate_sequences(symbols).map(char::from));
    } else {
        out.extend(symbols.iter().map(|&c| char::from(c)));
    }

    if let Some(c) = trailing {
        let part = &out.as_bytes()[start..];
        let fourth_in_a_row =
            eliminate && part.len() >= MAX_RUN && part[part.len() - MAX_RUN..].iter().all(|&p| p == c);
        if !fourth_in_a_row {
            out.push(char::from(c));
        }
    }
}

/// Hash an in-memory buffer with default options.
pub fn hash_bytes(data: &[u8]) -> Result<FuzzyDigest> {
    let mut hasher = FuzzyHasher::new();
    hasher.set_total_input_length(data.len() as u64)?;
    hasher.update(data);
    hasher.finalize()
}

/// A finished signature, `"<blocksize>:<part1>:<part2>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuzzyDigest(String);

impl FuzzyDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn block_size(&self) -> Option<u64> {
        self.0.split(':').next()?.parse().ok()
    }
}

impl fmt::Display for FuzzyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FuzzyDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<FuzzyDigest> for String {
    fn from(digest: FuzzyDigest) -> Self {
        digest.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Deterministic pseudo-random bytes (64-bit LCG, top byte of each state).
    pub(crate) fn lcg_bytes(len: usize, seed: u64) -> Vec<u8> {
        let mut x = seed;
        (0..len)
            .map(|_| {
                x = x
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (x >> 56) as u8
            })
            .collect()
    }

    fn hash_with(data: &[u8], options: DigestOptions) -> String {
        let mut hasher = FuzzyHasher::new();
        hasher.update(data);
        hasher.finalize_with(options).unwrap().into_string()
    }

    fn hash_str(data: &[u8]) -> String {
        hash_with(data, DigestOptions::default())
    }

    fn fox() -> Vec<u8> {
        b"The quick brown fox jumps over the lazy dog. ".repeat(200)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(hash_str(b""), "3::");
        assert_eq!(hash_bytes(b"").unwrap().as_str(), "3::");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(hash_str(b"a"), "3:E:E");
    }

    #[test]
    fn test_all_zero_input_never_triggers() {
        assert_eq!(hash_str(&[0u8; 20_000]), "3::");
    }

    #[test]
    fn test_known_vectors() {
        let cases: [(usize, u64, &str); 4] = [
            (
                125,
                1,
                "3:piH06MsHt8pK9cGP8IXy7sQfwN7+U9bXdb77OlTn:Ijp8k+Ey7sP7r9bXaTn",
            ),
            (
                4096,
                7,
                "96:N8Zl9s0IHl1Ahgj14M9N+a2uSxt6ZRa4F8eVdhI7AeBizxW0z:001JKvKZRJ20Y7Ae6Eg",
            ),
            (
                65536,
                42,
                "1536:LunDryk8QBAQ3uQSE5QsAx/25a7E/RsUrK9hhXOS5:CfyXQmQXifI5lsUAhXOu",
            ),
            (
                300_000,
                3,
                "6144:LJLrTxDajWIIKoXTf8Gwb9f4sJa9ScGws0vL8m7BhBZeoccb0SQRU:hTVIqKef8GM49hps0zz7bBZDccQScU",
            ),
        ];
        for (len, seed, expected) in cases {
            let data = lcg_bytes(len, seed);
            assert_eq!(hash_str(&data), expected, "len={len} seed={seed}");
            assert_eq!(hash_bytes(&data).unwrap().as_str(), expected, "declared len={len}");
        }
    }

    #[test]
    fn test_repetitive_text() {
        let expected = format!("12:Fg{}p:FV", "6".repeat(61));
        assert_eq!(hash_str(&fox()), expected);
    }

    #[test]
    fn test_eliminate_sequences_option() {
        let options = DigestOptions {
            eliminate_sequences: true,
            ..Default::default()
        };
        assert_eq!(hash_with(&fox(), options), "12:Fg666p:FV");
    }

    #[test]
    fn test_no_truncate_option() {
        let data = lcg_bytes(3000, 9);
        let part1 = "eKnocP58y2oVr8KeL5w+k2Zo6Yg/+pruW/uD182ULV/GKH6wHw6lf5Iz6NVT02Zd";
        assert_eq!(
            hash_str(&data),
            format!("48:{part1}:egoW8y2oVrUW+kGNAruW/Y8mKH6X2fbX")
        );
        let options = DigestOptions {
            no_truncate: true,
            ..Default::default()
        };
        assert_eq!(
            hash_with(&data, options),
            format!("48:{part1}:egoW8y2oVrUW+kGNAruW/Y8mKH6X2fbT0CNwakiV")
        );
    }

    #[test]
    fn test_declared_length_mismatch() {
        let mut hasher = FuzzyHasher::new();
        hasher.set_total_input_length(10).unwrap();
        hasher.update(b"12345");
        assert_eq!(
            hasher.finalize().unwrap_err(),
            FuzzyError::LengthMismatch {
                declared: 10,
                actual: 5
            }
        );
    }

    #[test]
    fn test_redeclaring_length() {
        let mut hasher = FuzzyHasher::new();
        hasher.set_total_input_length(100).unwrap();
        assert!(hasher.set_total_input_length(100).is_ok());
        assert!(matches!(
            hasher.set_total_input_length(99),
            Err(FuzzyError::LengthMismatch { declared: 100, actual: 99 })
        ));
    }

    #[test]
    fn test_declared_length_too_large() {
        let mut hasher = FuzzyHasher::new();
        assert!(hasher.set_total_input_length(TOTAL_SIZE_MAX).is_ok());
        let mut hasher = FuzzyHasher::new();
        assert_eq!(
            hasher.set_total_input_length(TOTAL_SIZE_MAX + 1),
            Err(FuzzyError::TooLarge {
                size: TOTAL_SIZE_MAX + 1,
                max: TOTAL_SIZE_MAX
            })
        );
    }

    #[test]
    fn test_oversized_input_fails_at_finalize() {
        let mut hasher = FuzzyHasher::new();
        hasher.update(b"abc");
        hasher.total_size = TOTAL_SIZE_MAX + 1;
        assert_eq!(
            hasher.finalize().unwrap_err(),
            FuzzyError::TooLarge {
                size: TOTAL_SIZE_MAX + 1,
                max: TOTAL_SIZE_MAX
            }
        );
    }

    #[test]
    fn test_fork_past_last_slot_records_last_hash() {
        let mut hasher = FuzzyHasher::new();
        hasher.end = NUM_BLOCKHASHES;
        hasher.contexts[NUM_BLOCKHASHES - 1].h = 5;

        hasher.try_fork();
        assert_eq!(hasher.last_hash, Some(5));
        assert_eq!(hasher.end, NUM_BLOCKHASHES);

        // Only the first overflowing fork seeds it.
        hasher.contexts[NUM_BLOCKHASHES - 1].h = 9;
        hasher.try_fork();
        assert_eq!(hasher.last_hash, Some(5));
        assert_eq!(hasher.end, NUM_BLOCKHASHES);
    }

    #[test]
    fn test_largest_block_size_emits_last_hash() {
        let last = NUM_BLOCKHASHES - 1;
        let mut hasher = FuzzyHasher::new();
        hasher.end = NUM_BLOCKHASHES;
        hasher.total_size = TOTAL_SIZE_MAX;
        hasher.contexts[last].digest[..HALF_LENGTH].fill(b'A');
        hasher.contexts[last].digest_len = HALF_LENGTH;
        hasher.contexts[last].h = 5;
        hasher.last_hash = Some(9);
        // Leave bytes in the rolling window so trailing symbols are emitted.
        hasher.roll.update(b"tail");

        let digest = hasher.finalize().unwrap();
        assert_eq!(
            digest.as_str(),
            format!("3221225472:{}F:J", "A".repeat(HALF_LENGTH))
        );
    }

    #[test]
    fn test_block_size_table() {
        assert_eq!(block_size(0), 3);
        assert_eq!(block_size(5), 96);
        assert_eq!(block_size(30), 3_221_225_472);
        assert_eq!(TOTAL_SIZE_MAX, 3 * (1u64 << 30) * 64);
        assert_eq!(MAX_RESULT_LEN, 147);
    }

    #[test]
    fn test_retirement_keeps_state_bounded() {
        let mut hasher = FuzzyHasher::new();
        hasher.update(&lcg_bytes(1 << 20, 11));
        assert!(hasher.start > 0, "smallest block sizes should have been retired");
        assert!(hasher.end - hasher.start >= 2);
        let digest = hasher.finalize().unwrap();
        assert!(digest.block_size().unwrap() >= 12_288);
    }

    #[test]
    fn test_eliminate_sequences_helper() {
        let out: Vec<u8> = eliminate_sequences(b"AAAAABBBCCCCA").collect();
        assert_eq!(out, b"AAABBBCCCA");
        let out: Vec<u8> = eliminate_sequences(b"AA").collect();
        assert_eq!(out, b"AA");
    }

    #[test]
    fn test_digest_accessors() {
        let digest = hash_bytes(&lcg_bytes(4096, 7)).unwrap();
        assert_eq!(digest.block_size(), Some(96));
        assert_eq!(digest.to_string(), digest.as_str());
        let owned: String = digest.clone().into();
        assert_eq!(owned, digest.into_string());
    }

    fn assert_well_formed(sig: &str, options: DigestOptions) {
        assert!(sig.len() <= MAX_RESULT_LEN);
        let fields: Vec<&str> = sig.split(':').collect();
        assert_eq!(fields.len(), 3, "bad field count in {sig}");
        let bs: u32 = fields[0].parse().unwrap();
        assert_eq!(bs % MIN_BLOCK_SIZE, 0);
        assert!((bs / MIN_BLOCK_SIZE).is_power_of_two());
        assert!(fields[1].len() <= SPAMSUM_LENGTH);
        let max_second = if options.no_truncate { SPAMSUM_LENGTH } else { HALF_LENGTH };
        assert!(fields[2].len() <= max_second, "second part too long in {sig}");
        for part in &fields[1..] {
            assert!(part.bytes().all(|c| B64.contains(&c)));
            if options.eliminate_sequences {
                assert!(!part.as_bytes().windows(MAX_RUN + 1).any(|w| w.iter().all(|&c| c == w[0])));
            }
        }
    }

    proptest! {
        #[test]
        fn chunked_updates_match_single_pass(
            data in proptest::collection::vec(any::<u8>(), 0..20_000),
            cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
        ) {
            let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
            points.sort_unstable();

            let mut chunked = FuzzyHasher::new();
            let mut prev = 0;
            for p in points {
                chunked.update(&data[prev..p]);
                prev = p;
            }
            chunked.update(&data[prev..]);

            prop_assert_eq!(chunked.finalize().unwrap().into_string(), hash_str(&data));
        }

        #[test]
        fn declared_length_does_not_change_signature(
            data in proptest::collection::vec(any::<u8>(), 0..20_000),
        ) {
            prop_assert_eq!(hash_bytes(&data).unwrap().into_string(), hash_str(&data));
        }

        #[test]
        fn signatures_are_deterministic_and_well_formed(
            data in proptest::collection::vec(any::<u8>(), 0..20_000),
            eliminate_sequences in any::<bool>(),
            no_truncate in any::<bool>(),
        ) {
            let options = DigestOptions { eliminate_sequences, no_truncate };
            let first = hash_with(&data, options);
            prop_assert_eq!(&first, &hash_with(&data, options));
            assert_well_formed(&first, options);
        }
    }
}
