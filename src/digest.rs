//! Algorithm dispatch and the streaming driver.
//!
//! One pass over the input feeds every requested hasher. Reading the next
//! chunk overlaps with hashing the current one, and when more than one
//! algorithm is active the chunk is fanned out to them in parallel.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::FuzzyError;
use crate::fuzzy_hash::{DigestOptions, FuzzyHasher};

/// Bytes read per driver step.
pub const CHUNK_SIZE: usize = 256 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Context-triggered piecewise hash from [`crate::fuzzy_hash`].
    Ssdeep,
    /// BLAKE3, hex encoded.
    Blake3,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Ssdeep => "ssdeep",
            Algorithm::Blake3 => "blake3",
        }
    }

    fn hasher(self, options: DigestOptions) -> Box<dyn StreamHasher> {
        match self {
            Algorithm::Ssdeep => Box::new(SsdeepStream {
                hasher: FuzzyHasher::new(),
                options,
            }),
            Algorithm::Blake3 => Box::new(Blake3Stream(blake3::Hasher::new())),
        }
    }
}

/// A hash computation driven one chunk at a time.
pub trait StreamHasher: Send {
    fn algorithm(&self) -> Algorithm;

    /// Announce the total input length before any data arrives.
    fn size_hint(&mut self, _len: u64) -> Result<(), FuzzyError> {
        Ok(())
    }

    fn update(&mut self, data: &[u8]);

    fn finish(self: Box<Self>) -> Result<String, FuzzyError>;
}

struct SsdeepStream {
    hasher: FuzzyHasher,
    options: DigestOptions,
}

impl StreamHasher for SsdeepStream {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ssdeep
    }

    fn size_hint(&mut self, len: u64) -> Result<(), FuzzyError> {
        self.hasher.set_total_input_length(len)
    }

    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finish(self: Box<Self>) -> Result<String, FuzzyError> {
        self.hasher.finalize_with(self.options).map(String::from)
    }
}

struct Blake3Stream(blake3::Hasher);

impl StreamHasher for Blake3Stream {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Blake3
    }

    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finish(self: Box<Self>) -> Result<String, FuzzyError> {
        Ok(self.0.finalize().to_hex().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestOutput {
    pub algorithm: Algorithm,
    pub value: String,
}

/// Everything computed over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashResult {
    pub size: u64,
    pub digests: Vec<DigestOutput>,
}

impl HashResult {
    pub fn get(&self, algorithm: Algorithm) -> Option<&str> {
        self.digests
            .iter()
            .find(|d| d.algorithm == algorithm)
            .map(|d| d.value.as_str())
    }
}

/// One hasher per requested algorithm, all fed the same bytes.
pub struct MultiHasher {
    hashers: Vec<Box<dyn StreamHasher>>,
    bytes: u64,
}

impl MultiHasher {
    pub fn new(algorithms: &[Algorithm], options: DigestOptions) -> Self {
        let mut unique = algorithms.to_vec();
        unique.sort_unstable();
        unique.dedup();
        Self {
            hashers: unique.into_iter().map(|a| a.hasher(options)).collect(),
            bytes: 0,
        }
    }

    pub fn size_hint(&mut self, len: u64) -> Result<(), FuzzyError> {
        self.hashers.iter_mut().try_for_each(|h| h.size_hint(len))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.bytes = self.bytes.saturating_add(data.len() as u64);
        if self.hashers.len() > 1 {
            self.hashers.par_iter_mut().for_each(|h| h.update(data));
        } else {
            for h in &mut self.hashers {
                h.update(data);
            }
        }
    }

    pub fn finish(self) -> Result<HashResult, FuzzyError> {
        let size = self.bytes;
        let digests = self
            .hashers
            .into_iter()
            .map(|h| {
                let algorithm = h.algorithm();
                h.finish().map(|value| DigestOutput { algorithm, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(HashResult { size, digests })
    }
}

/// Fill `buf` as far as the reader allows. Short only at end of input.
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Drive a reader through `hasher` with two buffers: while one chunk is being
/// hashed the next one is read.
pub fn hash_reader<R: Read + Send>(mut reader: R, mut hasher: MultiHasher) -> Result<HashResult> {
    let mut current = vec![0u8; CHUNK_SIZE];
    let mut next = vec![0u8; CHUNK_SIZE];

    let mut filled = read_chunk(&mut reader, &mut current).context("Failed to read input")?;
    while filled > 0 {
        let chunk = &current[..filled];
        let (read, ()) = rayon::join(
            || read_chunk(&mut reader, &mut next),
            || hasher.update(chunk),
        );
        filled = read.context("Failed to read input")?;
        std::mem::swap(&mut current, &mut next);
    }

    Ok(hasher.finish()?)
}

/// Hash a file. Regular files declare their length to the fuzzy hasher so
/// it can settle on block sizes early.
pub fn hash_file(path: &Path, algorithms: &[Algorithm], options: DigestOptions) -> Result<HashResult> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file for hashing: {}", path.display()))?;
    let meta = file
        .metadata()
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?;

    let mut hasher = MultiHasher::new(algorithms, options);
    if meta.is_file() {
        hasher
            .size_hint(meta.len())
            .with_context(|| format!("Cannot hash {}", path.display()))?;
    }

    hash_reader(file, hasher).with_context(|| format!("Failed to hash file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy_hash::hash_bytes;
    use crate::fuzzy_hash::tests::lcg_bytes;
    use std::io::Cursor;

    #[test]
    fn test_single_algorithm_matches_direct_hash() {
        let data = lcg_bytes(65536, 42);
        let mut multi = MultiHasher::new(&[Algorithm::Ssdeep], DigestOptions::default());
        multi.update(&data);
        let result = multi.finish().unwrap();
        assert_eq!(result.size, 65536);
        assert_eq!(
            result.get(Algorithm::Ssdeep),
            Some(hash_bytes(&data).unwrap().as_str())
        );
        assert_eq!(result.get(Algorithm::Blake3), None);
    }

    #[test]
    fn test_duplicate_algorithms_are_merged() {
        let multi = MultiHasher::new(
            &[Algorithm::Blake3, Algorithm::Ssdeep, Algorithm::Blake3],
            DigestOptions::default(),
        );
        let result = multi.finish().unwrap();
        let algorithms: Vec<Algorithm> = result.digests.iter().map(|d| d.algorithm).collect();
        assert_eq!(algorithms, vec![Algorithm::Ssdeep, Algorithm::Blake3]);
    }

    #[test]
    fn test_reader_spanning_many_chunks() {
        let data = lcg_bytes(CHUNK_SIZE * 2 + 12345, 5);
        let multi = MultiHasher::new(&[Algorithm::Ssdeep, Algorithm::Blake3], DigestOptions::default());
        let result = hash_reader(Cursor::new(&data), multi).unwrap();

        assert_eq!(result.size, data.len() as u64);
        assert_eq!(
            result.get(Algorithm::Ssdeep),
            Some(hash_bytes(&data).unwrap().as_str())
        );
        assert_eq!(
            result.get(Algorithm::Blake3),
            Some(blake3::hash(&data).to_hex().as_str())
        );
    }

    #[test]
    fn test_empty_reader() {
        let multi = MultiHasher::new(&[Algorithm::Ssdeep, Algorithm::Blake3], DigestOptions::default());
        let result = hash_reader(Cursor::new(Vec::<u8>::new()), multi).unwrap();
        assert_eq!(result.size, 0);
        assert_eq!(result.get(Algorithm::Ssdeep), Some("3::"));
        assert_eq!(
            result.get(Algorithm::Blake3),
            Some(blake3::hash(b"").to_hex().as_str())
        );
    }

    #[test]
    fn test_size_hint_mismatch_fails_at_finish() {
        let mut multi = MultiHasher::new(&[Algorithm::Ssdeep], DigestOptions::default());
        multi.size_hint(10).unwrap();
        multi.update(b"short");
        assert!(matches!(
            multi.finish(),
            Err(FuzzyError::LengthMismatch { declared: 10, actual: 5 })
        ));
    }

    #[test]
    fn test_hash_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.bin");
        let data = lcg_bytes(4096, 7);
        std::fs::write(&path, &data).unwrap();

        let result = hash_file(&path, &[Algorithm::Ssdeep], DigestOptions::default()).unwrap();
        assert_eq!(result.size, 4096);
        assert_eq!(
            result.get(Algorithm::Ssdeep),
            Some("96:N8Zl9s0IHl1Ahgj14M9N+a2uSxt6ZRa4F8eVdhI7AeBizxW0z:001JKvKZRJ20Y7Ae6Eg")
        );
    }

    #[test]
    fn test_hash_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = hash_file(&dir.path().join("nope"), &[Algorithm::Ssdeep], DigestOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Ssdeep.name(), "ssdeep");
        assert_eq!(Algorithm::Blake3.name(), "blake3");
    }
}
