use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::compare::compare;
use crate::scan::{self, ScanOptions, ScanSummary};
use crate::signature_db::{self, SignatureEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit {
    pub path: String,
    pub known_path: String,
    pub score: u32,
}

fn score(a: &SignatureEntry, b: &SignatureEntry) -> i32 {
    match (&a.blake3, &b.blake3) {
        (Some(x), Some(y)) if x == y => 100,
        _ => compare(&a.signature, &b.signature),
    }
}

fn hit(candidate: &SignatureEntry, known: &SignatureEntry, threshold: u32) -> Option<MatchHit> {
    let score = score(candidate, known);
    // Negative scores are unparseable signatures and never reach the threshold.
    let score = u32::try_from(score).ok().filter(|&s| s > threshold)?;
    Some(MatchHit {
        path: candidate.path.clone(),
        known_path: known.path.clone(),
        score,
    })
}

fn sort_hits(hits: &mut [MatchHit]) {
    hits.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.known_path.cmp(&b.known_path))
    });
}

/// Score every candidate against every known signature.
pub fn match_against(
    known: &[SignatureEntry],
    candidates: &[SignatureEntry],
    threshold: u32,
) -> Vec<MatchHit> {
    let mut hits: Vec<MatchHit> = candidates
        .par_iter()
        .flat_map_iter(|candidate| known.iter().filter_map(move |k| hit(candidate, k, threshold)))
        .collect();
    sort_hits(&mut hits);
    hits
}

/// Score every unordered pair within `entries`.
pub fn cluster(entries: &[SignatureEntry], threshold: u32) -> Vec<MatchHit> {
    let mut hits: Vec<MatchHit> = entries
        .par_iter()
        .enumerate()
        .flat_map_iter(|(i, a)| {
            entries[i + 1..]
                .iter()
                .filter_map(move |b| hit(a, b, threshold))
        })
        .collect();
    sort_hits(&mut hits);
    hits
}

#[derive(Debug)]
pub struct MatchReport {
    pub hits: Vec<MatchHit>,
    pub known: usize,
    pub scan: ScanSummary,
}

/// Hash `paths` and match them against the signatures stored in `known_path`.
///
/// Candidates also get a BLAKE3 digest whenever the known set carries any, so
/// exact copies are recognised without the comparator.
pub async fn match_paths(
    known_path: &Path,
    paths: &[PathBuf],
    options: &ScanOptions,
    threshold: u32,
) -> Result<MatchReport> {
    let owned = known_path.to_path_buf();
    let known = tokio::task::spawn_blocking(move || signature_db::load_known(&owned)).await??;

    let options = ScanOptions {
        with_blake3: options.with_blake3 || known.iter().any(|k| k.blake3.is_some()),
        ..*options
    };
    let report = scan::scan_paths(paths, &options).await?;
    info!(
        known = known.len(),
        candidates = report.entries.len(),
        blake3 = options.with_blake3,
        "Matching"
    );

    let known_count = known.len();
    let candidates = report.entries;
    let hits =
        tokio::task::spawn_blocking(move || match_against(&known, &candidates, threshold)).await?;

    Ok(MatchReport {
        hits,
        known: known_count,
        scan: report.summary,
    })
}

/// Hash `paths` and compare the resulting files with each other.
pub async fn cluster_paths(
    paths: &[PathBuf],
    options: &ScanOptions,
    threshold: u32,
) -> Result<MatchReport> {
    let report = scan::scan_paths(paths, options).await?;
    info!(files = report.entries.len(), "Clustering");

    let entries = report.entries;
    let hits = tokio::task::spawn_blocking(move || cluster(&entries, threshold)).await?;

    Ok(MatchReport {
        hits,
        known: 0,
        scan: report.summary,
    })
}
