use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::digest::{self, Algorithm};
use crate::fuzzy_hash::DigestOptions;
use crate::signature_db::SignatureEntry;
use crate::util::{self, FileEntry};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Descend into directories given as roots.
    pub recursive: bool,
    /// Also compute a BLAKE3 digest per file.
    pub with_blake3: bool,
    pub digest: DigestOptions,
}

impl ScanOptions {
    fn algorithms(&self) -> Vec<Algorithm> {
        let mut algorithms = vec![Algorithm::Ssdeep];
        if self.with_blake3 {
            algorithms.push(Algorithm::Blake3);
        }
        algorithms
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_hashed: usize,
    pub files_failed: usize,
    pub dirs_skipped: usize,
    pub bytes_hashed: u64,
}

#[derive(Debug)]
pub struct ScanReport {
    pub entries: Vec<SignatureEntry>,
    pub summary: ScanSummary,
}

/// Hash every file reachable from `roots`.
/// Roots are walked concurrently with Tokio; files are hashed with Rayon.
pub async fn scan_paths(roots: &[PathBuf], options: &ScanOptions) -> Result<ScanReport> {
    // Stage 1: walk each root on the blocking pool
    let walks: Vec<_> = roots
        .iter()
        .cloned()
        .map(|root| {
            let recursive = options.recursive;
            tokio::task::spawn_blocking(move || util::walk_root(&root, recursive))
        })
        .collect();

    let mut summary = ScanSummary::default();
    let mut files: Vec<FileEntry> = Vec::new();
    for walk in walks {
        let outcome = walk.await??;
        summary.dirs_skipped += outcome.dirs_skipped;
        summary.files_failed += outcome.unreadable;
        files.extend(outcome.files);
    }
    info!(files = files.len(), roots = roots.len(), "Walk finished");

    // Stage 2: hash (Rayon par_iter inside spawn_blocking)
    let algorithms = options.algorithms();
    let digest_options = options.digest;
    let results = tokio::task::spawn_blocking(move || {
        files
            .into_par_iter()
            .map(|file| {
                let hashed = digest::hash_file(&file.full_path, &algorithms, digest_options);
                (file, hashed)
            })
            .collect::<Vec<_>>()
    })
    .await?;

    let mut entries = Vec::with_capacity(results.len());
    for (file, hashed) in results {
        let result = match hashed {
            Ok(result) => result,
            Err(e) => {
                warn!(path = %file.display_path, error = %format!("{e:#}"), "Failed to hash file");
                summary.files_failed += 1;
                continue;
            }
        };
        let Some(signature) = result.get(Algorithm::Ssdeep) else {
            continue;
        };
        debug!(path = %file.display_path, size = result.size, %signature, "Hashed");

        summary.files_hashed += 1;
        summary.bytes_hashed += result.size;
        entries.push(SignatureEntry {
            path: file.display_path,
            size: Some(result.size),
            signature: signature.to_string(),
            blake3: result.get(Algorithm::Blake3).map(str::to_string),
        });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(ScanReport { entries, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy_hash::tests::lcg_bytes;
    use std::fs;

    #[tokio::test]
    async fn test_scan_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/sample.bin"), lcg_bytes(4096, 7)).unwrap();
        fs::write(dir.path().join("empty"), b"").unwrap();

        let options = ScanOptions {
            recursive: true,
            with_blake3: true,
            ..Default::default()
        };
        let report = scan_paths(&[dir.path().to_path_buf()], &options).await.unwrap();

        assert_eq!(report.summary.files_hashed, 2);
        assert_eq!(report.summary.files_failed, 0);
        assert_eq!(report.summary.bytes_hashed, 4096);
        assert_eq!(report.entries.len(), 2);

        let empty = &report.entries[0];
        assert!(empty.path.ends_with("empty"));
        assert_eq!(empty.signature, "3::");
        assert_eq!(empty.blake3.as_deref(), Some(blake3::hash(b"").to_hex().as_str()));

        let sample = &report.entries[1];
        assert!(sample.path.ends_with("sample.bin"));
        assert_eq!(sample.size, Some(4096));
        assert_eq!(
            sample.signature,
            "96:N8Zl9s0IHl1Ahgj14M9N+a2uSxt6ZRa4F8eVdhI7AeBizxW0z:001JKvKZRJ20Y7Ae6Eg"
        );
    }

    #[tokio::test]
    async fn test_directory_skipped_without_recursion() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, b"a").unwrap();

        let report = scan_paths(
            &[dir.path().to_path_buf(), file.clone()],
            &ScanOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.summary.dirs_skipped, 1);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].signature, "3:E:E");
        assert_eq!(report.entries[0].blake3, None);
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(scan_paths(&[missing], &ScanOptions::default()).await.is_err());
    }
}
