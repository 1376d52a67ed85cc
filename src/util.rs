use anyhow::{bail, Context, Result};
use memmap2::Mmap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as it will be printed: the root as given, joined with the walk.
    pub display_path: String,
    pub full_path: PathBuf,
    /// File size in bytes. Free from the OS directory scan.
    pub size: u64,
}

#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<FileEntry>,
    /// Directories passed without recursion enabled.
    pub dirs_skipped: usize,
    /// Entries the walk could not read.
    pub unreadable: usize,
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Collect the regular files under `root`.
///
/// A file root yields itself. A directory root is only descended into when
/// `recursive` is set; otherwise it is counted as skipped.
pub fn walk_root(root: &Path, recursive: bool) -> Result<WalkOutcome> {
    let meta = std::fs::metadata(root)
        .with_context(|| format!("Failed to read metadata: {}", root.display()))?;

    let mut outcome = WalkOutcome::default();

    if meta.is_file() {
        outcome.files.push(FileEntry {
            display_path: display(root),
            full_path: root.to_path_buf(),
            size: meta.len(),
        });
        return Ok(outcome);
    }
    if !meta.is_dir() {
        bail!("Not a regular file or directory: {}", root.display());
    }
    if !recursive {
        tracing::warn!(path = %root.display(), "Is a directory, skipping (use --recursive)");
        outcome.dirs_skipped = 1;
        return Ok(outcome);
    }

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "Failed to read directory entry");
                outcome.unreadable += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "Failed to read metadata");
                outcome.unreadable += 1;
                continue;
            }
        };

        outcome.files.push(FileEntry {
            display_path: display(entry.path()),
            full_path: entry.path().to_path_buf(),
            size,
        });
    }

    Ok(outcome)
}

/// Memory-map a file for read-only access.
///
/// # Safety
/// The mapping is read-only. Callers must not concurrently truncate or replace
/// the underlying file while the `Mmap` is live.
pub fn mmap_file(path: &Path) -> Result<Mmap> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    // SAFETY: We only read from this mapping; no concurrent modification of these files.
    unsafe {
        Mmap::map(&file)
            .with_context(|| format!("Failed to memory-map file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("b.txt"), b"bbbb").unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::write(dir.path().join("sub/deeper/c.bin"), [0u8; 16]).unwrap();
        dir
    }

    #[test]
    fn test_file_root() {
        let dir = tree();
        let path = dir.path().join("b.txt");
        let outcome = walk_root(&path, false).unwrap();
        assert_eq!(outcome.files.len(), 1);
        assert_eq!(outcome.files[0].size, 4);
        assert_eq!(outcome.files[0].full_path, path);
    }

    #[test]
    fn test_directory_without_recursion_is_skipped() {
        let dir = tree();
        let outcome = walk_root(dir.path(), false).unwrap();
        assert!(outcome.files.is_empty());
        assert_eq!(outcome.dirs_skipped, 1);
    }

    #[test]
    fn test_recursive_walk_is_sorted_and_files_only() {
        let dir = tree();
        let outcome = walk_root(dir.path(), true).unwrap();
        let names: Vec<String> = outcome
            .files
            .iter()
            .map(|f| {
                f.full_path
                    .strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "sub/deeper/c.bin"]);
        assert_eq!(outcome.files[2].size, 16);
    }

    #[test]
    fn test_missing_root() {
        let dir = tree();
        assert!(walk_root(&dir.path().join("missing"), true).is_err());
    }

    #[test]
    fn test_mmap_file() {
        let dir = tree();
        let map = mmap_file(&dir.path().join("b.txt")).unwrap();
        assert_eq!(&map[..], b"bbbb");
    }
}
