//! Storage for known signatures: a compact binary database and the
//! ssdeep text listing.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::compare::is_valid_signature;
use crate::util;

pub const MAGIC: &[u8; 8] = b"FZSUMDB1";
pub const FORMAT_VERSION: u32 = 1;

/// First line of an ssdeep listing.
pub const TEXT_HEADER: &str = "ssdeep,1.1--blocksize:hash:hash,filename";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub path: String,
    /// Unknown for entries read from a text listing.
    pub size: Option<u64>,
    pub signature: String,
    /// Hex BLAKE3 digest, when it was requested at hash time.
    pub blake3: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignatureDb {
    pub version: u32,
    pub entries: Vec<SignatureEntry>,
}

impl SignatureDb {
    pub fn new(entries: Vec<SignatureEntry>) -> Self {
        Self {
            version: FORMAT_VERSION,
            entries,
        }
    }
}

/// Serialize, compress and write a database file.
pub fn write_db(path: &Path, db: &SignatureDb) -> Result<()> {
    let encoded = bincode::serialize(db).context("Failed to serialize signature database")?;
    let compressed =
        zstd::bulk::compress(&encoded, 3).context("Failed to compress signature database")?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(MAGIC)?;
    file.write_all(&compressed)?;
    file.flush()?;
    Ok(())
}

fn decode_db(raw: &[u8]) -> Result<SignatureDb> {
    if raw.len() < MAGIC.len() || &raw[..MAGIC.len()] != MAGIC {
        bail!("Invalid signature database: missing magic header");
    }

    let decoder =
        zstd::Decoder::new(&raw[MAGIC.len()..]).context("Failed to create zstd decoder")?;
    let db: SignatureDb =
        bincode::deserialize_from(decoder).context("Failed to deserialize signature database")?;

    if db.version != FORMAT_VERSION {
        bail!(
            "Unsupported signature database version: {} (expected {})",
            db.version,
            FORMAT_VERSION
        );
    }
    Ok(db)
}

pub fn read_db(path: &Path) -> Result<SignatureDb> {
    let raw = util::mmap_file(path)?;
    decode_db(&raw).with_context(|| format!("Failed to read {}", path.display()))
}

fn quote(path: &str) -> String {
    format!("\"{}\"", path.replace('"', "\\\""))
}

fn unquote(field: &str) -> String {
    match field.strip_prefix('"').and_then(|f| f.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\""),
        None => field.to_string(),
    }
}

/// Write entries as an ssdeep listing.
pub fn write_text<W: Write>(mut out: W, entries: &[SignatureEntry]) -> std::io::Result<()> {
    writeln!(out, "{TEXT_HEADER}")?;
    for entry in entries {
        writeln!(out, "{},{}", entry.signature, quote(&entry.path))?;
    }
    out.flush()
}

/// Parse an ssdeep listing. The header is optional and blank lines are ignored.
pub fn parse_text<R: BufRead>(reader: R) -> Result<Vec<SignatureEntry>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with("ssdeep,") {
            continue;
        }

        let Some((signature, path)) = line.split_once(',') else {
            bail!("Line {line_no}: expected '<signature>,<filename>'");
        };
        if !is_valid_signature(signature) {
            bail!("Line {line_no}: invalid signature '{signature}'");
        }

        entries.push(SignatureEntry {
            path: unquote(path),
            size: None,
            signature: signature.to_string(),
            blake3: None,
        });
    }

    Ok(entries)
}

/// Load known signatures from either a database or a text listing.
pub fn load_known(path: &Path) -> Result<Vec<SignatureEntry>> {
    let len = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?
        .len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let raw = util::mmap_file(path)?;
    if raw.starts_with(MAGIC) {
        let db = decode_db(&raw).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(db.entries)
    } else {
        parse_text(&raw[..]).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
