//! fuzzysum - context-triggered piecewise hashing
//!
//! Produces ssdeep-compatible fuzzy hash signatures and scores how similar two
//! signatures are, plus the file-level plumbing to hash trees, store known
//! signatures and match new files against them.

pub mod compare;
pub mod digest;
pub mod edit_distance;
pub mod error;
pub mod fuzzy_hash;
pub mod matcher;
pub mod rolling_hash;
pub mod scan;
pub mod signature_db;
pub mod sum_table;
pub mod util;

pub use compare::compare;
pub use error::{FuzzyError, Result};
pub use fuzzy_hash::{hash_bytes, DigestOptions, FuzzyDigest, FuzzyHasher};
