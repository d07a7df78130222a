//! Content fingerprints
//!
//! A fingerprint is the SHA-256 digest of a file's bytes. Two writes that
//! produce identical bytes yield the same fingerprint regardless of mtime.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Digest of file content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Compute the fingerprint of raw bytes
    pub fn of(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Process-lifetime map from path to last observed fingerprint
///
/// A path is only present after a novel change was recorded for it;
/// absence means "never observed". Entries are never removed.
#[derive(Debug, Default)]
pub struct FingerprintCache {
    entries: HashMap<PathBuf, Fingerprint>,
}

impl FingerprintCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<&Fingerprint> {
        self.entries.get(path)
    }

    pub fn set(&mut self, path: &Path, fingerprint: Fingerprint) {
        self.entries.insert(path.to_path_buf(), fingerprint);
    }

    /// True when the path was never observed or its content differs
    pub fn is_novel(&self, path: &Path, fingerprint: &Fingerprint) -> bool {
        self.get(path) != Some(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
