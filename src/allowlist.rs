//! The user-curated set of decoders that must stay enabled.

use crate::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// Decoder names loaded from `enabled-decoders.txt`.
///
/// The file holds whitespace-separated decoder names. Duplicates collapse,
/// surrounding whitespace is stripped, and empty tokens are dropped. The set
/// is immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    decoders: HashSet<String>,
}

impl AllowList {
    /// Default allow-list file, relative to the working directory.
    pub const DEFAULT_FILE: &'static str = "enabled-decoders.txt";

    /// Load the allow-list from a text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or fully read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| Error::allowlist_unreadable(path, source))?;
        Ok(Self::parse(&contents))
    }

    /// Parse allow-list file contents into the set.
    pub fn parse(contents: &str) -> Self {
        let decoders = contents.split_whitespace().map(str::to_string).collect();
        Self { decoders }
    }

    /// Whether the named decoder must remain enabled.
    pub fn contains(&self, decoder: &str) -> bool {
        self.decoders.contains(decoder)
    }

    /// Iterate over the decoder names. Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.decoders.iter().map(String::as_str)
    }

    /// Number of allow-listed decoders.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether the allow-list is empty.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
