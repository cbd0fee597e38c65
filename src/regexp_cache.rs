use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use crate::regex_util::AnchoredRegex;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Cache of compiled national number patterns. Compilation happens at most
/// once per pattern string, also under concurrent lookups for the same key.
pub struct RegexCache {
    cache: DashMap<String, Arc<AnchoredRegex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<AnchoredRegex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                AnchoredRegex::new(pattern).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}
