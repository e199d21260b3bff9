//! Reloadable extractor shared across threads.
//!
//! Extraction never takes the write lock: callers clone the current
//! `Arc<Extractor>` and work on that snapshot, so a reload only swaps a
//! pointer once the replacement index is fully built.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::extract::{Extractor, ExtractorOptions};
use crate::index::SuffixIndex;
use crate::types::ExtractionResult;

struct Current {
    extractor: Arc<Extractor>,
    generation: u64,
}

/// Extractor whose rule set can be replaced at runtime
pub struct SharedExtractor {
    current: RwLock<Current>,
}

impl SharedExtractor {
    /// Wrap an existing extractor as generation 0
    pub fn new(extractor: Extractor) -> Self {
        Self {
            current: RwLock::new(Current {
                extractor: Arc::new(extractor),
                generation: 0,
            }),
        }
    }

    /// The extractor in effect right now
    pub fn snapshot(&self) -> Arc<Extractor> {
        Arc::clone(&self.current.read().extractor)
    }

    /// Number of completed reloads
    pub fn generation(&self) -> u64 {
        self.current.read().generation
    }

    /// Extract with the current snapshot
    pub fn extract(&self, raw: &str) -> Result<ExtractionResult> {
        self.snapshot().extract(raw)
    }

    /// Rebuild from raw rule lines, keeping the current options.
    ///
    /// On a malformed rule the previous rule set stays in effect.
    pub fn reload<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = SuffixIndex::build(lines)?;
        let options = self.snapshot().options();
        self.replace(index, options);
        Ok(())
    }

    /// Swap in an already built index with new options
    pub fn replace(&self, index: impl Into<Arc<SuffixIndex>>, options: ExtractorOptions) {
        let extractor = Arc::new(Extractor::with_options(index, options));
        let rule_count = extractor.index().rule_count();

        let mut current = self.current.write();
        current.extractor = extractor;
        current.generation += 1;
        log::debug!(
            "Reloaded suffix rules: generation {} with {} rules",
            current.generation,
            rule_count
        );
    }
}

impl From<Extractor> for SharedExtractor {
    fn from(extractor: Extractor) -> Self {
        Self::new(extractor)
    }
}
