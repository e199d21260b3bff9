//! Pinned suffix rule snapshot shipped with the crate.
//!
//! The snapshot only changes with a crate release, so results stay stable
//! across rebuilds. Callers that track the live list should build their own
//! [`SuffixIndex`] from it instead.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::extract::Extractor;
use crate::index::SuffixIndex;
use crate::types::ExtractionResult;

/// Raw text of the bundled rule list
pub const RULES: &str = include_str!("../data/public_suffix_list.dat");

/// Snapshot date of the bundled rule list
pub const VERSION: &str = "2024-04-15";

static INDEX: Lazy<Arc<SuffixIndex>> = Lazy::new(|| {
    Arc::new(SuffixIndex::build(RULES.lines()).expect("bundled suffix list is malformed"))
});

/// Index over the bundled rules, built on first use
pub fn index() -> Arc<SuffixIndex> {
    Arc::clone(&*INDEX)
}

/// Extractor over the bundled rules with default options
pub fn extractor() -> Extractor {
    Extractor::new(index())
}

/// Split `raw` using the bundled rules
pub fn extract(raw: &str) -> Result<ExtractionResult> {
    extractor().extract(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_rules_parse() {
        assert!(index().rule_count() > 100);
    }

    #[test]
    fn test_version_matches_file_header() {
        assert!(RULES.contains(&format!("// VERSION: {}", VERSION)));
    }

    #[test]
    fn test_index_is_built_once() {
        assert!(Arc::ptr_eq(&index(), &index()));
    }

    #[test]
    fn test_bundled_extract() {
        let r = extract("https://www.example.co.uk/index.html").unwrap();
        assert_eq!(r.registered_domain(), "example.co.uk");
        assert_eq!(r.subdomain_str(), "www");
    }
}
