//! Domain Extract - registrable-domain extraction for Rust
//!
//! Splits a URL or hostname into subdomain, registrable domain label and
//! public suffix using suffix rule data rather than a fixed TLD list:
//! - Multi-label suffixes (`co.uk`, `github.io`)
//! - Wildcard rules (`*.kawasaki.jp`) and exceptions (`!city.kawasaki.jp`)
//! - ICANN and private list sections
//! - IPv4 and bracketed IPv6 literals passed through untouched
//!
//! # Example
//!
//! ```rust
//! use domain_extract_r::{Extractor, SuffixIndex};
//!
//! let rules = "
//! // ===BEGIN ICANN DOMAINS===
//! uk
//! co.uk
//! jp
//! *.kawasaki.jp
//! !city.kawasaki.jp
//! ";
//!
//! // Build the index once, share it everywhere
//! let index = SuffixIndex::build(rules.lines()).unwrap();
//! let extractor = Extractor::new(index);
//!
//! let r = extractor.extract("https://www.example.co.uk/path").unwrap();
//! assert_eq!(r.subdomain_str(), "www");
//! assert_eq!(r.domain, "example");
//! assert_eq!(r.suffix_str(), "co.uk");
//!
//! // Exception rules hand one label back to the registrable domain
//! let r = extractor.extract("city.kawasaki.jp").unwrap();
//! assert_eq!(r.registered_domain(), "city.kawasaki.jp");
//!
//! // A bare public suffix is a valid, degraded result
//! let r = extractor.extract("co.uk").unwrap();
//! assert!(r.domain.is_empty());
//! assert_eq!(r.registered_domain(), "co.uk");
//! ```
//!
//! # Rule Syntax
//!
//! One rule per line, in the public suffix list format:
//!
//! | Rule | Example | Matches |
//! |------|---------|---------|
//! | Normal | `co.uk` | The literal suffix |
//! | Wildcard | `*.kawasaki.jp` | Any one label plus the literal suffix |
//! | Exception | `!city.kawasaki.jp` | Removes one label from a wildcard match |
//! | Comment | `// text` | Ignored |
//!
//! Rules are case-insensitive and must be ASCII; internationalized labels
//! are accepted only in their `xn--` form.

pub mod error;
pub mod extract;
pub mod host;
pub mod index;
pub mod parser;
pub mod shared;
pub mod types;

#[cfg(feature = "bundled")]
pub mod bundled;

// Re-export commonly used items
pub use error::{ExtractError, HostnameErrorKind, Result};
pub use extract::{Extractor, ExtractorOptions};
pub use host::{Host, Hostname};
pub use index::SuffixIndex;
pub use parser::{parse_lines, parse_rules, parse_rules_from_file};
pub use shared::SharedExtractor;
pub use types::{ExtractionResult, RuleKind, Section, SuffixMatch, SuffixRule};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let rules_text = r#"
// Country code with second-level registrations
uk
co.uk

// Wildcard with an exception
jp
*.kawasaki.jp
!city.kawasaki.jp

// ===BEGIN PRIVATE DOMAINS===
*.platform.sh
// ===END PRIVATE DOMAINS===
"#;

        // Parse rules
        let rules = parse_rules(rules_text).unwrap();
        assert_eq!(rules.len(), 6);

        // Build index
        let index = SuffixIndex::from_rules(&rules);
        assert_eq!(index.rule_count(), 6);
        let extractor = Extractor::new(index);

        let r = extractor.extract("www.example.co.uk").unwrap();
        assert_eq!(r.registered_domain(), "example.co.uk");

        let r = extractor.extract("a.b.c.platform.sh").unwrap();
        assert_eq!(r.domain, "b");
        assert!(r.is_private);

        let r = extractor.extract("city.kawasaki.jp").unwrap();
        assert_eq!(r.suffix_str(), "kawasaki.jp");

        let r = extractor.extract("192.168.1.1").unwrap();
        assert_eq!(r.domain, "192.168.1.1");

        assert!(extractor.extract("..").is_err());
    }
}
