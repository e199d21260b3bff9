use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Suffix rule kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Literal suffix: "co.uk"
    Normal,
    /// One arbitrary label plus the literal labels: "*.ck"
    Wildcard,
    /// Carve-out from a wildcard: "!www.ck"
    Exception,
}

/// Section of the suffix list a rule was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    /// Delegated by registries (the default for unmarked lists)
    #[default]
    Icann,
    /// Submitted by private operators ("github.io", "platform.sh")
    Private,
}

/// Parsed suffix rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    /// Literal labels, rightmost first ("co.uk" -> ["uk", "co"]).
    /// The `*` of a wildcard and the `!` of an exception are not stored.
    pub labels: Vec<String>,
    /// Rule kind
    pub kind: RuleKind,
    /// List section
    pub section: Section,
    /// Line number in the original text (for error reporting)
    pub line_num: usize,
}

impl SuffixRule {
    /// Number of hostname labels this rule covers when it matches.
    pub fn depth(&self) -> usize {
        match self.kind {
            RuleKind::Wildcard => self.labels.len() + 1,
            _ => self.labels.len(),
        }
    }
}

/// Outcome of a suffix lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Suffix length in labels, counted from the right
    pub len: usize,
    /// False when only the implicit "*" fallback applied
    pub explicit: bool,
    /// Section of the prevailing rule (Icann for the fallback)
    pub section: Section,
}

impl SuffixMatch {
    pub(crate) fn implicit(label_count: usize) -> Self {
        Self {
            len: label_count.min(1),
            explicit: false,
            section: Section::Icann,
        }
    }
}

/// Result of splitting one hostname.
///
/// `subdomain`, `domain` and `suffix` joined left to right with dots (empty
/// parts omitted) give back the normalized hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Labels left of the registrable label
    pub subdomain: Vec<String>,
    /// Registrable label; empty when the host is itself a public suffix
    pub domain: String,
    /// Public suffix labels, left to right; empty for IP literals and single labels
    pub suffix: Vec<String>,
    /// Whether the suffix came from a private-section rule
    pub is_private: bool,
}

impl ExtractionResult {
    pub(crate) fn ip(addr: IpAddr) -> Self {
        Self {
            domain: addr.to_string(),
            ..Self::default()
        }
    }

    /// Subdomain labels joined with dots
    pub fn subdomain_str(&self) -> String {
        self.subdomain.join(".")
    }

    /// Suffix labels joined with dots
    pub fn suffix_str(&self) -> String {
        self.suffix.join(".")
    }

    /// `domain.suffix`, dropping whichever side is empty.
    ///
    /// For a bare public suffix such as "co.uk" this is just the suffix.
    pub fn registered_domain(&self) -> String {
        join_non_empty([self.domain.clone(), self.suffix_str()])
    }

    /// The full normalized hostname.
    pub fn fqdn(&self) -> String {
        join_non_empty([self.subdomain_str(), self.domain.clone(), self.suffix_str()])
    }

    /// True when the input was a public suffix with no registrable label.
    pub fn is_bare_suffix(&self) -> bool {
        self.domain.is_empty() && !self.suffix.is_empty()
    }

    /// The address, when the input was an IP literal.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        if !self.suffix.is_empty() || !self.subdomain.is_empty() {
            return None;
        }
        self.domain.parse().ok()
    }
}

fn join_non_empty<const N: usize>(parts: [String; N]) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(sub: &[&str], domain: &str, suffix: &[&str]) -> ExtractionResult {
        ExtractionResult {
            subdomain: sub.iter().map(|s| s.to_string()).collect(),
            domain: domain.to_string(),
            suffix: suffix.iter().map(|s| s.to_string()).collect(),
            is_private: false,
        }
    }

    #[test]
    fn test_rule_depth() {
        let rule = SuffixRule {
            labels: vec!["ck".into()],
            kind: RuleKind::Wildcard,
            section: Section::Icann,
            line_num: 1,
        };
        assert_eq!(rule.depth(), 2);

        let rule = SuffixRule {
            labels: vec!["jp".into(), "kawasaki".into(), "city".into()],
            kind: RuleKind::Exception,
            section: Section::Icann,
            line_num: 2,
        };
        assert_eq!(rule.depth(), 3);
    }

    #[test]
    fn test_registered_domain() {
        assert_eq!(
            result(&["www"], "example", &["co", "uk"]).registered_domain(),
            "example.co.uk"
        );
        // Bare suffix: no leading dot
        assert_eq!(result(&[], "", &["co", "uk"]).registered_domain(), "co.uk");
        // Single label: no trailing dot
        assert_eq!(result(&[], "localhost", &[]).registered_domain(), "localhost");
    }

    #[test]
    fn test_fqdn() {
        assert_eq!(
            result(&["a", "b"], "example", &["com"]).fqdn(),
            "a.b.example.com"
        );
        assert_eq!(result(&[], "", &["co", "uk"]).fqdn(), "co.uk");
    }

    #[test]
    fn test_bare_suffix() {
        assert!(result(&[], "", &["co", "uk"]).is_bare_suffix());
        assert!(!result(&[], "example", &["com"]).is_bare_suffix());
        assert!(!result(&[], "localhost", &[]).is_bare_suffix());
    }

    #[test]
    fn test_ip_addr() {
        let r = ExtractionResult::ip("10.0.0.1".parse().unwrap());
        assert_eq!(r.domain, "10.0.0.1");
        assert_eq!(r.ip_addr(), Some("10.0.0.1".parse().unwrap()));
        assert_eq!(result(&[], "example", &["com"]).ip_addr(), None);
    }

    #[test]
    fn test_implicit_match_never_exceeds_labels() {
        assert_eq!(SuffixMatch::implicit(0).len, 0);
        assert_eq!(SuffixMatch::implicit(3).len, 1);
        assert!(!SuffixMatch::implicit(3).explicit);
    }
}
