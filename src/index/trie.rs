//! Label trie over suffix rules.
//!
//! Built once and read-only afterwards, so a single index can be shared
//! across threads behind an `Arc` without locking.

use std::collections::HashMap;

use crate::error::Result;
use crate::parser::parse_lines;
use crate::types::{RuleKind, Section, SuffixMatch, SuffixRule};

/// One trie node; the path from the root spells a suffix right to left.
#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<String, Node>,
    /// A normal rule ends here
    normal: Option<Section>,
    /// "*.<path>" rule: any one label below this node is a suffix
    wildcard: Option<Section>,
    /// "!<path>" rule: this node is carved out of the parent's wildcard
    exception: Option<Section>,
}

/// Suffix rule index supporting longest-match lookup
#[derive(Debug, Clone, Default)]
pub struct SuffixIndex {
    root: Node,
    rule_count: usize,
}

impl SuffixIndex {
    /// Build an index from raw rule lines.
    ///
    /// Fails on the first malformed rule; no partial index is returned.
    pub fn build<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = parse_lines(lines)?;
        Ok(Self::from_rules(&rules))
    }

    /// Build an index from already parsed rules.
    pub fn from_rules(rules: &[SuffixRule]) -> Self {
        let mut root = Node::default();

        for rule in rules {
            let mut node = &mut root;
            for label in &rule.labels {
                node = node.children.entry(label.clone()).or_default();
            }
            // First declaration wins for duplicates
            let slot = match rule.kind {
                RuleKind::Normal => &mut node.normal,
                RuleKind::Wildcard => &mut node.wildcard,
                RuleKind::Exception => &mut node.exception,
            };
            slot.get_or_insert(rule.section);
        }

        let index = Self {
            root,
            rule_count: rules.len(),
        };
        index.report(rules);
        index
    }

    fn report(&self, rules: &[SuffixRule]) {
        let count = |kind: RuleKind| rules.iter().filter(|r| r.kind == kind).count();
        let private = rules
            .iter()
            .filter(|r| r.section == Section::Private)
            .count();
        log::debug!(
            "Built suffix index: {} rules ({} wildcard, {} exception, {} private)",
            rules.len(),
            count(RuleKind::Wildcard),
            count(RuleKind::Exception),
            private
        );

        for rule in rules.iter().filter(|r| r.kind == RuleKind::Exception) {
            let governed = rule
                .labels
                .split_last()
                .and_then(|(_, parent)| self.node(parent))
                .is_some_and(|node| node.wildcard.is_some());
            if !governed {
                log::warn!(
                    "Exception rule at line {} has no wildcard above it and never applies",
                    rule.line_num
                );
            }
        }
    }

    fn node(&self, rev_labels: &[String]) -> Option<&Node> {
        rev_labels
            .iter()
            .try_fold(&self.root, |node, label| node.children.get(label))
    }

    /// Number of rules the index was built from
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Check if the index holds no rules
    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Length, in labels from the right, of the public suffix of `labels`.
    ///
    /// `labels` are lowercase and in hostname order ("www", "example", "com").
    /// Falls back to 1 when no rule matches, and returns 0 only for an
    /// empty slice.
    pub fn longest_match<S: AsRef<str>>(&self, labels: &[S]) -> usize {
        self.find(labels).len
    }

    /// Like [`longest_match`](Self::longest_match) with match details,
    /// considering rules from every section.
    pub fn find<S: AsRef<str>>(&self, labels: &[S]) -> SuffixMatch {
        self.find_with(labels, true)
    }

    /// Look up the public suffix, optionally ignoring private-section rules.
    pub fn find_with<S: AsRef<str>>(&self, labels: &[S], include_private: bool) -> SuffixMatch {
        let allowed = |section: Option<Section>| {
            section.filter(|s| include_private || *s == Section::Icann)
        };

        // Exceptions prevail over anything the first phase found
        if let Some(found) = self.exception_match(labels, &allowed) {
            return found;
        }
        self.deepest_match(labels, &allowed)
            .unwrap_or_else(|| SuffixMatch::implicit(labels.len()))
    }

    /// Phase one: the deepest normal or wildcard rule along the label path.
    fn deepest_match<S, F>(&self, labels: &[S], allowed: &F) -> Option<SuffixMatch>
    where
        S: AsRef<str>,
        F: Fn(Option<Section>) -> Option<Section>,
    {
        let mut node = &self.root;
        let mut best = None;

        for (depth, label) in labels.iter().rev().enumerate() {
            if let Some(section) = allowed(node.wildcard) {
                best = Some(explicit(depth + 1, section));
            }
            let Some(child) = node.children.get(label.as_ref()) else {
                break;
            };
            if let Some(section) = allowed(child.normal) {
                best = Some(explicit(depth + 1, section));
            }
            node = child;
        }

        best
    }

    /// Phase two: wherever a wildcard matched, check the label it consumed
    /// for an exception. The exception hands that label back, so the suffix
    /// stops one short of the exception rule.
    fn exception_match<S, F>(&self, labels: &[S], allowed: &F) -> Option<SuffixMatch>
    where
        S: AsRef<str>,
        F: Fn(Option<Section>) -> Option<Section>,
    {
        let mut node = &self.root;
        let mut found = None;

        for (depth, label) in labels.iter().rev().enumerate() {
            let Some(child) = node.children.get(label.as_ref()) else {
                break;
            };
            if allowed(node.wildcard).is_some() {
                if let Some(section) = allowed(child.exception) {
                    found = Some(explicit(depth, section));
                }
            }
            node = child;
        }

        found
    }
}

fn explicit(len: usize, section: Section) -> SuffixMatch {
    SuffixMatch {
        len,
        explicit: true,
        section,
    }
}
