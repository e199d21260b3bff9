use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::types::{RuleKind, Section, SuffixRule};

/// A single rule label: ASCII letters, digits, hyphen and underscore.
/// Internationalized labels must already be in their "xn--" form.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_-]+$").expect("LABEL_PATTERN: hardcoded regex is invalid")
});

const BYTE_ORDER_MARK: char = '\u{feff}';
const COMMENT_PREFIX: &str = "//";
const BEGIN_PRIVATE: &str = "===BEGIN PRIVATE DOMAINS===";
const END_PRIVATE: &str = "===END PRIVATE DOMAINS===";

/// Parse suffix rules from the body of a suffix list file.
pub fn parse_rules(text: &str) -> Result<Vec<SuffixRule>> {
    parse_lines(text.lines())
}

/// Parse suffix rules from individual raw lines.
///
/// Blank lines and `//` comments are skipped. The private-domains section
/// markers used by the public suffix list switch the [`Section`] of the
/// rules that follow.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<SuffixRule>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rules = Vec::new();
    let mut section = Section::Icann;

    for (line_num, line) in lines.into_iter().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let mut line = line.as_ref();
        if line_num == 1 {
            line = line.trim_start_matches(BYTE_ORDER_MARK);
        }
        let line = line.trim();

        if let Some(comment) = line.strip_prefix(COMMENT_PREFIX) {
            if comment.contains(BEGIN_PRIVATE) {
                section = Section::Private;
            } else if comment.contains(END_PRIVATE) {
                section = Section::Icann;
            }
            continue;
        }

        // Rules end at the first whitespace
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        rules.push(parse_single_rule(token, line_num, section)?);
    }

    Ok(rules)
}

/// Parse suffix rules from a file.
///
/// Convenience for callers; the index itself never touches the filesystem.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<SuffixRule>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_rules(&text)
}

/// Parse a single rule token
pub fn parse_single_rule(token: &str, line_num: usize, section: Section) -> Result<SuffixRule> {
    let malformed = |message: String| ExtractError::MalformedRule {
        line: line_num,
        message,
    };

    let rule = token.to_ascii_lowercase();

    let (kind, body) = if let Some(rest) = rule.strip_prefix('!') {
        (RuleKind::Exception, rest)
    } else if rule == "*" {
        (RuleKind::Wildcard, "")
    } else if let Some(rest) = rule.strip_prefix("*.") {
        (RuleKind::Wildcard, rest)
    } else {
        (RuleKind::Normal, rule.as_str())
    };

    let mut labels = Vec::new();
    if rule != "*" {
        for label in body.split('.') {
            if label.is_empty() {
                return Err(malformed(format!("empty label in '{}'", token)));
            }
            if !LABEL_PATTERN.is_match(label) {
                return Err(malformed(format!(
                    "disallowed characters in label '{}' of '{}'",
                    label, token
                )));
            }
            labels.push(label.to_string());
        }
    }
    labels.reverse();

    if kind == RuleKind::Exception && labels.len() < 2 {
        return Err(malformed(format!(
            "exception '{}' must name a label below a suffix",
            token
        )));
    }

    Ok(SuffixRule {
        labels,
        kind,
        section,
        line_num,
    })
}
