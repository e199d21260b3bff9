use std::sync::Arc;

use crate::error::Result;
use crate::host::{Host, Hostname};
use crate::index::SuffixIndex;
use crate::types::{ExtractionResult, Section};

/// Extractor options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Let private-section rules ("github.io") define suffixes
    pub include_private_domains: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            include_private_domains: true,
        }
    }
}

impl ExtractorOptions {
    /// Set whether private-section rules participate in matching
    pub fn with_private_domains(mut self, include: bool) -> Self {
        self.include_private_domains = include;
        self
    }
}

/// Splits URLs and hostnames into subdomain, registrable label and public suffix.
///
/// Holds the index behind an `Arc`; clones are cheap and every call is a pure
/// function of the index and the input.
#[derive(Debug, Clone)]
pub struct Extractor {
    index: Arc<SuffixIndex>,
    options: ExtractorOptions,
}

impl Extractor {
    /// Create an extractor with default options
    pub fn new(index: impl Into<Arc<SuffixIndex>>) -> Self {
        Self::with_options(index, ExtractorOptions::default())
    }

    /// Create an extractor with explicit options
    pub fn with_options(index: impl Into<Arc<SuffixIndex>>, options: ExtractorOptions) -> Self {
        Self {
            index: index.into(),
            options,
        }
    }

    /// Build the index from raw rule lines and wrap it
    pub fn from_rules<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(SuffixIndex::build(lines)?))
    }

    /// The shared index
    pub fn index(&self) -> &Arc<SuffixIndex> {
        &self.index
    }

    /// Active options
    pub fn options(&self) -> ExtractorOptions {
        self.options
    }

    /// Split a URL or hostname.
    ///
    /// A host that is itself a public suffix ("co.uk") is not an error: the
    /// result has an empty `domain`.
    pub fn extract(&self, raw: &str) -> Result<ExtractionResult> {
        let result = match Host::parse(raw)? {
            Host::Ip(ip) => ExtractionResult::ip(ip),
            Host::Name(host) => self.extract_host(&host),
        };
        log::trace!(
            "extract {:?} -> subdomain={:?} domain={:?} suffix={:?}",
            raw,
            result.subdomain_str(),
            result.domain,
            result.suffix_str()
        );
        Ok(result)
    }

    /// Split an already normalized hostname.
    pub fn extract_host(&self, host: &Hostname) -> ExtractionResult {
        let labels = host.labels();

        // Bare names like "localhost" are a registrable label with no suffix
        if let [single] = labels {
            return ExtractionResult {
                domain: single.clone(),
                ..ExtractionResult::default()
            };
        }

        let found = self
            .index
            .find_with(labels, self.options.include_private_domains);
        let boundary = labels.len() - found.len;
        let is_private = found.explicit && found.section == Section::Private;
        let suffix = labels[boundary..].to_vec();

        if boundary == 0 {
            return ExtractionResult {
                suffix,
                is_private,
                ..ExtractionResult::default()
            };
        }

        ExtractionResult {
            subdomain: labels[..boundary - 1].to_vec(),
            domain: labels[boundary - 1].clone(),
            suffix,
            is_private,
        }
    }

    /// Extract every input independently; one bad input never affects the others.
    pub fn extract_all<I, S>(&self, inputs: I) -> Vec<Result<ExtractionResult>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|raw| self.extract(raw.as_ref()))
            .collect()
    }
}
