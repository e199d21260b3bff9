//! Public suffix rule index.
//!
//! Rules are stored in a trie keyed by label, walked from the rightmost
//! label of a hostname inward:
//! - O(k) longest-match lookup where k is the number of hostname labels
//! - wildcard rules recorded on the node they hang from
//! - exception rules recorded on the node they name
//!
//! ## Example
//!
//! ```
//! use domain_extract_r::index::SuffixIndex;
//!
//! let index = SuffixIndex::build(["uk", "co.uk", "jp", "*.kawasaki.jp", "!city.kawasaki.jp"]).unwrap();
//!
//! assert_eq!(index.longest_match(&["www", "example", "co", "uk"]), 2);
//! assert_eq!(index.longest_match(&["www", "example", "kawasaki", "jp"]), 3);
//! assert_eq!(index.longest_match(&["city", "kawasaki", "jp"]), 2);  // exception
//! assert_eq!(index.longest_match(&["example", "unknown"]), 1);      // implicit "*"
//! ```

mod trie;

pub use trie::SuffixIndex;
