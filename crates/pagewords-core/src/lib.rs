//! # pagewords-core
//!
//! Word and item-type statistics for a directory of wiki page documents.
//!
//! Each page is a JSON document whose `story` is a list of typed items. The
//! library tallies every item's type, extracts prose from the text-bearing
//! kinds, normalizes it into lowercase word tokens and renders frequency
//! reports over the whole corpus.
//!
//! ## Pipeline
//!
//! - [`scan::scan_pages`] reads every page in parallel and merges the results
//! - [`classify::classify_story`] tallies item types and picks the text to index
//! - [`normalize::normalize`] strips markup and splits text into tokens
//! - [`counter::Counter`] accumulates counts
//! - [`report::ReportKind`] renders the four reports
//!
//! ## Example
//!
//! ```rust
//! use pagewords_core::prelude::*;
//! use serde_json::json;
//!
//! let page = json!({
//!     "title": "Welcome",
//!     "story": [
//!         { "type": "paragraph", "id": "a1", "text": "Welcome to [[Federated Wiki]]." },
//!         { "type": "factory", "id": "a2" }
//!     ]
//! });
//!
//! let tally = process_value(&page, &ScanConfig::default()).unwrap().unwrap();
//! assert_eq!(tally.items.get("factory"), Some(1));
//! assert_eq!(ReportKind::Words.render(&tally), "federated\nto\nwelcome\nwiki\n");
//! ```

pub mod classify;
pub mod counter;
pub mod error;
pub mod models;
pub mod normalize;
pub mod report;
pub mod scan;

// Re-export commonly used types at the crate root
pub use classify::{caption_text, classify_item, classify_story};
pub use counter::Counter;
pub use error::{PagewordsError, Result};
pub use models::{Item, ItemKind, Page, TYPE_MISSING, Tally, TextPolicy};
pub use normalize::normalize;
pub use report::{ReportKind, write_reports};
pub use scan::{ScanConfig, ScanSummary, scan_pages};

/// Prelude module for convenient imports.
///
/// ```
/// use pagewords_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classify::{classify_item, classify_story};
    pub use crate::counter::Counter;
    pub use crate::error::{PagewordsError, Result};
    pub use crate::models::*;
    pub use crate::normalize::normalize;
    pub use crate::report::{ReportKind, write_reports};
    pub use crate::scan::{ScanConfig, ScanSummary, process_page, process_value, scan_pages};
}
