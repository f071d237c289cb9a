//! Corpus scanning.
//!
//! Lists a pages directory, reads and classifies every regular file in
//! parallel, and merges the per-page tallies once all pages are done. A page
//! that fails to read, parse or classify is logged and contributes nothing.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::classify::classify_story;
use crate::error::{PagewordsError, Result};
use crate::models::{Page, Tally};

/// Default length above which a token is reported as suspicious.
pub const DEFAULT_LONG_TOKEN_THRESHOLD: usize = 50;

/// Scan settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Tokens with more characters than this are logged (never dropped).
    pub long_token_threshold: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            long_token_threshold: DEFAULT_LONG_TOKEN_THRESHOLD,
        }
    }
}

/// Result of scanning a pages directory.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub tally: Tally,
    /// Pages whose story was classified.
    pub indexed: usize,
    /// Pages without a story.
    pub skipped: usize,
    /// Pages that could not be read, parsed or classified.
    pub failed: usize,
}

/// What happened to a single page.
#[derive(Debug)]
enum PageOutcome {
    Indexed(Tally),
    NoStory,
    Failed,
}

/// Scan every regular file directly inside `pages_dir`.
///
/// Only failing to list the directory is an error; per-page failures are
/// logged and counted in [`ScanSummary::failed`].
pub fn scan_pages(pages_dir: &Path, config: &ScanConfig) -> Result<ScanSummary> {
    let files = list_page_files(pages_dir)?;
    debug!(count = files.len(), "Scanning pages in {}", pages_dir.display());

    let outcomes: Vec<PageOutcome> = files
        .par_iter()
        .map(|path| scan_page(path, config))
        .collect();

    let mut summary = ScanSummary::default();
    for outcome in outcomes {
        match outcome {
            PageOutcome::Indexed(tally) => {
                summary.indexed += 1;
                summary.tally.merge(tally);
            }
            PageOutcome::NoStory => summary.skipped += 1,
            PageOutcome::Failed => summary.failed += 1,
        }
    }
    Ok(summary)
}

/// List the regular files directly inside `pages_dir`, sorted by path.
pub fn list_page_files(pages_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(pages_dir).map_err(|source| PagewordsError::ListDir {
        path: pages_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", pages_dir.display(), e);
                continue;
            }
        };
        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => files.push(entry.path()),
            Ok(_) => debug!("Skipping non-file entry {}", entry.path().display()),
            Err(e) => warn!("Skipping {}: {}", entry.path().display(), e),
        }
    }
    files.sort();
    Ok(files)
}

/// Read, parse and classify one page, logging any failure.
fn scan_page(path: &Path, config: &ScanConfig) -> PageOutcome {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) => {
            let err = PagewordsError::ReadPage {
                path: path.to_path_buf(),
                source,
            };
            warn!("Problem with page {}: {}", path.display(), err);
            return PageOutcome::Failed;
        }
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                content = %raw,
                "Problem with page {}: {}",
                path.display(),
                PagewordsError::from(e)
            );
            return PageOutcome::Failed;
        }
    };

    match process_value(&value, config) {
        Ok(Some(tally)) => {
            debug!(
                items = tally.items.len(),
                words = tally.words.len(),
                "Indexed {}",
                path.display()
            );
            PageOutcome::Indexed(tally)
        }
        Ok(None) => {
            debug!("No story in {}", path.display());
            PageOutcome::NoStory
        }
        Err(e) => {
            warn!(content = %value, "Problem with page {}: {}", path.display(), e);
            PageOutcome::Failed
        }
    }
}

/// Decode a parsed page and classify its story, if it has one.
pub fn process_value(value: &Value, config: &ScanConfig) -> Result<Option<Tally>> {
    let page = Page::deserialize(value)?;
    process_page(&page, config)
}

/// Classify a decoded page. Returns `None` for pages without a story.
pub fn process_page(page: &Page, config: &ScanConfig) -> Result<Option<Tally>> {
    match &page.story {
        Some(story) => classify_story(story, &page.display_title(), config).map(Some),
        None => Ok(None),
    }
}
