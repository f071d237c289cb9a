//! Report generation.
//!
//! Four line-oriented views over a finished [`Tally`]:
//! - `items.txt` - `count<TAB>type`, most frequent first
//! - `words.txt` - every word, alphabetical
//! - `length.txt` - `length<TAB>word`, longest first
//! - `frequency.txt` - `count<TAB>word`, most frequent first
//!
//! Ties in the two frequency reports are broken alphabetically. Ties in the
//! length report compare only the first character.
//!
//! "Alphabetical" means `str` ordering, i.e. by Unicode scalar value. This
//! differs from UTF-16 code unit order only for some characters beyond the
//! Basic Multilingual Plane.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::counter::Counter;
use crate::error::{PagewordsError, Result};
use crate::models::Tally;

/// The reports produced for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Items,
    Words,
    Length,
    Frequency,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Items,
        ReportKind::Words,
        ReportKind::Length,
        ReportKind::Frequency,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Items => "items.txt",
            ReportKind::Words => "words.txt",
            ReportKind::Length => "length.txt",
            ReportKind::Frequency => "frequency.txt",
        }
    }

    /// Render this report for `tally`. Every line ends with `\n`.
    pub fn render(self, tally: &Tally) -> String {
        let mut out = String::new();
        match self {
            ReportKind::Items => {
                for (key, count) in by_frequency(&tally.items) {
                    out.push_str(&format!("{count}\t{key}\n"));
                }
            }
            ReportKind::Words => {
                for word in alphabetical(&tally.words) {
                    out.push_str(word);
                    out.push('\n');
                }
            }
            ReportKind::Length => {
                for word in by_length(&tally.words) {
                    out.push_str(&format!("{}\t{}\n", char_len(word), word));
                }
            }
            ReportKind::Frequency => {
                for (key, count) in by_frequency(&tally.words) {
                    out.push_str(&format!("{count}\t{key}\n"));
                }
            }
        }
        out
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Write all four reports into `out_dir`, overwriting existing files.
///
/// Returns the written paths in [`ReportKind::ALL`] order.
pub fn write_reports(tally: &Tally, out_dir: &Path) -> Result<Vec<PathBuf>> {
    ReportKind::ALL
        .iter()
        .map(|kind| {
            let path = out_dir.join(kind.file_name());
            fs::write(&path, kind.render(tally)).map_err(|source| PagewordsError::WriteReport {
                path: path.clone(),
                source,
            })?;
            debug!("Wrote {}", path.display());
            Ok(path)
        })
        .collect()
}

/// Entries sorted by count descending, then key ascending.
pub fn by_frequency(counter: &Counter) -> Vec<(&str, usize)> {
    let mut rows: Vec<(&str, usize)> = counter.iter().map(|(k, n)| (k.as_str(), *n)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}

/// Keys sorted ascending.
pub fn alphabetical(counter: &Counter) -> Vec<&str> {
    let mut keys: Vec<&str> = counter.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

/// Keys sorted by [`longest_first_then_initial`].
///
/// The sort is stable and starts from the alphabetical list, so words that
/// compare equal keep alphabetical order.
pub fn by_length(counter: &Counter) -> Vec<&str> {
    let mut keys = alphabetical(counter);
    keys.sort_by(|a, b| longest_first_then_initial(a, b));
    keys
}

/// Character length descending, then first character ascending.
pub fn longest_first_then_initial(a: &str, b: &str) -> Ordering {
    char_len(b)
        .cmp(&char_len(a))
        .then_with(|| a.chars().next().cmp(&b.chars().next()))
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(items: &[(&str, usize)], words: &[(&str, usize)]) -> Tally {
        let mut tally = Tally::new();
        for (key, n) in items {
            tally.items.add(key, *n);
        }
        for (key, n) in words {
            tally.words.add(key, *n);
        }
        tally
    }

    #[test]
    fn frequency_ties_break_alphabetically() {
        let t = tally(&[], &[("b", 2), ("a", 2), ("c", 1)]);
        assert_eq!(ReportKind::Frequency.render(&t), "2\ta\n2\tb\n1\tc\n");
    }

    #[test]
    fn items_report_orders_by_count() {
        let t = tally(
            &[("paragraph", 10), ("type missing", 1), ("image", 3), ("html", 3)],
            &[],
        );
        assert_eq!(
            ReportKind::Items.render(&t),
            "10\tparagraph\n3\thtml\n3\timage\n1\ttype missing\n"
        );
    }

    #[test]
    fn words_report_is_alphabetical() {
        let t = tally(&[], &[("pear", 1), ("apple", 5), ("fig", 2)]);
        assert_eq!(ReportKind::Words.render(&t), "apple\nfig\npear\n");
    }

    #[test]
    fn keys_order_by_scalar_value() {
        // U+FF21 sorts before U+10400 here; UTF-16 code units would flip them.
        let t = tally(&[], &[("\u{10400}", 1), ("\u{ff21}", 1)]);
        assert_eq!(ReportKind::Words.render(&t), "\u{ff21}\n\u{10400}\n");
    }

    #[test]
    fn length_report_longest_first() {
        let t = tally(&[], &[("bb", 1), ("a", 1), ("ccc", 1), ("ab", 1)]);
        assert_eq!(ReportKind::Length.render(&t), "3\tccc\n2\tab\n2\tbb\n1\ta\n");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let t = tally(&[], &[("über", 1), ("abcde", 1)]);
        assert_eq!(ReportKind::Length.render(&t), "5\tabcde\n4\tüber\n");
    }

    #[test]
    fn length_tie_break_uses_first_character_only() {
        assert_eq!(longest_first_then_initial("ab", "aa"), Ordering::Equal);
        assert_eq!(longest_first_then_initial("ba", "az"), Ordering::Greater);
        assert_eq!(longest_first_then_initial("a", "zz"), Ordering::Greater);
    }

    #[test]
    fn empty_tally_renders_empty_reports() {
        let t = Tally::new();
        for kind in ReportKind::ALL {
            assert_eq!(kind.render(&t), "");
        }
    }

    #[test]
    fn write_reports_creates_all_files() {
        let dir = std::env::temp_dir().join(format!("pagewords-report-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let t = tally(&[("paragraph", 1)], &[("word", 1)]);

        let paths = write_reports(&t, &dir).unwrap();

        assert_eq!(paths.len(), 4);
        assert_eq!(fs::read_to_string(dir.join("items.txt")).unwrap(), "1\tparagraph\n");
        assert_eq!(fs::read_to_string(dir.join("words.txt")).unwrap(), "word\n");
        assert_eq!(fs::read_to_string(dir.join("length.txt")).unwrap(), "4\tword\n");
        assert_eq!(fs::read_to_string(dir.join("frequency.txt")).unwrap(), "1\tword\n");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn write_reports_to_missing_dir_fails() {
        let dir = std::env::temp_dir().join("pagewords-report-missing").join("deeper");
        let result = write_reports(&Tally::new(), &dir);
        assert!(matches!(result, Err(PagewordsError::WriteReport { .. })));
    }
}
