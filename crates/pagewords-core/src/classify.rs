//! Story item classification.
//!
//! Every item of a story is tallied by its declared type. Text is then
//! extracted only for item kinds that carry prose: rich-text kinds are
//! normalized as-is, captioned media kinds first lose their metadata lines.
//! All other kinds are counted but their text is never indexed.

use std::borrow::Cow;

use serde_json::Value;
use tracing::warn;

use crate::error::{PagewordsError, Result};
use crate::models::{Item, ItemKind, TYPE_MISSING, Tally, TextPolicy};
use crate::normalize::normalize;
use crate::scan::ScanConfig;

/// Classify a whole story into a fresh [`Tally`].
///
/// Fails on the first item that cannot be classified; callers discard the
/// partial result in that case.
pub fn classify_story(story: &[Item], title: &str, config: &ScanConfig) -> Result<Tally> {
    let mut tally = Tally::new();
    for item in story {
        classify_item(item, title, config, &mut tally)?;
    }
    Ok(tally)
}

/// Tally one item's type and, where its kind is indexed, its words.
pub fn classify_item(
    item: &Item,
    title: &str,
    config: &ScanConfig,
    tally: &mut Tally,
) -> Result<()> {
    let Some(kind) = item.type_key() else {
        tally.items.count(TYPE_MISSING);
        return Ok(());
    };
    tally.items.count(&kind);

    let Some(text) = &item.text else {
        return Ok(());
    };

    let source = match ItemKind::from_type(&kind).text_policy() {
        TextPolicy::Unindexed => return Ok(()),
        TextPolicy::Rich => Cow::Borrowed(text_str(item, &kind, text)?),
        TextPolicy::Captioned => Cow::Owned(caption_text(text_str(item, &kind, text)?)),
    };

    for token in normalize(&source) {
        if token.chars().count() > config.long_token_threshold {
            warn!(
                title,
                item_id = %item.display_id(),
                %token,
                "Suspiciously long token"
            );
        }
        tally.words.count(&token);
    }
    Ok(())
}

/// Keep only the caption lines of a media item's text.
///
/// A line is dropped when its first word starts with `http` or `//`, or is
/// entirely uppercase. Surviving lines are joined with a single space.
pub fn caption_text(text: &str) -> String {
    text.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty() && !is_metadata_line(line))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_metadata_line(line: &str) -> bool {
    match line.split_whitespace().next() {
        Some(word) => {
            word.starts_with("http") || word.starts_with("//") || word.chars().all(char::is_uppercase)
        }
        None => false,
    }
}

fn text_str<'a>(item: &Item, kind: &str, text: &'a Value) -> Result<&'a str> {
    text.as_str().ok_or_else(|| {
        PagewordsError::ClassifyError(format!(
            "Item {} of type '{}' has non-string text: {}",
            item.display_id(),
            kind,
            text
        ))
    })
}
