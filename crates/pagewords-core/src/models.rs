//! Core data types for pagewords.
//!
//! - [`Page`] - One parsed page document
//! - [`Item`] - One entry of a page's story
//! - [`ItemKind`] - The recognised item types
//! - [`TextPolicy`] - How an item kind's text is indexed
//! - [`Tally`] - The item-type and word counters built by a scan

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

use crate::counter::Counter;

/// Item-type key used for story items that carry no `type`.
pub const TYPE_MISSING: &str = "type missing";

/// A page document. Unknown fields are ignored.
///
/// `title` and an item's `type` are kept as raw JSON: a page with a numeric
/// title or type is still indexed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub story: Option<Vec<Item>>,
}

/// One element of a page's story.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
}

/// Item types, as declared by the `type` field of a story item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Paragraph,
    Markdown,
    Html,
    Reference,
    Image,
    Pagefold,
    Math,
    Mathjax,
    Audio,
    Video,
    Frame,
    /// Any type not listed above.
    Other,
}

/// How the text of an item is fed into the word counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPolicy {
    /// Normalize the whole text.
    Rich,
    /// Drop metadata lines, then normalize the remaining caption.
    Captioned,
    /// Do not index the text.
    Unindexed,
}

impl ItemKind {
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "paragraph" => ItemKind::Paragraph,
            "markdown" => ItemKind::Markdown,
            "html" => ItemKind::Html,
            "reference" => ItemKind::Reference,
            "image" => ItemKind::Image,
            "pagefold" => ItemKind::Pagefold,
            "math" => ItemKind::Math,
            "mathjax" => ItemKind::Mathjax,
            "audio" => ItemKind::Audio,
            "video" => ItemKind::Video,
            "frame" => ItemKind::Frame,
            _ => ItemKind::Other,
        }
    }

    pub fn text_policy(self) -> TextPolicy {
        match self {
            ItemKind::Paragraph
            | ItemKind::Markdown
            | ItemKind::Html
            | ItemKind::Reference
            | ItemKind::Image
            | ItemKind::Pagefold
            | ItemKind::Math
            | ItemKind::Mathjax => TextPolicy::Rich,
            ItemKind::Audio | ItemKind::Video | ItemKind::Frame => TextPolicy::Captioned,
            ItemKind::Other => TextPolicy::Unindexed,
        }
    }
}

impl Page {
    /// Page title rendered for diagnostics.
    pub fn display_title(&self) -> String {
        display_value(self.title.as_ref(), "(untitled)")
    }
}

impl Item {
    /// Key this item is tallied under in the item-type counter.
    ///
    /// A string type is used as-is, any other JSON value by its rendering.
    /// `None` when the item has no type (absent or `null`).
    pub fn type_key(&self) -> Option<Cow<'_, str>> {
        match &self.kind {
            Some(Value::String(kind)) => Some(Cow::Borrowed(kind.as_str())),
            Some(other) => Some(Cow::Owned(other.to_string())),
            None => None,
        }
    }

    /// Item id rendered for diagnostics.
    pub fn display_id(&self) -> String {
        display_value(self.id.as_ref(), "(no id)")
    }
}

fn display_value(value: Option<&Value>, absent: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => absent.to_string(),
    }
}

/// Item-type and word counts accumulated over one or more pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub items: Counter,
    pub words: Counter,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: Tally) {
        self.items.merge(other.items);
        self.words.merge(other.words);
    }
}
