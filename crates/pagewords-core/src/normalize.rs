//! Text normalization.
//!
//! Turns a markup-laden story text into a sequence of lowercase word tokens.
//! The pipeline is a fixed series of regex substitutions over the whole
//! string:
//!
//! 1. unwrap `[[wiki links]]` and `[single]` bracket markers
//! 2. drop `<style>` blocks with their content
//! 3. drop HTML-like tags (quote-aware pass, then a catch-all pass)
//! 4. collapse markdown links `[text](url)` / `[text][ref]` to `text`
//! 5. drop bare `http`/`https` URLs
//! 6. drop punctuation, symbols and emoji
//! 7. collapse whitespace
//!
//! and finally splits on whitespace and lowercases.
//!
//! Markup stripping here is a heuristic, not a parser. Deeply nested or
//! malformed HTML can leave fragments behind, and a bare `<` in prose can
//! swallow text up to the next `>`. Output on messy real-world pages depends
//! on exactly these patterns, so they should not be swapped for a strict
//! parser.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static WIKI_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[|\]\]").unwrap());
// A `[marker]` directly followed by `(` or `[` is a markdown link, left for a later pass.
static SINGLE_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]\s][^\[\]]*)\]([(\[]?)").unwrap());
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());
static QUOTED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:"[^"]*"['"]*|'[^']*'['"]*|[^'">])+>"#).unwrap()
});
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\](?:\([^)]*\)|\[[^\]]*\])").unwrap()
});
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S*").unwrap());
static SYMBOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{P}\p{S}\p{Extended_Pictographic}\x{200D}\x{FE0F}]").unwrap()
});
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize `text` into lowercase word tokens.
///
/// # Examples
///
/// ```
/// use pagewords_core::normalize::normalize;
///
/// let tokens = normalize("[[Hello World]] is [here](http://x.com/y) and <b>bold</b>");
/// assert_eq!(tokens, ["hello", "world", "is", "here", "and", "bold"]);
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    tokenize(&strip_markup(text))
}

/// Run every substitution step, returning the cleaned, space-separated text.
pub fn strip_markup(text: &str) -> String {
    let unwrapped = unwrap_brackets(text);
    let no_style = STYLE_BLOCK.replace_all(&unwrapped, " ");
    let no_tags = strip_tags(&no_style);
    let no_links = MARKDOWN_LINK.replace_all(&no_tags, "$1");
    let no_urls = BARE_URL.replace_all(&no_links, " ");
    let no_symbols = SYMBOLS.replace_all(&no_urls, " ");
    WHITESPACE.replace_all(&no_symbols, " ").trim().to_string()
}

/// Split cleaned text on whitespace and lowercase each token.
pub fn tokenize(cleaned: &str) -> Vec<String> {
    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| !token.is_empty())
        .collect()
}

fn unwrap_brackets(text: &str) -> String {
    let no_wiki = WIKI_MARKERS.replace_all(text, "");
    SINGLE_BRACKET
        .replace_all(&no_wiki, |caps: &Captures| {
            if caps[2].is_empty() {
                caps[1].to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn strip_tags(text: &str) -> String {
    let quoted = QUOTED_TAG.replace_all(text, " ");
    ANY_TAG.replace_all(&quoted, " ").into_owned()
}
