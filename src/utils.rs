//! Token normalization and filtering for message composition.
//!
//! Article text scraped from HTML arrives with newlines, stray whitespace,
//! and the occasional parsing artifact (concatenated URLs, template fragments
//! leaking out of malformed markup). These helpers turn raw section text into
//! the clean token stream the outgoing message is built from.

/// Tokens at or above this many characters are treated as parsing artifacts
/// (usually concatenated URLs or unbroken markup spans) and dropped.
pub const MAX_TOKEN_CHARS: usize = 20;

/// Split raw section text into whitespace-delimited tokens.
///
/// Newlines at the edges are stripped first; interior newlines act as token
/// separators like any other whitespace.
///
/// # Arguments
///
/// * `text` - Raw text extracted from an HTML element
///
/// # Returns
///
/// The tokens in their original order. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.trim_matches('\n').split_whitespace().collect()
}

/// Decide whether a token survives into the outgoing message.
///
/// A token is kept when it is non-empty, shorter than [`MAX_TOKEN_CHARS`]
/// characters, and not a bare `{` or `}` (template and script fragments leak
/// through malformed article markup as stray braces).
///
/// The predicate is idempotent over a token stream: re-filtering an
/// already-filtered sequence changes nothing.
pub fn keep_token(token: &str) -> bool {
    !token.is_empty() && token.chars().count() < MAX_TOKEN_CHARS && token != "{" && token != "}"
}
