//! Data models for the fetch-and-notify pipeline.
//!
//! Everything here is transient and request-scoped: values are produced by
//! one pipeline step, consumed by the next, and dropped when the run ends.
//! There is no persistence and no identity beyond a single invocation.

use crate::utils::{keep_token, tokenize};

/// The text of the three structural sections of an article page.
///
/// Each field holds the raw text of the first element matching that section's
/// marker, or an empty string when the marker is absent. A missing section is
/// never an error; it simply contributes no tokens to the message.
#[derive(Debug, Default, PartialEq)]
pub struct ArticleSections {
    /// Headline text.
    pub title: String,
    /// Lead paragraph text.
    pub lead: String,
    /// Main body text.
    pub body: String,
}

impl ArticleSections {
    /// Compose the outgoing message from the three sections.
    ///
    /// Tokens are taken from the title, then the lead, then the body, in that
    /// order (the order determines message readability and is never changed).
    /// Empty tokens, overlong tokens, and stray braces are filtered out, and
    /// the survivors are joined with single spaces.
    ///
    /// # Returns
    ///
    /// The message text; empty when no token survives filtering.
    pub fn message(&self) -> String {
        let tokens: Vec<&str> = tokenize(&self.title)
            .into_iter()
            .chain(tokenize(&self.lead))
            .chain(tokenize(&self.body))
            .filter(|t| keep_token(t))
            .collect();
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_orders_title_lead_body() {
        let sections = ArticleSections {
            title: "Big News".to_string(),
            lead: "Something happened.".to_string(),
            body: "Full details here.".to_string(),
        };
        assert_eq!(
            sections.message(),
            "Big News Something happened. Full details here."
        );
    }

    #[test]
    fn test_message_all_sections_empty() {
        assert_eq!(ArticleSections::default().message(), "");
    }

    #[test]
    fn test_message_skips_missing_sections() {
        let sections = ArticleSections {
            title: String::new(),
            lead: "Lead only.".to_string(),
            body: String::new(),
        };
        assert_eq!(sections.message(), "Lead only.");
    }

    #[test]
    fn test_message_drops_artifacts_preserving_order() {
        let sections = ArticleSections {
            title: "Headline".to_string(),
            lead: "{ leads with brace".to_string(),
            body: "short aaaaaaaaaaaaaaaaaaaaaaaaa tail".to_string(),
        };
        // the bare brace and the 25-char token vanish, everything else stays put
        assert_eq!(sections.message(), "Headline leads with brace short tail");
    }

    #[test]
    fn test_message_normalizes_whitespace() {
        let sections = ArticleSections {
            title: "\nSpaced\n".to_string(),
            lead: "a   b".to_string(),
            body: "c\nd".to_string(),
        };
        assert_eq!(sections.message(), "Spaced a b c d");
    }
}
