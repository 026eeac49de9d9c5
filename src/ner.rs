//! Named-entity counting.
//!
//! A rule-based stand-in for a full tagger/chunker pipeline: sentences are
//! split on terminal punctuation, tokens are tagged by capitalization
//! shape, and each maximal run of proper-noun tokens is one entity span.
//! A two-token name therefore counts once, not twice. All-uppercase tokens
//! are treated as acronym noise and function words never open a span.

use crate::tokenize::tokenize_preserving_case;

/// Words that are capitalized only because they start a sentence.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "did", "do", "does", "for",
    "from", "had", "has", "have", "he", "her", "his", "how", "i", "if", "in", "is", "it", "its",
    "my", "no", "nor", "not", "of", "on", "or", "our", "she", "so", "that", "the", "their",
    "then", "there", "these", "they", "this", "those", "to", "was", "we", "were", "what", "when",
    "where", "which", "who", "why", "with", "yet", "you", "your",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    /// Function word, regardless of casing.
    Function,
    /// All-uppercase token longer than one char.
    Acronym,
    /// Capitalized word token.
    Proper,
    Other,
}

fn tag(token: &str) -> Tag {
    if FUNCTION_WORDS.contains(&token.to_lowercase().as_str()) {
        return Tag::Function;
    }
    let mut chars = token.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Tag::Other,
    };
    if !first.is_uppercase() {
        return Tag::Other;
    }
    if token.chars().count() > 1 && token.chars().all(|c| !c.is_lowercase()) {
        return Tag::Acronym;
    }
    Tag::Proper
}

/// Counts named-entity spans in `text`.
///
/// Each sentence is tokenized with casing intact; consecutive
/// [`Tag::Proper`] tokens form one span and the sentence boundary always
/// closes an open span.
pub fn count_named_entities(text: &str) -> usize {
    let mut spans = 0;
    for sentence in text.split(['.', '!', '?']) {
        let mut in_span = false;
        for token in tokenize_preserving_case(sentence) {
            let proper = tag(&token) == Tag::Proper;
            if proper && !in_span {
                spans += 1;
            }
            in_span = proper;
        }
    }
    spans
}
