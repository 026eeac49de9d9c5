/// Splits raw text into lowercase word tokens.
///
/// Lowercases the whole input, turns every character that is neither a word
/// character nor whitespace into a single space, and splits on whitespace.
/// Punctuation therefore never glues two words together and never survives
/// as a token of its own.
///
/// # Example
/// ```
/// use stylometry::tokenize::tokenize;
/// assert_eq!(tokenize("Hello, world!"), vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    scrub(&text.to_lowercase())
}

/// Same scrubbing as [`tokenize`] but keeps the original casing, so the
/// entity counter can still see capitalization.
pub fn tokenize_preserving_case(text: &str) -> Vec<String> {
    scrub(text)
}

fn scrub(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, world!"), vec!["hello", "world"]);
    }

    #[test]
    fn punctuation_never_glues_words() {
        assert_eq!(tokenize("end.Start"), vec!["end", "start"]);
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
        assert!(tokenize("?!...").is_empty());
    }

    #[test]
    fn deterministic_across_calls() {
        let text = "The quick brown fox; the quick brown fox.";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn preserving_variant_keeps_case() {
        assert_eq!(
            tokenize_preserving_case("Frodo Baggins walked."),
            vec!["Frodo", "Baggins", "walked"]
        );
    }
}
