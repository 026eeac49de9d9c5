//! Stemming and lemmatization of ranked tokens.

use rust_stemmers::{Algorithm, Stemmer};

use crate::lexicon::Lexicon;

/// WordNet's noun detachment rules, applied in order when a word is not in
/// the exception table.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Dictionary-based noun lemmatizer over the WordNet lexicon.
pub struct Lemmatizer {
    lexicon: Lexicon,
}

impl Lemmatizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Lemmatizer { lexicon }
    }

    /// The dictionary form of `word`, treated as a noun.
    ///
    /// Irregular forms come straight from the exception table. Otherwise
    /// every detachment rule proposes a candidate, candidates not in the
    /// noun vocabulary are discarded (the word itself competes when
    /// listed), and the shortest survivor wins. Words the dictionary knows
    /// nothing about pass through unchanged.
    pub fn lemma(&self, word: &str) -> String {
        if let Some(exception) = self.lexicon.exceptions.get(word) {
            return exception.clone();
        }

        let mut candidates: Vec<String> = Vec::new();
        if self.lexicon.nouns.contains(word) {
            candidates.push(word.to_string());
        }
        for (suffix, replacement) in NOUN_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !candidate.is_empty() && self.lexicon.nouns.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }

        candidates
            .into_iter()
            .min_by_key(String::len)
            .unwrap_or_else(|| word.to_string())
    }
}

/// The linguistic models for one run, built once at startup and passed
/// into every transform that needs them.
pub struct Morphology {
    stemmer: Stemmer,
    lemmatizer: Lemmatizer,
}

impl Morphology {
    pub fn new(lexicon: Lexicon) -> Self {
        Morphology {
            stemmer: Stemmer::create(Algorithm::English),
            lemmatizer: Lemmatizer::new(lexicon),
        }
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    pub fn lemma(&self, word: &str) -> String {
        self.lemmatizer.lemma(word)
    }
}

/// Maps ranked tokens to `(stem, lemma)` pairs, counts discarded, order
/// preserved.
pub fn stems_and_lemmas(ranked: &[(String, usize)], morph: &Morphology) -> Vec<(String, String)> {
    ranked
        .iter()
        .map(|(word, _)| (morph.stem(word), morph.lemma(word)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::lexicon::Lexicon;

    fn tiny_lexicon() -> Lexicon {
        Lexicon {
            exceptions: HashMap::from([
                ("mice".to_string(), "mouse".to_string()),
                ("children".to_string(), "child".to_string()),
            ]),
            nouns: HashSet::from(["sword", "pony", "wolf", "ring"].map(String::from)),
        }
    }

    #[test]
    fn exceptions_beat_rules() {
        let lemmatizer = Lemmatizer::new(tiny_lexicon());
        assert_eq!(lemmatizer.lemma("mice"), "mouse");
        assert_eq!(lemmatizer.lemma("children"), "child");
    }

    #[test]
    fn detachment_rules_need_dictionary_support() {
        let lemmatizer = Lemmatizer::new(tiny_lexicon());
        assert_eq!(lemmatizer.lemma("swords"), "sword");
        assert_eq!(lemmatizer.lemma("ponies"), "pony");
        assert_eq!(lemmatizer.lemma("wolves"), "wolf");
    }

    #[test]
    fn unknown_words_pass_through() {
        let lemmatizer = Lemmatizer::new(tiny_lexicon());
        assert_eq!(lemmatizer.lemma("glorfindel"), "glorfindel");
        assert_eq!(lemmatizer.lemma("x9000s"), "x9000s");
    }

    #[test]
    fn listed_word_is_its_own_lemma() {
        let lemmatizer = Lemmatizer::new(tiny_lexicon());
        assert_eq!(lemmatizer.lemma("ring"), "ring");
    }

    #[test]
    fn stems_and_lemmas_preserve_order_and_drop_counts() {
        let morph = Morphology::new(tiny_lexicon());
        let ranked = vec![("swords".to_string(), 9), ("running".to_string(), 4)];
        let mapped = stems_and_lemmas(&ranked, &morph);
        assert_eq!(mapped[0], ("sword".to_string(), "sword".to_string()));
        // Snowball truncates; the noun lemmatizer leaves the verb alone.
        assert_eq!(mapped[1], ("run".to_string(), "running".to_string()));
    }
}
