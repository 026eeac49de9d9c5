use std::collections::HashMap;

/// Counts every token in the sequence. The counts always sum to the length
/// of the input.
pub fn count_tokens(tokens: &[String]) -> HashMap<String, usize> {
    let mut frequency: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *frequency.entry(token.clone()).or_insert(0) += 1;
    }
    frequency
}

/// The `n` most frequent tokens with their counts, descending. Tokens with
/// equal counts keep the order in which they first appeared in the input,
/// so the ranking is fully deterministic.
pub fn top_n(tokens: &[String], n: usize) -> Vec<(String, usize)> {
    rank(tokens.iter().cloned(), n)
}

/// The `k` most frequent contiguous `size`-token windows, each rendered as
/// one space-joined string. Same ordering rules as [`top_n`]. A sequence
/// shorter than `size` has no windows.
pub fn top_ngrams(tokens: &[String], size: usize, k: usize) -> Vec<(String, usize)> {
    rank(tokens.windows(size).map(|w| w.join(" ")), k)
}

fn rank<I>(items: I, limit: usize) -> Vec<(String, usize)>
where
    I: Iterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for item in items {
        let count = counts.entry(item.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(item);
        }
        *count += 1;
    }

    // Stable sort over first-seen order: ties keep their first appearance.
    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|item| {
            let count = counts[&item];
            (item, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn counts_sum_to_sequence_length() {
        let tokens = toks("a b a c b a");
        let table = count_tokens(&tokens);
        assert_eq!(table.values().sum::<usize>(), tokens.len());
        assert_eq!(table["a"], 3);
    }

    #[test]
    fn most_frequent_token_ranks_first() {
        let tokens = toks("a b a");
        assert_eq!(top_n(&tokens, 20)[0], ("a".to_string(), 2));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let tokens = toks("b a b a c");
        let ranked = top_n(&tokens, 20);
        assert_eq!(
            ranked,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_n_never_exceeds_limit_or_distinct_count() {
        let tokens = toks("a b c a");
        assert_eq!(top_n(&tokens, 2).len(), 2);
        assert_eq!(top_n(&tokens, 20).len(), 3);
        assert!(top_n(&[], 20).is_empty());
    }

    #[test]
    fn trigrams_join_with_spaces_and_rank() {
        let tokens = toks("the old hall the old hall again");
        let grams = top_ngrams(&tokens, 3, 10);
        assert_eq!(grams[0], ("the old hall".to_string(), 2));
        // L tokens yield at most L-2 distinct trigrams
        assert!(grams.len() <= tokens.len() - 2);
    }

    #[test]
    fn short_sequences_have_no_trigrams() {
        assert!(top_ngrams(&toks("one two"), 3, 10).is_empty());
        assert!(top_ngrams(&[], 3, 10).is_empty());
    }
}
