//! Report assembly: the per-file pipeline plus the closing summary and
//! authorship hint.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::authorship;
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::freq::{top_n, top_ngrams};
use crate::morph::{Morphology, stems_and_lemmas};
use crate::ner::count_named_entities;
use crate::table;
use crate::tokenize::tokenize;

const TOP_TOKENS: usize = 20;
const TRIGRAM_WINDOW: usize = 3;
const TRIGRAM_DISPLAY: usize = 10;
const TRIGRAM_COMPARE: usize = 25;
const SUBJECT_WORDS: usize = 3;

/// Reads a file as UTF-8 text, dropping undecodable byte sequences instead
/// of failing.
pub fn load_text(path: &Path) -> Result<String, ReportError> {
    let bytes = fs::read(path).map_err(|source| ReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).replace('\u{FFFD}', ""))
}

/// Comma-joins the first three fully-alphabetic tokens of the ranking, a
/// crude hint at what the sample is about. Mixed or numeric tokens are
/// skipped, not replaced, so the result may hold fewer than three words.
pub fn subject_guess(ranked: &[(String, usize)]) -> String {
    ranked
        .iter()
        .map(|(word, _)| word.as_str())
        .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
        .take(SUBJECT_WORDS)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs the whole pipeline over `config.files` in order and returns the
/// rendered report.
///
/// Per file: load, tokenize, rank the top 20 tokens, map them to stems and
/// lemmas, rank trigrams (10 for display, 25 for the comparison set),
/// optionally count named entities, guess a subject. After the per-file
/// sections come the summary table and one authorship-hint line. The first
/// failing file aborts the run.
pub fn run_report(config: &ReportConfig, morph: &Morphology) -> Result<String, ReportError> {
    let mut out = String::new();
    let mut trigram_sets: Vec<(String, HashSet<String>)> = Vec::new();
    let mut summary: Vec<Vec<String>> = Vec::new();

    for path in &config.files {
        let name = display_name(path);
        debug!("analyzing {name}");
        let raw = load_text(path)?;
        let tokens = tokenize(&raw);
        let top = top_n(&tokens, TOP_TOKENS);
        let trigrams = top_ngrams(&tokens, TRIGRAM_WINDOW, TRIGRAM_DISPLAY);
        let comparison: HashSet<String> = top_ngrams(&tokens, TRIGRAM_WINDOW, TRIGRAM_COMPARE)
            .into_iter()
            .map(|(gram, _)| gram)
            .collect();
        trigram_sets.push((name.clone(), comparison));

        out.push_str(&format!("\n=== {name} ===\n"));
        out.push_str(&table::render(
            Some(&["token", "count"]),
            &pairs_to_rows(&top),
        ));

        out.push_str("\nStem -> Lemma\n");
        let stem_rows: Vec<Vec<String>> = stems_and_lemmas(&top, morph)
            .into_iter()
            .map(|(stem, lemma)| vec![stem, lemma])
            .collect();
        out.push_str(&table::render(None, &stem_rows));

        out.push_str("\nTop 10 trigrams\n");
        out.push_str(&table::render(
            Some(&["trigram", "count"]),
            &pairs_to_rows(&trigrams),
        ));

        let entities = if config.show_ner {
            count_named_entities(&raw).to_string()
        } else {
            "-".to_string()
        };
        summary.push(vec![name, entities, subject_guess(&top)]);
    }

    out.push_str("\n----- SUMMARY -----\n");
    out.push_str(&table::render(
        Some(&["file", "named_entities", "subject_guess"]),
        &summary,
    ));

    let hint = authorship::best_match(&trigram_sets, config.target_index)?;
    out.push_str(&format!(
        "\nAuthorship hint -> {} most resembles {} (shared trigrams = {})\n",
        hint.target, hint.best, hint.shared
    ));
    Ok(out)
}

fn pairs_to_rows(pairs: &[(String, usize)]) -> Vec<Vec<String>> {
    pairs
        .iter()
        .map(|(item, count)| vec![item.clone(), count.to_string()])
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
