//! WordNet-backed lemma lexicon, fetched once on first run.
//!
//! The lemmatizer needs the WordNet noun vocabulary and its irregular-form
//! table. Both live in the NLTK WordNet archive; the first run downloads
//! it, distills the two files into a compact `lexicon.json` in a platform
//! data directory, and every later run loads the cache and skips the
//! network entirely.

use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use zip::ZipArchive;

use crate::error::ReportError;

/// NLTK's WordNet corpus archive.
const WORDNET_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/wordnet.zip";

/// Irregular noun forms, e.g. `mice -> mouse`.
const NOUN_EXCEPTIONS: &str = "wordnet/noun.exc";

/// The noun vocabulary index.
const NOUN_INDEX: &str = "wordnet/index.noun";

const CACHE_FILE: &str = "lexicon.json";

/// The lemmatizer's lexical resource: irregular inflections plus the set
/// of dictionary nouns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    pub exceptions: HashMap<String, String>,
    pub nouns: HashSet<String>,
}

/// Directory the lexicon cache lives in.
///
/// `STYLOMETRY_DATA_DIR` overrides the platform default
/// (~/.local/share/stylometry on Linux).
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("STYLOMETRY_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stylometry")
}

/// Path of the cached lexicon inside `dir`.
pub fn lexicon_path(dir: &Path) -> PathBuf {
    dir.join(CACHE_FILE)
}

/// Whether the cached lexicon already exists.
pub fn lexicon_present(dir: &Path) -> bool {
    lexicon_path(dir).exists()
}

/// Loads the cached lexicon, downloading and distilling the WordNet
/// archive first if the cache is missing. Idempotent; any failure here is
/// fatal to the run.
pub fn ensure_lexicon(dir: &Path) -> Result<Lexicon, ReportError> {
    let cache = lexicon_path(dir);
    if cache.exists() {
        debug!("lexicon cache found at {}", cache.display());
        let text = fs::read_to_string(&cache).map_err(|source| ReportError::AssetStore {
            path: cache.clone(),
            source,
        })?;
        return serde_json::from_str(&text)
            .map_err(|source| ReportError::AssetCache { path: cache, source });
    }

    fs::create_dir_all(dir).map_err(|source| ReportError::AssetStore {
        path: dir.to_path_buf(),
        source,
    })?;

    info!("first run: downloading WordNet lexicon");
    let archive = fetch_wordnet()?;
    let lexicon = parse_wordnet_zip(&archive)?;

    let json = serde_json::to_string(&lexicon).map_err(|source| ReportError::AssetCache {
        path: cache.clone(),
        source,
    })?;
    fs::write(&cache, json).map_err(|source| ReportError::AssetStore {
        path: cache.clone(),
        source,
    })?;
    info!(
        "lexicon cached at {} ({} nouns, {} exceptions)",
        cache.display(),
        lexicon.nouns.len(),
        lexicon.exceptions.len()
    );
    Ok(lexicon)
}

fn fetch_wordnet() -> Result<Vec<u8>, ReportError> {
    let response = reqwest::blocking::get(WORDNET_URL)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

fn parse_wordnet_zip(bytes: &[u8]) -> Result<Lexicon, ReportError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let exceptions = parse_exceptions(&read_member(&mut archive, NOUN_EXCEPTIONS)?);
    let nouns = parse_index(&read_member(&mut archive, NOUN_INDEX)?);
    Ok(Lexicon { exceptions, nouns })
}

fn read_member(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<String, ReportError> {
    let mut member = archive.by_name(name)?;
    let mut text = String::new();
    member
        .read_to_string(&mut text)
        .map_err(zip::result::ZipError::from)?;
    Ok(text)
}

/// `noun.exc` lines are `inflected lemma [lemma...]`; the first lemma wins.
fn parse_exceptions(text: &str) -> HashMap<String, String> {
    let mut exceptions = HashMap::new();
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        if let (Some(inflected), Some(lemma)) = (fields.next(), fields.next()) {
            exceptions.insert(inflected.to_string(), lemma.to_string());
        }
    }
    exceptions
}

/// `index.noun` starts each entry line with the lemma. License-header lines
/// are indented; collocations (with `_`) can never match a single token.
fn parse_index(text: &str) -> HashSet<String> {
    let mut nouns = HashSet::new();
    for line in text.lines() {
        if line.starts_with(' ') {
            continue;
        }
        if let Some(lemma) = line.split_whitespace().next() {
            if !lemma.contains('_') {
                nouns.insert(lemma.to_string());
            }
        }
    }
    nouns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceptions_keep_first_lemma() {
        let parsed = parse_exceptions("mice mouse\nlives life living\n");
        assert_eq!(parsed["mice"], "mouse");
        assert_eq!(parsed["lives"], "life");
    }

    #[test]
    fn index_skips_header_and_collocations() {
        let text = "  1 This software and database is licensed\nhobbit n 1 ...\nattorney_general n 1 ...\n";
        let nouns = parse_index(text);
        assert!(nouns.contains("hobbit"));
        assert!(!nouns.contains("attorney_general"));
        assert_eq!(nouns.len(), 1);
    }

    #[test]
    fn env_override_wins_over_platform_dir() {
        // Not run in parallel with anything env-sensitive; the var is
        // cleaned up before the test ends.
        unsafe { env::set_var("STYLOMETRY_DATA_DIR", "/tmp/stylometry-test-data") };
        assert_eq!(data_dir(), PathBuf::from("/tmp/stylometry-test-data"));
        unsafe { env::remove_var("STYLOMETRY_DATA_DIR") };
    }

    #[test]
    fn lexicon_present_false_when_missing() {
        let dir = std::env::temp_dir().join("stylometry-test-nonexistent");
        assert!(!lexicon_present(&dir));
    }

    #[test]
    fn lexicon_roundtrips_through_json() {
        let lexicon = Lexicon {
            exceptions: HashMap::from([("mice".to_string(), "mouse".to_string())]),
            nouns: HashSet::from(["mouse".to_string()]),
        };
        let json = serde_json::to_string(&lexicon).unwrap();
        let back: Lexicon = serde_json::from_str(&json).unwrap();
        assert_eq!(back.exceptions["mice"], "mouse");
        assert!(back.nouns.contains("mouse"));
    }
}
