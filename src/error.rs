use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a report run.
///
/// Decode problems never appear here: input files are read byte-lossy and
/// undecodable sequences are dropped on the spot.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("lexicon download failed: {0}")]
    AssetDownload(#[from] reqwest::Error),

    #[error("lexicon archive is unreadable: {0}")]
    AssetArchive(#[from] zip::result::ZipError),

    #[error("lexicon cache at {path} is unusable: {source}")]
    AssetCache {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot store lexicon at {path}: {source}")]
    AssetStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("comparison target index {0} is out of range")]
    TargetOutOfRange(usize),

    #[error("no candidate files to compare the target against")]
    NoCandidates,
}
