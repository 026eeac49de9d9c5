//! # stylometry
//!
//! Batch report generator for a small corpus of plaintext author samples.
//! For every sample it prints the 20 most frequent tokens, their stems and
//! lemmas, and the most frequent trigrams; a summary table and a
//! trigram-overlap authorship hint close the report.
//!
//! The library does all the work; the binary is a thin CLI wrapper. A
//! typical embedding looks like:
//!
//! ```no_run
//! use stylometry::{Morphology, ReportConfig, ensure_lexicon, lexicon_dir, run_report};
//!
//! # fn main() -> Result<(), stylometry::ReportError> {
//! let lexicon = ensure_lexicon(&lexicon_dir())?;
//! let morph = Morphology::new(lexicon);
//! let report = run_report(&ReportConfig::default(), &morph)?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod authorship;
pub mod config;
pub mod error;
pub mod freq;
pub mod lexicon;
pub mod morph;
pub mod ner;
pub mod report;
pub mod table;
pub mod tokenize;

pub use authorship::{AuthorshipHint, best_match};
pub use config::ReportConfig;
pub use error::ReportError;
pub use freq::{count_tokens, top_n, top_ngrams};
pub use lexicon::{Lexicon, data_dir as lexicon_dir, ensure_lexicon};
pub use morph::{Lemmatizer, Morphology, stems_and_lemmas};
pub use ner::count_named_entities;
pub use report::{run_report, subject_guess};
pub use tokenize::tokenize;
