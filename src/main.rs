#![forbid(unsafe_code)]
//! # Stylometry CLI
//!
//! Prints token-frequency, stem/lemma, and trigram tables for a fixed set
//! of author samples, then guesses which sample the target text most
//! resembles by trigram overlap.
//!
//! ## Example
//! ```bash
//! cargo run --release               # core report
//! cargo run --release -- --show-ner # include named-entity counts
//! ```
//!
//! The first run downloads the WordNet lexicon into a local data
//! directory; later runs reuse the cache.

use std::process;

use clap::Parser;
use log::error;

use stylometry::{Morphology, ReportConfig, ensure_lexicon, lexicon_dir, run_report};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Include named-entity counts in the summary (slow)
    #[arg(long, default_value_t = false)]
    show_ner: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = ReportConfig {
        show_ner: cli.show_ner,
        ..ReportConfig::default()
    };

    let outcome = ensure_lexicon(&lexicon_dir())
        .map(Morphology::new)
        .and_then(|morph| run_report(&config, &morph));

    match outcome {
        Ok(report) => print!("{report}"),
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    }
}
