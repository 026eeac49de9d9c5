use std::path::PathBuf;

/// Everything the report driver needs to know about one run.
///
/// The file list and the comparison target are configuration, not logic:
/// renaming a sample file only ever means touching this struct.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Plaintext samples, processed and reported in this order.
    pub files: Vec<PathBuf>,
    /// Include named-entity counts in the summary (slowest step, off by default).
    pub show_ner: bool,
    /// Index into `files` of the sample whose authorship is being guessed.
    pub target_index: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            files: vec![
                PathBuf::from("texts/Martin.txt"),
                PathBuf::from("texts/RJ_Lovecraft.txt"),
                PathBuf::from("texts/RJ_Martin.txt"),
                PathBuf::from("texts/RJ_Tolkein.txt"),
            ],
            show_ner: false,
            target_index: 3,
        }
    }
}
