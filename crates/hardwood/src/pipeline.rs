//! End-to-end cleaning pipeline: parse, ingest, clean.

use std::path::{Path, PathBuf};

use crate::clean::{clean, CleaningReport};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::schema::DatasetKind;

/// Everything one cleaning run produces.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// Provenance of the raw file.
    pub source: SourceMetadata,
    /// The cleaned dataset.
    pub dataset: Dataset,
    /// What happened on the way there.
    pub report: CleaningReport,
}

impl CleanOutcome {
    /// Conventional output path: `<stem>_CLEANED.csv` next to the input.
    pub fn cleaned_path(&self) -> PathBuf {
        self.sibling_path("_CLEANED.csv")
    }

    /// Conventional report path: `<stem>_REPORT.json` next to the input.
    pub fn report_path(&self) -> PathBuf {
        self.sibling_path("_REPORT.json")
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let stem = self
            .source
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());
        self.source.path.with_file_name(format!("{}{}", stem, suffix))
    }
}

/// Runs the full raw-file-to-cleaned-dataset pipeline.
///
/// Each invocation owns its tables end to end; there is no shared state
/// between datasets, so callers may clean several files in any order.
pub struct Cleaner {
    parser: Parser,
}

impl Cleaner {
    /// Create a cleaner with default parser configuration.
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Create a cleaner with custom parser configuration.
    pub fn with_parser_config(config: ParserConfig) -> Self {
        Self {
            parser: Parser::with_config(config),
        }
    }

    /// Parse a raw file, ingest it against the dataset's schema rules, and
    /// clean it.
    pub fn clean_file(&self, path: impl AsRef<Path>, kind: DatasetKind) -> Result<CleanOutcome> {
        let rules = kind.rules();
        let (table, source) = self.parser.parse_file(path)?;
        let raw = Dataset::from_table(&table, &rules)?;
        let (dataset, report) = clean(raw, &rules);

        Ok(CleanOutcome {
            source,
            dataset,
            report,
        })
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}
