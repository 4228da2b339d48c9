//! Hardwood: cleaning and descriptive statistics for NBA stat tables.
//!
//! Hardwood takes the raw CSV exports of six NBA datasets (teams, players,
//! career rows, advanced team stats, standings), cleans them against fixed
//! per-dataset schema rules, and computes descriptive statistics and Pearson
//! correlation matrices over the cleaned tables.
//!
//! # Core Principles
//!
//! - **Explicit schemas**: every dataset has an enumerated column list with
//!   declared roles; nothing is inferred at access time
//! - **Non-destructive by default**: row-level problems are imputed or
//!   reported, and only unusable rows (missing identifiers, duplicates,
//!   outlier bounds) are dropped — always with a count and a reason
//! - **Full accounting**: every row-count and missing-value transition is
//!   captured in the cleaning report
//!
//! # Example
//!
//! ```no_run
//! use hardwood::{Cleaner, DatasetKind, stats};
//!
//! let cleaner = Cleaner::new();
//! let outcome = cleaner
//!     .clean_file("ACTIVE_PLAYERS.csv", DatasetKind::ActivePlayers)
//!     .unwrap();
//!
//! println!("{}", outcome.report);
//!
//! let summaries = stats::summarize(&outcome.dataset, &["height", "weight"]).unwrap();
//! println!("median height: {}", summaries["height"].median);
//! ```

pub mod clean;
pub mod dataset;
pub mod error;
pub mod input;
pub mod schema;
pub mod stats;

mod pipeline;

pub use clean::{CleaningReport, ValidationMismatch};
pub use dataset::{Dataset, Value};
pub use error::{HardwoodError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use pipeline::{CleanOutcome, Cleaner};
pub use schema::{ColumnRole, ColumnRule, DatasetKind, DatasetRules};
pub use stats::{correlate, summarize, CorrelationMatrix, StatSummary};
