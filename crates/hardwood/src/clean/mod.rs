//! The cleaning engine and its report.

mod engine;
mod report;

pub use engine::clean;
pub use report::{CleaningReport, ValidationMismatch};
