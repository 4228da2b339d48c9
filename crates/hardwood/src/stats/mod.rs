//! Descriptive statistics and correlation over cleaned datasets.
//!
//! Both operations are pure functions over an already-cleaned [`Dataset`]:
//! they exclude absent values from every aggregate and never mutate their
//! input.
//!
//! [`Dataset`]: crate::dataset::Dataset

mod correlate;
mod descriptive;

pub use correlate::{correlate, pearson, CorrelationMatrix};
pub use descriptive::{quantile, summarize, summarize_values, StatSummary};
