//! # knitwork-batch
//!
//! Sequential batch rendering. Call [`pipeline::run`] with a resolved
//! renderer and an [`InputList`](knitwork_core::InputList); read the verdict
//! from [`BatchReport::succeeded`].

pub mod pipeline;
pub mod report;

pub use pipeline::{BatchEvent, BatchOptions};
pub use report::{BatchReport, FileOutcome};
