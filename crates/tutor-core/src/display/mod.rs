//! Markdown formatting for domain models and operation results.
//!
//! Domain models implement `Display` directly; collections and operation
//! outcomes go through newtype wrappers so that the empty case and the
//! confirmation line are formatted in one place.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers for    │    │    Markdown     │
//! │ (StepRecord,    │───▶│ collections and │───▶│     output      │
//! │  RunSummary)    │    │ results         │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (RunSummaries, Steps, LinkReport)
//! - [`results`]: Operation results (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{LinkReport, RunSummaries, Steps};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
