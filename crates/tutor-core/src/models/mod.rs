//! Data models for tutorials and their steps.
//!
//! A tutorial is not stored as a value of its own. It is a *run*: a chain of
//! [`StepRecord`]s inside one flat collection, connected through the `next`
//! and `prev` slug references. The models here only describe the records; the
//! operations that keep the chains consistent live in [`crate::links`].
//!
//! Display implementations are located in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use tutor_core::models::{StepRecord, TutorialMeta};
//!
//! let meta = TutorialMeta {
//!     name: "Blinky".to_string(),
//!     author: "Ada".to_string(),
//!     icon: "image-blinky".to_string(),
//! };
//! let step = StepRecord::new("blinky-1", &meta, "Wire it up", "Plug in the LED");
//! assert!(step.is_run_head());
//! assert!(!step.has_next());
//! println!("{}", step);
//! ```

pub mod meta;
pub mod platform;
pub mod step;
pub mod summary;

#[cfg(test)]
mod tests;

pub use meta::{normalize_name, slugify, TutorialMeta, UNSET};
pub use platform::Platform;
pub use step::StepRecord;
pub use summary::RunSummary;
