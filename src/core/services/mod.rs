//! Business logic services
//!
//! - [`synthesizer`] - Build the pre-build lint step for a target

pub mod synthesizer;

pub use synthesizer::{SynthesisError, Synthesizer, linted_files, synthesize};
