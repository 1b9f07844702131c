//! Command implementations

mod plan;
mod run;
mod setup;

pub use plan::plan;
pub use run::run;
