//! Core domain logic for lintstep
//!
//! The synthesizer performs no process spawning and no path search; host
//! interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (InvocationDescriptor, SourceFileSet, InputFile)
//! - `services/` - Pre-build step synthesis
//! - `ports/` - Trait definitions for host collaborators

pub mod models;
pub mod ports;
pub mod services;
