//! Port traits (interfaces) for host collaborators
//!
//! These traits define the boundaries between the synthesizer and the host
//! build system: how a target lists its sources and how a tool name becomes
//! an executable path.
//!
//! Implementations live in the `adapters` module.

mod source_enumerator;
mod tool_resolver;

pub use source_enumerator::{DiscoveryError, SourceEnumerator};
pub use tool_resolver::{ToolError, ToolResolver};
