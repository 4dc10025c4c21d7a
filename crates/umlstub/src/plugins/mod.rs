//! Plugin implementations
//!
//! Each plugin implements the core traits for one notation. The orchestrator
//! wires them into a detect → parse → render pipeline.

pub mod orchestrator;
pub mod uml;

pub use orchestrator::*;
pub use uml::*;
