//! Core abstractions for declaration generation
//!
//! This module defines the traits every pipeline stage implements, plus the
//! shared types, errors, logging and parser utilities they build on.

pub mod chumsky_utils;
mod database;
mod detector;
mod error;
pub mod logging;
mod parser;
mod renderer;
mod types;

pub use database::*;
pub use detector::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use types::*;
