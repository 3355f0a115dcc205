//! Workflow module
//!
//! This module contains the directory converter loop and its run context.

mod context;
mod engine;

pub use context::{ConversionContext, ConversionStats};
pub use engine::{ProcessingOptions, convert_directory, process_directory};
