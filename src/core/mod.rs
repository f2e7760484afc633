//! Core plumbing shared by every layer: the error type and the console
//! logging macro used at the wasm boundary.

#[macro_use]
pub mod logging;
pub mod error;

pub use error::EngineError;
