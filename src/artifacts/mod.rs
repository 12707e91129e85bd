//! Building blocks behind the commands
//!
//! - `codegen`: source generators (Java beans from JSON)
//! - `convert`: text conversions (case, encodings, ciphers)
//! - `core`: terminal plumbing shared by commands
//! - `diff`: sequence diff engine, rendering and JSON comparison
//! - `format`: pretty-printers
//! - `registry`: the catalogue of available tools

pub mod codegen;
pub mod convert;
pub mod core;
pub mod diff;
pub mod format;
pub mod registry;
