//! Single-text transform commands
//!
//! Each command takes its input as an argument or from standard input and
//! prints the transformed text.

pub mod ascii;
pub mod ascii_art;
pub mod base64;
pub mod caesar;
pub mod case;
pub mod format_json;
pub mod format_xml;
pub mod java_bean;
pub mod reverse;
pub mod unicode;
