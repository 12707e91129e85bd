//! Pretty-printing and minifying structured text

pub mod json;
pub mod xml;
