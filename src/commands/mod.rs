//! Command implementations
//!
//! Every command is a method on [`Toolbox`](crate::areas::toolbox::Toolbox),
//! grouped by what it does:
//!
//! - `compare`: diffs of two inputs (text and JSON)
//! - `transform`: single-text conversions, encoders and generators
//! - `list`: the tool catalogue

pub mod compare;
pub mod list;
pub mod transform;
