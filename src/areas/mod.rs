//! Runtime areas of a `devkit` invocation
//!
//! - `input`: where command input comes from (literal text, file, stdin)
//! - `settings`: color and pager configuration resolved from flags and env
//! - `toolbox`: the context every command runs against

pub mod input;
pub mod settings;
pub mod toolbox;
