//! Sequence diffing and its display
//!
//! - `granularity`: splitting texts into character, word or line tokens
//! - `edit_matrix`: the dynamic-programming table of prefix edit distances
//! - `sequence_diff`: backtracking the table into an edit script
//! - `diff_op`: the ops of an edit script
//! - `diff_stats`: op counts and Levenshtein distance
//! - `diff_filter`: selecting which op kinds are printed
//! - `render`: span grouping and output formats
//! - `json_diff`: canonical line diff of two JSON documents

pub mod diff_filter;
pub mod diff_op;
pub mod diff_stats;
pub mod edit_matrix;
pub mod granularity;
pub mod json_diff;
pub mod render;
pub mod sequence_diff;
