//! Comparison commands
//!
//! - `diff`: token-level comparison of two texts
//! - `json_diff`: line comparison of two JSON documents after key sorting

pub mod diff;
pub mod json_diff;
