//! Text conversions
//!
//! - `case`: upper, lower, title and sentence case
//! - `reverse`: character, word and sentence reversal
//! - `ascii`: character codes in decimal or binary and back
//! - `ascii_art`: three-row text banners
//! - `unicode`: Unicode escapes and back
//! - `base64`: Base64 encoding and decoding
//! - `caesar`: Caesar cipher over ASCII letters

pub mod ascii;
pub mod ascii_art;
pub mod base64;
pub mod caesar;
pub mod case;
pub mod reverse;
pub mod unicode;

pub const SENTENCE_START_REGEX: &str = r"(^|\. *)([a-z])";
pub const SENTENCE_END_REGEX: &str = r"[.!?]+";
pub const UNICODE_ESCAPE_REGEX: &str = r"(?:\\u|U\+)([0-9a-fA-F]{4})|&#x([0-9a-fA-F]{4,6});";
pub const DATA_URL_PREFIX_REGEX: &str = r"^data:[^,]*?;base64,";
