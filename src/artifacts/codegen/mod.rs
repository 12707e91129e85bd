//! Source code generation from JSON samples

pub mod java_bean;

pub const JAVA_IDENTIFIER_REGEX: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*$";
pub const DATE_PREFIX_REGEX: &str = r"^\d{4}-\d{2}-\d{2}T";
