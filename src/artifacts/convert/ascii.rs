use anyhow::Context;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AsciiTarget {
    /// Decimal character codes
    Codes,
    /// 8-bit (or wider) binary character codes
    Binary,
    /// Text from decimal character codes
    Text,
}

pub fn convert_ascii(input: &str, target: AsciiTarget) -> anyhow::Result<String> {
    match target {
        AsciiTarget::Codes => Ok(text_to_codes(input)),
        AsciiTarget::Binary => Ok(text_to_binary(input)),
        AsciiTarget::Text => codes_to_text(input),
    }
}

/// Character codes are UTF-16 code units, so astral characters take two codes.
pub fn text_to_codes(text: &str) -> String {
    text.encode_utf16()
        .map(|unit| unit.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn text_to_binary(text: &str) -> String {
    text.encode_utf16()
        .map(|unit| format!("{unit:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn codes_to_text(codes: &str) -> anyhow::Result<String> {
    let units = codes
        .split_whitespace()
        .map(|code| {
            code.parse::<u16>()
                .with_context(|| format!("invalid character code: {code}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    String::from_utf16(&units).context("character codes do not form valid UTF-16 text")
}
