use crate::artifacts::convert::UNICODE_ESCAPE_REGEX;
use anyhow::Context;
use clap::ValueEnum;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnicodeTarget {
    /// Escape every character
    Escape,
    /// Decode escapes back into text
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EscapeStyle {
    /// \u0041
    #[default]
    #[value(name = "u")]
    Backslash,
    /// U+0041
    #[value(name = "uplus")]
    CodePoint,
}

pub fn convert_unicode(
    input: &str,
    target: UnicodeTarget,
    style: EscapeStyle,
) -> anyhow::Result<String> {
    match target {
        UnicodeTarget::Escape => Ok(escape_unicode(input, style)),
        UnicodeTarget::Text => unescape_unicode(input),
    }
}

pub fn escape_unicode(text: &str, style: EscapeStyle) -> String {
    let prefix = match style {
        EscapeStyle::Backslash => "\\u",
        EscapeStyle::CodePoint => "U+",
    };

    text.encode_utf16()
        .map(|unit| format!("{prefix}{unit:04x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes `\uXXXX`, `U+XXXX` and `&#xH;` sequences after dropping all whitespace.
pub fn unescape_unicode(input: &str) -> anyhow::Result<String> {
    let re = Regex::new(UNICODE_ESCAPE_REGEX)
        .with_context(|| format!("invalid unicode regex: {UNICODE_ESCAPE_REGEX}"))?;

    let compact = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    let mut units: Vec<u16> = Vec::with_capacity(compact.len());
    let mut last = 0;
    for caps in re.captures_iter(&compact) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        units.extend(compact[last..whole.start()].encode_utf16());

        let hex = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        let code = u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex escape: {}", whole.as_str()))?;

        match u16::try_from(code) {
            Ok(unit) => units.push(unit),
            Err(_) => {
                let c = char::from_u32(code)
                    .with_context(|| format!("invalid code point: {}", whole.as_str()))?;
                let mut buf = [0u16; 2];
                units.extend_from_slice(c.encode_utf16(&mut buf));
            }
        }

        last = whole.end();
    }
    units.extend(compact[last..].encode_utf16());

    String::from_utf16(&units).context("escapes contain an unpaired surrogate")
}
