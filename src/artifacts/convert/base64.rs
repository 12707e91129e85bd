use crate::artifacts::convert::DATA_URL_PREFIX_REGEX;
use ::base64::alphabet;
use ::base64::engine::general_purpose::{STANDARD, URL_SAFE};
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use ::base64::Engine;
use anyhow::Context;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    #[default]
    Standard,
    UrlSafe,
}

/// Decoding tolerates missing or superfluous `=` padding.
const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

pub fn encode(text: &str, alphabet: Alphabet) -> String {
    match alphabet {
        Alphabet::Standard => STANDARD.encode(text.as_bytes()),
        Alphabet::UrlSafe => URL_SAFE.encode(text.as_bytes()),
    }
}

/// Decodes Base64 into UTF-8 text, accepting an optional `data:…;base64,` prefix.
/// Line breaks and other ASCII whitespace inside the payload are ignored.
pub fn decode(input: &str, alphabet: Alphabet) -> anyhow::Result<String> {
    let re = Regex::new(DATA_URL_PREFIX_REGEX)
        .with_context(|| format!("invalid data url regex: {DATA_URL_PREFIX_REGEX}"))?;
    let payload = re
        .replace(input.trim(), "")
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>();

    let bytes = match alphabet {
        Alphabet::Standard => LENIENT_STANDARD.decode(payload.as_bytes()),
        Alphabet::UrlSafe => LENIENT_URL_SAFE.decode(payload.as_bytes()),
    }
    .context("invalid base64 input")?;

    String::from_utf8(bytes).context("decoded bytes are not valid UTF-8 text")
}
