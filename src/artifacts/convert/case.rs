use crate::artifacts::convert::SENTENCE_START_REGEX;
use anyhow::Context;
use clap::ValueEnum;
use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    /// HELLO WORLD
    Upper,
    /// hello world
    Lower,
    /// Hello World
    Title,
    /// Hello world. Next sentence
    Sentence,
}

pub fn convert_case(text: &str, style: CaseStyle) -> anyhow::Result<String> {
    let converted = match style {
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Title => to_title_case(text),
        CaseStyle::Sentence => to_sentence_case(text)?,
    };

    Ok(converted)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn to_title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_sentence_case(text: &str) -> anyhow::Result<String> {
    let re = Regex::new(SENTENCE_START_REGEX)
        .with_context(|| format!("invalid sentence regex: {SENTENCE_START_REGEX}"))?;

    let lowered = text.to_lowercase();
    let converted = re.replace_all(&lowered, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });

    Ok(converted.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(CaseStyle::Upper, "hello World", "HELLO WORLD")]
    #[case(CaseStyle::Lower, "Hello WORLD", "hello world")]
    #[case(CaseStyle::Title, "hello wORLD  again", "Hello World  Again")]
    #[case(CaseStyle::Sentence, "HELLO. wORLD.  again", "Hello. World.  Again")]
    #[case(CaseStyle::Sentence, "first part, second part", "First part, second part")]
    fn test_convert_case(#[case] style: CaseStyle, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_case(input, style).unwrap(), expected);
    }

    #[test]
    fn test_sentence_case_leaves_non_ascii_starts_alone() {
        assert_eq!(
            convert_case("élan. ok", CaseStyle::Sentence).unwrap(),
            "élan. Ok"
        );
    }
}
