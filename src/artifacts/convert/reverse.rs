use crate::artifacts::convert::SENTENCE_END_REGEX;
use anyhow::Context;
use clap::ValueEnum;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReverseMode {
    /// Reverse the whole text character by character
    Char,
    /// Reverse the characters inside every word
    Word,
    /// Reverse the word order inside every sentence
    Sentence,
}

pub fn reverse_text(text: &str, mode: ReverseMode) -> anyhow::Result<String> {
    let reversed = match mode {
        ReverseMode::Char => text.chars().rev().collect(),
        ReverseMode::Word => text
            .split_whitespace()
            .map(|word| word.chars().rev().collect::<String>())
            .collect::<Vec<_>>()
            .join(" "),
        ReverseMode::Sentence => reverse_sentences(text)?,
    };

    Ok(reversed)
}

fn reverse_words(segment: &str) -> String {
    segment
        .split_whitespace()
        .rev()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Punctuation runs stay where they are; the words between them flip.
fn reverse_sentences(text: &str) -> anyhow::Result<String> {
    let re = Regex::new(SENTENCE_END_REGEX)
        .with_context(|| format!("invalid sentence regex: {SENTENCE_END_REGEX}"))?;

    let mut reversed = String::with_capacity(text.len());
    let mut last = 0;
    for punctuation in re.find_iter(text) {
        reversed.push_str(&reverse_words(&text[last..punctuation.start()]));
        reversed.push_str(punctuation.as_str());
        last = punctuation.end();
    }
    reversed.push_str(&reverse_words(&text[last..]));

    Ok(reversed)
}
