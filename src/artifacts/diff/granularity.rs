use clap::ValueEnum;

/// Tokenization mode deciding how finely two texts are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Granularity {
    #[value(name = "char", alias = "character")]
    Character,
    Word,
    #[default]
    Line,
}

impl Granularity {
    /// Splits `text` into tokens borrowed from it. The empty string has no tokens.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if text.is_empty() {
            return Vec::new();
        }

        match self {
            Granularity::Character => text
                .char_indices()
                .map(|(start, c)| &text[start..start + c.len_utf8()])
                .collect(),
            Granularity::Word => text.split_whitespace().collect(),
            Granularity::Line => text.split('\n').collect(),
        }
    }

    /// Text placed between adjacent tokens when they are shown again.
    pub fn separator(&self) -> &'static str {
        match self {
            Granularity::Character => "",
            Granularity::Word => " ",
            Granularity::Line => "\n",
        }
    }
}
