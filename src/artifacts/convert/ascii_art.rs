use clap::ValueEnum;

const GLYPH_HEIGHT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArtStyle {
    /// Slash-and-bar letters, the character itself where no glyph exists
    #[default]
    Standard,
    /// Filled blocks framing each character
    Block,
    /// Each character boxed on its own two rows
    Simple,
}

static STANDARD_GLYPHS: phf::Map<char, &'static str> = phf::phf_map! {
    'A' => "  /\\  \n /  \\ \n/====\\\n",
    'B' => "|===\\\n|===<\n|===/",
    'C' => " ====\n|    \n ====",
};

static BLOCK_GLYPHS: phf::Map<char, &'static str> = phf::phf_map! {
    ' ' => "   \n   \n   ",
    'O' => "███\n█ █\n███",
    'X' => "█ █\n █ \n█ █",
};

/// Renders `text` as a banner in the given style.
pub fn ascii_art(text: &str, style: ArtStyle) -> String {
    match style {
        ArtStyle::Standard => standard(text),
        ArtStyle::Block => block(text),
        ArtStyle::Simple => simple(text),
    }
}

fn append(rows: &mut [String; GLYPH_HEIGHT], glyph: &str, separator: &str) {
    for (row, part) in rows.iter_mut().zip(glyph.split('\n')) {
        row.push_str(part);
        row.push_str(separator);
    }
}

fn standard(text: &str) -> String {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();

    for c in text.to_uppercase().chars() {
        match STANDARD_GLYPHS.get(&c) {
            Some(glyph) => append(&mut rows, glyph, " "),
            None => append(&mut rows, &format!("   \n {c} \n   "), ""),
        }
    }

    rows.join("\n")
}

fn block(text: &str) -> String {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();

    for c in text.to_uppercase().chars() {
        match BLOCK_GLYPHS.get(&c) {
            Some(glyph) => append(&mut rows, glyph, " "),
            None => append(&mut rows, &format!("███\n█{c}█\n███"), " "),
        }
    }

    rows.join("\n")
}

/// Case is kept here; every character gets its own box separated by a blank line.
fn simple(text: &str) -> String {
    text.chars()
        .map(|c| format!(" _{c}_ \n|_{c}_|"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
