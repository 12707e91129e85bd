use crate::areas::toolbox::Toolbox;
use crate::artifacts::convert::ascii_art::{ArtStyle, ascii_art};

#[derive(Debug, Clone)]
pub struct AsciiArtOptions {
    pub text: Option<String>,
    pub style: ArtStyle,
}

impl Toolbox {
    pub fn ascii_art(&self, opts: &AsciiArtOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        self.emit(&ascii_art(input.trim(), opts.style))
    }
}
