use crate::areas::toolbox::Toolbox;
use crate::artifacts::convert::unicode::{EscapeStyle, UnicodeTarget, convert_unicode};

#[derive(Debug, Clone)]
pub struct UnicodeOptions {
    pub text: Option<String>,
    pub target: UnicodeTarget,
    pub style: EscapeStyle,
}

impl Toolbox {
    pub fn unicode(&self, opts: &UnicodeOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        self.emit(&convert_unicode(&input, opts.target, opts.style)?)
    }
}
