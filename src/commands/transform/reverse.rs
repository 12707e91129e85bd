use crate::areas::toolbox::Toolbox;
use crate::artifacts::convert::reverse::{ReverseMode, reverse_text};

#[derive(Debug, Clone)]
pub struct ReverseOptions {
    pub text: Option<String>,
    pub mode: ReverseMode,
}

impl Toolbox {
    pub fn reverse(&self, opts: &ReverseOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        self.emit(&reverse_text(&input, opts.mode)?)
    }
}
