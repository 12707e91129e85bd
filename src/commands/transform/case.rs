use crate::areas::toolbox::Toolbox;
use crate::artifacts::convert::case::{CaseStyle, convert_case};

#[derive(Debug, Clone)]
pub struct CaseOptions {
    pub text: Option<String>,
    pub style: CaseStyle,
}

impl Toolbox {
    pub fn case(&self, opts: &CaseOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        self.emit(&convert_case(&input, opts.style)?)
    }
}
