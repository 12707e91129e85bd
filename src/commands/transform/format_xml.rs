use crate::areas::toolbox::Toolbox;
use crate::artifacts::format::xml;

#[derive(Debug, Clone, Default)]
pub struct FormatXmlOptions {
    pub text: Option<String>,
}

impl Toolbox {
    pub fn format_xml(&self, opts: &FormatXmlOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        self.emit(&xml::pretty(input.trim())?)
    }
}
