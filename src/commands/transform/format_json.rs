use crate::areas::toolbox::Toolbox;
use crate::artifacts::format::json;

#[derive(Debug, Clone, Default)]
pub struct FormatJsonOptions {
    pub text: Option<String>,
    pub minify: bool,
    pub unescape: bool,
}

impl Toolbox {
    pub fn format_json(&self, opts: &FormatJsonOptions) -> anyhow::Result<()> {
        let mut input = self.read_text(opts.text.as_deref())?;
        if opts.unescape {
            input = json::unescape(&input)?;
        }

        let output = if opts.minify {
            json::minify(&input)?
        } else {
            json::pretty(&input)?
        };

        self.emit(&output)
    }
}
