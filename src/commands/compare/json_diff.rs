use crate::areas::input::InputSource;
use crate::areas::toolbox::Toolbox;
use crate::artifacts::diff::diff_filter::DiffFilter;
use crate::artifacts::diff::granularity::Granularity;
use crate::artifacts::diff::json_diff::json_diff;
use crate::artifacts::diff::render::OutputFormat;

#[derive(Debug, Clone)]
pub struct JsonDiffOptions {
    pub old: InputSource,
    pub new: InputSource,
    pub format: OutputFormat,
    pub stat: bool,
}

impl Toolbox {
    pub fn json_diff(&self, opts: &JsonDiffOptions) -> anyhow::Result<()> {
        if opts.old.is_stdin() && opts.new.is_stdin() {
            anyhow::bail!("only one side can be read from standard input");
        }

        let old = self.read_source(&opts.old)?;
        let new = self.read_source(&opts.new)?;

        let ops = json_diff(&old, &new)?;
        tracing::info!(old = %opts.old, new = %opts.new, ops = ops.len(), "compared JSON documents");

        self.print_ops(
            &ops,
            Granularity::Line,
            opts.format,
            DiffFilter::default(),
            opts.stat,
        )
    }
}
