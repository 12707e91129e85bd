use crate::areas::input::InputSource;
use crate::areas::toolbox::Toolbox;
use crate::artifacts::diff::diff_filter::DiffFilter;
use crate::artifacts::diff::diff_op::DiffOp;
use crate::artifacts::diff::diff_stats::DiffStats;
use crate::artifacts::diff::granularity::Granularity;
use crate::artifacts::diff::render::{DiffRenderer, OutputFormat};
use crate::artifacts::diff::sequence_diff::compute_diff;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub old: InputSource,
    pub new: InputSource,
    pub granularity: Granularity,
    pub format: OutputFormat,
    pub filter: DiffFilter,
    pub stat: bool,
}

impl Toolbox {
    pub fn diff(&self, opts: &DiffOptions) -> anyhow::Result<()> {
        if opts.old.is_stdin() && opts.new.is_stdin() {
            anyhow::bail!("only one side can be read from standard input");
        }

        let old = self.read_source(&opts.old)?;
        let new = self.read_source(&opts.new)?;

        let ops = compute_diff(&old, &new, opts.granularity);
        tracing::info!(
            old = %opts.old,
            new = %opts.new,
            granularity = ?opts.granularity,
            ops = ops.len(),
            "compared inputs"
        );

        self.print_ops(&ops, opts.granularity, opts.format, opts.filter, opts.stat)
    }

    pub(crate) fn print_ops<T>(
        &self,
        ops: &[DiffOp<T>],
        granularity: Granularity,
        format: OutputFormat,
        filter: DiffFilter,
        stat: bool,
    ) -> anyhow::Result<()>
    where
        T: AsRef<str> + Clone + Eq + Serialize,
    {
        let renderer = DiffRenderer::new(granularity, format, filter, self.settings().colorize);
        let rendered = renderer.render(ops)?;

        if !rendered.is_empty() {
            writeln!(self.writer(), "{rendered}")?;
        }

        if stat {
            writeln!(self.writer(), "{}", DiffStats::from_ops(ops))?;
        }

        Ok(())
    }
}
