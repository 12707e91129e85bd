//! Display of edit scripts
//!
//! Ops are grouped into spans of the same kind and written in one of the
//! [`OutputFormat`]s. Grouping is for display only; the op list handed in is
//! never changed.

use crate::artifacts::diff::diff_filter::DiffFilter;
use crate::artifacts::diff::diff_op::{DiffOp, OpKind};
use crate::artifacts::diff::granularity::Granularity;
use clap::ValueEnum;
use colored::Colorize;
use derive_new::new;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Spans in reading order, changes highlighted in place
    #[default]
    Inline,
    /// HTML with <span>, <ins> and <del> elements
    Markup,
    /// One op per line prefixed with '+', '-' or ' '
    Lines,
    /// The op list as JSON
    Json,
}

/// Maximal run of adjacent ops of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Span<T> {
    pub kind: OpKind,
    pub tokens: Vec<T>,
}

impl<T: AsRef<str>> Span<T> {
    pub fn text(&self, separator: &str) -> String {
        self.tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

pub fn coalesce<T: Clone>(ops: &[DiffOp<T>]) -> Vec<Span<T>> {
    let mut spans: Vec<Span<T>> = Vec::new();

    for op in ops {
        match spans.last_mut() {
            Some(span) if span.kind == op.kind() => span.tokens.push(op.token().clone()),
            _ => spans.push(Span::new(op.kind(), vec![op.token().clone()])),
        }
    }

    spans
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffRenderer {
    granularity: Granularity,
    format: OutputFormat,
    filter: DiffFilter,
    colorize: bool,
}

impl DiffRenderer {
    pub fn render<T>(&self, ops: &[DiffOp<T>]) -> anyhow::Result<String>
    where
        T: AsRef<str> + Clone + Serialize,
    {
        let rendered = match self.format {
            OutputFormat::Inline => self.render_inline(ops),
            OutputFormat::Markup => self.render_markup(ops),
            OutputFormat::Lines => self.render_lines(ops),
            OutputFormat::Json => {
                let selected = ops
                    .iter()
                    .filter(|op| self.filter.matches(op.kind()))
                    .collect::<Vec<_>>();
                serde_json::to_string_pretty(&selected)?
            }
        };

        Ok(rendered)
    }

    fn render_inline<T: AsRef<str> + Clone>(&self, ops: &[DiffOp<T>]) -> String {
        let separator = self.granularity.separator();

        coalesce(ops)
            .iter()
            .map(|span| {
                let text = span.text(separator);
                match (span.kind, self.colorize) {
                    (OpKind::Unchanged, _) => text,
                    (OpKind::Added, true) => text.green().underline().to_string(),
                    (OpKind::Removed, true) => text.red().strikethrough().to_string(),
                    (OpKind::Added, false) => format!("{{+{text}+}}"),
                    (OpKind::Removed, false) => format!("[-{text}-]"),
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn render_markup<T: AsRef<str> + Clone>(&self, ops: &[DiffOp<T>]) -> String {
        let separator = self.granularity.separator();

        coalesce(ops)
            .iter()
            .map(|span| {
                let text = span.text(separator);
                let text = html_escape::encode_safe(&text);
                match span.kind {
                    OpKind::Unchanged => format!(r#"<span class="diff-unchanged">{text}</span>"#),
                    OpKind::Added => format!(r#"<ins class="diff-added">{text}</ins>"#),
                    OpKind::Removed => format!(r#"<del class="diff-removed">{text}</del>"#),
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn render_lines<T: AsRef<str>>(&self, ops: &[DiffOp<T>]) -> String {
        ops.iter()
            .filter(|op| self.filter.matches(op.kind()))
            .map(|op| {
                let line = op.as_string();
                match (op.kind(), self.colorize) {
                    (OpKind::Added, true) => line.green().to_string(),
                    (OpKind::Removed, true) => line.red().to_string(),
                    _ => line,
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
