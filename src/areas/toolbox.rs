use crate::areas::input::{InputSource, trim_line_break};
use crate::areas::settings::Settings;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::{Read, Write};

/// Runtime context of a `devkit` invocation: resolved settings plus the
/// streams commands read from and write to.
pub struct Toolbox {
    settings: Settings,
    writer: RefCell<Box<dyn Write>>,
    reader: RefCell<Box<dyn Read>>,
}

impl Toolbox {
    pub fn new(settings: Settings, writer: Box<dyn Write>, reader: Box<dyn Read>) -> Self {
        Toolbox {
            settings,
            writer: RefCell::new(writer),
            reader: RefCell::new(reader),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn read_stdin(&self) -> anyhow::Result<String> {
        let mut buf = String::new();
        self.reader
            .borrow_mut()
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        Ok(buf)
    }

    /// Reads one side of a comparison verbatim.
    pub fn read_source(&self, source: &InputSource) -> anyhow::Result<String> {
        match source {
            InputSource::Literal(text) => Ok(text.clone()),
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            InputSource::Stdin => self.read_stdin(),
        }
    }

    /// Input of a single-text tool: the argument if given, standard input
    /// otherwise. Blank input is rejected.
    pub fn read_text(&self, text: Option<&str>) -> anyhow::Result<String> {
        let text = match text {
            Some(text) => text.to_string(),
            None => trim_line_break(&self.read_stdin()?).to_string(),
        };

        if text.trim().is_empty() {
            anyhow::bail!("no input provided");
        }

        Ok(text)
    }

    pub fn emit(&self, output: &str) -> anyhow::Result<()> {
        writeln!(self.writer(), "{output}")?;
        Ok(())
    }
}
