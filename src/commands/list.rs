use crate::areas::toolbox::Toolbox;
use crate::artifacts::registry::tools_by_category;
use colored::Colorize;
use std::io::Write;

impl Toolbox {
    pub fn list(&self) -> anyhow::Result<()> {
        let groups = tools_by_category();
        let width = groups
            .iter()
            .flat_map(|(_, tools)| tools.iter().map(|(name, _)| name.len()))
            .max()
            .unwrap_or_default();

        for (index, (category, tools)) in groups.iter().enumerate() {
            if index > 0 {
                writeln!(self.writer())?;
            }

            let header = format!("{category}:");
            if self.settings().colorize {
                writeln!(self.writer(), "{}", header.bold())?;
            } else {
                writeln!(self.writer(), "{header}")?;
            }

            for (name, info) in tools {
                writeln!(self.writer(), "  {name:<width$}  {}", info.summary)?;
            }
        }

        Ok(())
    }
}
