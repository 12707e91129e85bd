use crate::areas::toolbox::Toolbox;
use crate::artifacts::convert::caesar::caesar;

#[derive(Debug, Clone)]
pub struct CaesarOptions {
    pub text: Option<String>,
    pub shift: i32,
    pub decrypt: bool,
}

impl Toolbox {
    pub fn caesar(&self, opts: &CaesarOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        self.emit(&caesar(&input, opts.shift, opts.decrypt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::convert::caesar::DEFAULT_SHIFT;
    use crate::commands::transform::test_support::toolbox_with_stdin;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Hello, World!", false, "Khoor, Zruog!\n")]
    #[case("Khoor, Zruog!", true, "Hello, World!\n")]
    fn test_caesar_default_shift(
        #[case] text: &str,
        #[case] decrypt: bool,
        #[case] expected: &str,
    ) -> anyhow::Result<()> {
        let (toolbox, out) = toolbox_with_stdin("");
        toolbox.caesar(&CaesarOptions {
            text: Some(text.to_string()),
            shift: DEFAULT_SHIFT,
            decrypt,
        })?;
        assert_eq!(out.contents(), expected);
        Ok(())
    }
}
