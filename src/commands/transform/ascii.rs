use crate::areas::toolbox::Toolbox;
use crate::artifacts::convert::ascii::{AsciiTarget, convert_ascii};

#[derive(Debug, Clone)]
pub struct AsciiOptions {
    pub text: Option<String>,
    pub target: AsciiTarget,
}

impl Toolbox {
    pub fn ascii(&self, opts: &AsciiOptions) -> anyhow::Result<()> {
        let input = self.read_text(opts.text.as_deref())?;
        self.emit(&convert_ascii(&input, opts.target)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::transform::test_support::toolbox_with_stdin;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(AsciiTarget::Codes, "Hi!", "72 105 33\n")]
    #[case(AsciiTarget::Binary, "Hi", "01001000 01101001\n")]
    #[case(AsciiTarget::Text, "72 105 33", "Hi!\n")]
    fn test_ascii(
        #[case] target: AsciiTarget,
        #[case] text: &str,
        #[case] expected: &str,
    ) -> anyhow::Result<()> {
        let (toolbox, out) = toolbox_with_stdin("");
        toolbox.ascii(&AsciiOptions {
            text: Some(text.to_string()),
            target,
        })?;
        assert_eq!(out.contents(), expected);
        Ok(())
    }

    #[test]
    fn test_invalid_code_is_reported() {
        let (toolbox, _) = toolbox_with_stdin("72 abc\n");
        let err = toolbox
            .ascii(&AsciiOptions {
                text: None,
                target: AsciiTarget::Text,
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid character code: abc");
    }
}
