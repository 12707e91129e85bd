use std::path::PathBuf;

pub const STDIN_MARKER: &str = "-";

/// Where one side of a comparison comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Literal(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Reads `arg` as literal text when `literal` is set, otherwise as a path
    /// where `-` means standard input.
    pub fn from_arg(arg: &str, literal: bool) -> Self {
        if literal {
            InputSource::Literal(arg.to_string())
        } else if arg == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Literal(_) => write!(f, "<text>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Drops one trailing line break, as left by `echo` or an editor.
pub fn trim_line_break(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
