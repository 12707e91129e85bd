use serde::Serialize;
use std::fmt::Display;

/// Kind of a single edit, without its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpKind {
    Unchanged,
    Added,
    Removed,
}

impl From<OpKind> for &str {
    fn from(kind: OpKind) -> Self {
        match kind {
            OpKind::Unchanged => " ",
            OpKind::Added => "+",
            OpKind::Removed => "-",
        }
    }
}

/// One step of an edit script turning sequence A into sequence B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "token", rename_all = "lowercase")]
pub enum DiffOp<T> {
    Unchanged(T),
    Added(T),
    Removed(T),
}

impl<T> DiffOp<T> {
    pub fn kind(&self) -> OpKind {
        match self {
            DiffOp::Unchanged(_) => OpKind::Unchanged,
            DiffOp::Added(_) => OpKind::Added,
            DiffOp::Removed(_) => OpKind::Removed,
        }
    }

    pub fn token(&self) -> &T {
        match self {
            DiffOp::Unchanged(token) | DiffOp::Added(token) | DiffOp::Removed(token) => token,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, DiffOp::Unchanged(_))
    }

    /// Whether this op contributes a token to the old sequence.
    pub fn in_old(&self) -> bool {
        !matches!(self, DiffOp::Added(_))
    }

    /// Whether this op contributes a token to the new sequence.
    pub fn in_new(&self) -> bool {
        !matches!(self, DiffOp::Removed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DiffOp<U> {
        match self {
            DiffOp::Unchanged(token) => DiffOp::Unchanged(f(token)),
            DiffOp::Added(token) => DiffOp::Added(f(token)),
            DiffOp::Removed(token) => DiffOp::Removed(f(token)),
        }
    }
}

impl DiffOp<&str> {
    pub fn into_owned(self) -> DiffOp<String> {
        self.map(str::to_string)
    }
}

impl<T: AsRef<str>> DiffOp<T> {
    pub fn as_string(&self) -> String {
        let prefix: &str = self.kind().into();
        format!("{prefix}{}", self.token().as_ref())
    }
}

impl<T: AsRef<str>> Display for DiffOp<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Tokens of the old sequence, in order.
pub fn old_tokens<T: Clone>(ops: &[DiffOp<T>]) -> Vec<T> {
    ops.iter()
        .filter(|op| op.in_old())
        .map(|op| op.token().clone())
        .collect()
}

/// Tokens of the new sequence, in order.
pub fn new_tokens<T: Clone>(ops: &[DiffOp<T>]) -> Vec<T> {
    ops.iter()
        .filter(|op| op.in_new())
        .map(|op| op.token().clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(DiffOp::Unchanged("same"), " same")]
    #[case(DiffOp::Added("new"), "+new")]
    #[case(DiffOp::Removed("old"), "-old")]
    fn test_display_prefixes_token(#[case] op: DiffOp<&str>, #[case] expected: &str) {
        assert_eq!(op.to_string(), expected);
    }

    #[test]
    fn test_old_and_new_tokens_split_the_script() {
        let ops = vec![
            DiffOp::Removed("a"),
            DiffOp::Unchanged("b"),
            DiffOp::Added("c"),
        ];

        assert_eq!(old_tokens(&ops), vec!["a", "b"]);
        assert_eq!(new_tokens(&ops), vec!["b", "c"]);
    }

    #[test]
    fn test_serializes_as_tagged_object() -> anyhow::Result<()> {
        let json = serde_json::to_string(&DiffOp::Added("x"))?;
        assert_eq!(json, r#"{"op":"added","token":"x"}"#);
        Ok(())
    }
}
