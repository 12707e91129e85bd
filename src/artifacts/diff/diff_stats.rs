use crate::artifacts::diff::diff_op::{DiffOp, new_tokens, old_tokens};
use crate::artifacts::diff::edit_matrix::levenshtein;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    /// Levenshtein distance between the two token sequences.
    pub distance: usize,
}

impl DiffStats {
    pub fn from_ops<T: Eq + Clone>(ops: &[DiffOp<T>]) -> Self {
        let mut stats = ops.iter().fold(Self::default(), |mut stats, op| {
            match op {
                DiffOp::Unchanged(_) => stats.unchanged += 1,
                DiffOp::Added(_) => stats.added += 1,
                DiffOp::Removed(_) => stats.removed += 1,
            }
            stats
        });
        stats.distance = levenshtein(&old_tokens(ops), &new_tokens(ops));
        stats
    }
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unchanged, {} added, {} removed, distance {}",
            self.unchanged, self.added, self.removed, self.distance
        )
    }
}
