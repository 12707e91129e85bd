use crate::artifacts::diff::diff_op::OpKind;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u8 {
        const ADDED = 0b001;
        const REMOVED = 0b010;
        const UNCHANGED = 0b100;
    }
}

impl Default for DiffFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl DiffFilter {
    /// Parses a selection such as `AR`: `A` added, `R` removed, `U` unchanged.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c.to_ascii_uppercase() {
                'A' => filter |= Self::ADDED,
                'R' => filter |= Self::REMOVED,
                'U' => filter |= Self::UNCHANGED,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, kind: OpKind) -> bool {
        match kind {
            OpKind::Added => self.contains(Self::ADDED),
            OpKind::Removed => self.contains(Self::REMOVED),
            OpKind::Unchanged => self.contains(Self::UNCHANGED),
        }
    }
}

/// `clap` value parser for `--diff-filter`.
pub fn parse_diff_filter(s: &str) -> Result<DiffFilter, String> {
    DiffFilter::try_parse(s)
        .ok_or_else(|| format!("invalid diff filter '{s}', expected letters from A, R, U"))
}
