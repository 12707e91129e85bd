/// Edits an [`EditMatrix`] may charge for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    /// Insertions and deletions only; a substitution costs one of each.
    #[default]
    InsertDelete,
    /// Insertions, deletions and single-step substitutions.
    Levenshtein,
}

/// Dynamic-programming table of prefix edit distances.
///
/// Row `i` stands for the first `i` tokens of `b`, column `j` for the first
/// `j` tokens of `a`, so the table is `(|b| + 1) x (|a| + 1)`. Row 0 and
/// column 0 hold the pure insertion/deletion costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl EditMatrix {
    pub fn build<T: Eq>(a: &[T], b: &[T], cost_model: CostModel) -> Self {
        let (rows, cols) = (b.len() + 1, a.len() + 1);
        let mut cells = vec![0; rows * cols];

        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 0..rows {
            cells[i * cols] = i;
        }

        for i in 1..rows {
            for j in 1..cols {
                let diagonal = cells[(i - 1) * cols + (j - 1)];

                cells[i * cols + j] = if b[i - 1] == a[j - 1] {
                    diagonal
                } else {
                    let up = cells[(i - 1) * cols + j];
                    let left = cells[i * cols + (j - 1)];
                    let cheapest = match cost_model {
                        CostModel::InsertDelete => up.min(left),
                        CostModel::Levenshtein => up.min(left).min(diagonal),
                    };
                    cheapest + 1
                };
            }
        }

        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Cost of turning all of `a` into all of `b`.
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Levenshtein distance between two token sequences.
pub fn levenshtein<T: Eq>(a: &[T], b: &[T]) -> usize {
    EditMatrix::build(a, b, CostModel::Levenshtein).distance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_boundaries_hold_indices() {
        let matrix = EditMatrix::build(&chars("abc"), &chars("de"), CostModel::InsertDelete);

        assert_eq!((matrix.rows(), matrix.cols()), (3, 4));
        assert_eq!(
            (0..4).map(|j| matrix.get(0, j)).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(
            (0..3).map(|i| matrix.get(i, 0)).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[rstest]
    #[case("kitten", "sitting", 3)]
    #[case("", "abc", 3)]
    #[case("abc", "", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("same", "same", 0)]
    fn test_levenshtein_distance(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(levenshtein(&chars(a), &chars(b)), expected);
    }

    #[rstest]
    #[case("kitten", "sitting", 5)]
    #[case("d", "e", 2)]
    #[case("abcabba", "cbabac", 5)]
    fn test_insert_delete_distance(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        let matrix = EditMatrix::build(&chars(a), &chars(b), CostModel::InsertDelete);
        assert_eq!(matrix.distance(), expected);
    }

    #[test]
    fn test_empty_sequences_have_zero_distance() {
        let matrix = EditMatrix::build::<char>(&[], &[], CostModel::Levenshtein);
        assert_eq!(matrix.distance(), 0);
    }
}
