use crate::artifacts::diff::diff_op::DiffOp;
use crate::artifacts::diff::edit_matrix::{CostModel, EditMatrix};
use crate::artifacts::diff::granularity::Granularity;
use derive_new::new;

pub trait DiffAlgorithm<'d, T> {
    type Trace;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self, trace: &Self::Trace) -> Vec<DiffOp<T>>;

    fn diff(&self) -> Vec<DiffOp<T>> {
        let trace = self.compute_shortest_edit();
        self.backtrack(&trace)
    }

    fn format_diff(&self) -> String
    where
        T: AsRef<str>,
    {
        self.diff()
            .iter()
            .map(|op| op.as_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Edit-distance diff over a full `(|b| + 1) x (|a| + 1)` matrix.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SequenceDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for SequenceDiff<'d, T> {
    type Trace = EditMatrix;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let matrix = EditMatrix::build(self.a, self.b, CostModel::InsertDelete);
        tracing::debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            distance = matrix.distance(),
            "built edit matrix"
        );
        matrix
    }

    fn backtrack(&self, trace: &Self::Trace) -> Vec<DiffOp<T>> {
        let (mut i, mut j) = (self.b.len(), self.a.len());
        let mut ops = Vec::with_capacity(i.max(j));

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.b[i - 1] == self.a[j - 1] {
                ops.push(DiffOp::Unchanged(self.a[j - 1].clone()));
                i -= 1;
                j -= 1;
            } else if i > 0 && (j == 0 || trace.get(i - 1, j) <= trace.get(i, j - 1)) {
                // ties resolve towards an addition of b's token
                ops.push(DiffOp::Added(self.b[i - 1].clone()));
                i -= 1;
            } else {
                ops.push(DiffOp::Removed(self.a[j - 1].clone()));
                j -= 1;
            }
        }

        ops.reverse();
        ops
    }
}

/// Diffs two texts after splitting them with `granularity`.
pub fn compute_diff<'t>(
    text_a: &'t str,
    text_b: &'t str,
    granularity: Granularity,
) -> Vec<DiffOp<&'t str>> {
    let a = granularity.tokenize(text_a);
    let b = granularity.tokenize(text_b);

    SequenceDiff::new(&a, &b).diff()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::diff_op::{new_tokens, old_tokens};
    use crate::artifacts::diff::edit_matrix::levenshtein;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn string_inputs() -> (Vec<char>, Vec<char>) {
        ("abcabba".chars().collect(), "cbabac".chars().collect())
    }

    #[fixture]
    fn file_inputs() -> (Vec<&'static str>, Vec<&'static str>) {
        (
            vec!["line1", "line2", "line3", "line4"],
            vec!["line2", "line3_modified", "line4", "line5"],
        )
    }

    #[rstest]
    fn test_diff_strings(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;
        let result = SequenceDiff::new(&a, &b).diff();
        let expected = vec![
            DiffOp::Removed('a'),
            DiffOp::Removed('b'),
            DiffOp::Unchanged('c'),
            DiffOp::Removed('a'),
            DiffOp::Unchanged('b'),
            DiffOp::Added('a'),
            DiffOp::Unchanged('b'),
            DiffOp::Unchanged('a'),
            DiffOp::Added('c'),
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_diff_files(file_inputs: (Vec<&'static str>, Vec<&'static str>)) {
        let (a, b) = file_inputs;
        let result = SequenceDiff::new(&a, &b).diff();
        let expected = vec![
            DiffOp::Removed("line1"),
            DiffOp::Unchanged("line2"),
            DiffOp::Removed("line3"),
            DiffOp::Added("line3_modified"),
            DiffOp::Unchanged("line4"),
            DiffOp::Added("line5"),
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_format_diff_prefixes_every_line(file_inputs: (Vec<&'static str>, Vec<&'static str>)) {
        let (a, b) = file_inputs;
        let formatted = SequenceDiff::new(&a, &b).format_diff();

        assert_eq!(
            formatted,
            "-line1\n line2\n-line3\n+line3_modified\n line4\n+line5"
        );
    }

    #[test]
    fn test_character_granularity_isolates_changed_character() {
        let ops = compute_diff("ab cd", "ab ce", Granularity::Character);

        assert_eq!(
            ops,
            vec![
                DiffOp::Unchanged("a"),
                DiffOp::Unchanged("b"),
                DiffOp::Unchanged(" "),
                DiffOp::Unchanged("c"),
                DiffOp::Removed("d"),
                DiffOp::Added("e"),
            ]
        );
    }

    #[test]
    fn test_word_granularity_keeps_changed_word_whole() {
        let ops = compute_diff("ab cd", "ab ce", Granularity::Word);

        assert_eq!(
            ops,
            vec![
                DiffOp::Unchanged("ab"),
                DiffOp::Removed("cd"),
                DiffOp::Added("ce"),
            ]
        );
    }

    #[test]
    fn test_line_granularity_reports_removed_blank_line() {
        let ops = compute_diff("a\n\nb", "a\nb", Granularity::Line);

        assert_eq!(
            ops,
            vec![
                DiffOp::Unchanged("a"),
                DiffOp::Removed(""),
                DiffOp::Unchanged("b"),
            ]
        );
    }

    #[test]
    fn test_substitution_shows_removal_then_addition() {
        let ops = compute_diff("kitten", "sitting", Granularity::Character);

        assert_eq!(
            ops,
            vec![
                DiffOp::Removed("k"),
                DiffOp::Added("s"),
                DiffOp::Unchanged("i"),
                DiffOp::Unchanged("t"),
                DiffOp::Unchanged("t"),
                DiffOp::Removed("e"),
                DiffOp::Added("i"),
                DiffOp::Unchanged("n"),
                DiffOp::Added("g"),
            ]
        );
    }

    #[test]
    fn test_unequal_lengths_remove_everything_before_adding() {
        let ops = compute_diff("aa", "b", Granularity::Character);

        assert_eq!(
            ops,
            vec![
                DiffOp::Removed("a"),
                DiffOp::Removed("a"),
                DiffOp::Added("b"),
            ]
        );
    }

    #[rstest]
    #[case(Granularity::Character, "ab c")]
    #[case(Granularity::Word, "one two  three")]
    #[case(Granularity::Line, "x\n\ny")]
    fn test_empty_old_side_is_all_added(#[case] granularity: Granularity, #[case] text: &str) {
        let ops = compute_diff("", text, granularity);
        let expected = granularity
            .tokenize(text)
            .into_iter()
            .map(DiffOp::Added)
            .collect::<Vec<_>>();

        assert_eq!(ops, expected);
    }

    #[rstest]
    #[case(Granularity::Character, "ab c")]
    #[case(Granularity::Word, "one two  three")]
    #[case(Granularity::Line, "x\n\ny")]
    fn test_empty_new_side_is_all_removed(#[case] granularity: Granularity, #[case] text: &str) {
        let ops = compute_diff(text, "", granularity);
        let expected = granularity
            .tokenize(text)
            .into_iter()
            .map(DiffOp::Removed)
            .collect::<Vec<_>>();

        assert_eq!(ops, expected);
    }

    #[test]
    fn test_both_sides_empty_yield_no_ops() {
        assert!(compute_diff("", "", Granularity::Line).is_empty());
    }

    fn granularity_strategy() -> impl Strategy<Value = Granularity> {
        prop_oneof![
            Just(Granularity::Character),
            Just(Granularity::Word),
            Just(Granularity::Line),
        ]
    }

    fn lcs_len(a: &[&str], b: &[&str]) -> usize {
        let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for i in 0..a.len() {
            for j in 0..b.len() {
                table[i + 1][j + 1] = if a[i] == b[j] {
                    table[i][j] + 1
                } else {
                    table[i][j + 1].max(table[i + 1][j])
                };
            }
        }
        table[a.len()][b.len()]
    }

    proptest! {
        #[test]
        fn prop_ops_reconstruct_both_sequences(
            a in "[ab \n]{0,24}",
            b in "[ab \n]{0,24}",
            granularity in granularity_strategy()
        ) {
            let ops = compute_diff(&a, &b, granularity);
            prop_assert_eq!(old_tokens(&ops), granularity.tokenize(&a));
            prop_assert_eq!(new_tokens(&ops), granularity.tokenize(&b));
        }

        #[test]
        fn prop_identical_inputs_are_all_unchanged(
            s in "[a-c \n]{0,32}",
            granularity in granularity_strategy()
        ) {
            let ops = compute_diff(&s, &s, granularity);
            prop_assert!(ops.iter().all(|op| op.is_unchanged()));
            prop_assert_eq!(old_tokens(&ops), granularity.tokenize(&s));
        }

        #[test]
        fn prop_change_count_is_minimal(
            a in "[abc]{0,12}",
            b in "[abc]{0,12}",
        ) {
            let ta = Granularity::Character.tokenize(&a);
            let tb = Granularity::Character.tokenize(&b);
            let ops = SequenceDiff::new(&ta, &tb).diff();
            let changes = ops.iter().filter(|op| !op.is_unchanged()).count();
            let matrix = SequenceDiff::new(&ta, &tb).compute_shortest_edit();

            prop_assert_eq!(changes, matrix.distance());
            prop_assert_eq!(changes, ta.len() + tb.len() - 2 * lcs_len(&ta, &tb));
            prop_assert!(changes >= levenshtein(&ta, &tb));
        }

        #[test]
        fn prop_diff_is_deterministic(
            a in "[a-d \n]{0,20}",
            b in "[a-d \n]{0,20}",
            granularity in granularity_strategy()
        ) {
            prop_assert_eq!(
                compute_diff(&a, &b, granularity),
                compute_diff(&a, &b, granularity)
            );
        }
    }
}
