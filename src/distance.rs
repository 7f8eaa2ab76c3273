//! Levenshtein edit distance over Unicode code points.
//!
//! Both functions index by `char`, so an accented letter such as `é` costs a
//! single edit even though it is two bytes in UTF-8.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `source` into `target`.
pub fn levenshtein(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let len1 = source_chars.len();
    let len2 = target_chars.len();

    let mut matrix = vec![vec![0usize; len2 + 1]; len1 + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if source_chars[i - 1] == target_chars[j - 1] { 0 } else { 1 };

            let deletion = matrix[i - 1][j] + 1;
            let insertion = matrix[i][j - 1] + 1;
            let substitution = matrix[i - 1][j - 1] + cost;

            matrix[i][j] = deletion.min(insertion).min(substitution);
        }
    }

    matrix[len1][len2]
}

/// Bounded variant of [`levenshtein`]: `Some(distance)` if it is at most
/// `max_distance`, `None` otherwise.
///
/// Rejects early on length difference and stops as soon as a whole DP row
/// exceeds the bound, which keeps full-vocabulary scans cheap.
pub fn levenshtein_within(source: &str, target: &str, max_distance: usize) -> Option<usize> {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let len1 = source_chars.len();
    let len2 = target_chars.len();

    if len1.abs_diff(len2) > max_distance {
        return None;
    }
    if len1 == 0 || len2 == 0 {
        return Some(len1.max(len2));
    }

    // Two rolling rows of the same grid `levenshtein` fills in.
    let mut previous: Vec<usize> = (0..=len2).collect();
    let mut current = vec![0usize; len2 + 1];

    for i in 1..=len1 {
        current[0] = i;
        let mut min_in_row = current[0];

        for j in 1..=len2 {
            let cost = if source_chars[i - 1] == target_chars[j - 1] { 0 } else { 1 };

            let deletion = previous[j] + 1;
            let insertion = current[j - 1] + 1;
            let substitution = previous[j - 1] + cost;

            current[j] = deletion.min(insertion).min(substitution);
            min_in_row = min_in_row.min(current[j]);
        }

        if min_in_row > max_distance {
            return None;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[len2];
    (distance <= max_distance).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for word in ["", "a", "chat", "peut-être", "œuvre"] {
            assert_eq!(levenshtein(word, word), 0);
        }
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("chat", "chats"), 1);
        assert_eq!(levenshtein("chien", "chat"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("chat", "chien"), ("été", "ete"), ("", "xy"), ("maison", "raison")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn test_counts_code_points_not_bytes() {
        assert_eq!(levenshtein("été", "ete"), 2);
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("cœur", "coeur"), 2);
        assert_eq!(levenshtein("é", ""), 1);
    }

    #[test]
    fn test_bounded_agrees_with_unbounded() {
        let words = ["chat", "chats", "chien", "chaton", "été", "ete", "", "a", "le", "la"];
        for a in words {
            for b in words {
                let exact = levenshtein(a, b);
                for bound in 0..4 {
                    let expected = (exact <= bound).then_some(exact);
                    assert_eq!(levenshtein_within(a, b, bound), expected, "{a:?} vs {b:?} within {bound}");
                }
            }
        }
    }

    #[test]
    fn test_bounded_rejects_on_length() {
        assert_eq!(levenshtein_within("a", "abcdef", 2), None);
        assert_eq!(levenshtein_within("", "ab", 2), Some(2));
    }
}
