//! Levenshtein edit distance over canonical region text.

use crate::normalize::normalize;

/// Edit distance between two raw strings after normalizing both.
///
/// Counts the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `normalize(a)` into `normalize(b)`.
pub fn distance(a: &str, b: &str) -> usize {
    levenshtein(&normalize(a), &normalize(b))
}

/// Edit distance between two strings that are already in canonical form.
///
/// Operates on `char`s, so lengths are character counts rather than bytes.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // table[i][j] = distance between a[..i] and b[..j]
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let delete = table[i - 1][j] + 1;
            let insert = table[i][j - 1] + 1;
            let substitute = table[i - 1][j - 1] + substitution;
            table[i][j] = delete.min(insert).min(substitute);
        }
    }

    table[m][n]
}
