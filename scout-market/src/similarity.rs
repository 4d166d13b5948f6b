//! Ratcliff/Obershelp string similarity.
//!
//! The ratio is `2·M / T` where `M` is the total number of characters
//! covered by recursively aligning longest common runs and `T` is the
//! combined length of both strings.

/// Similarity between `a` and `b` as an integer percentage in `[0, 100]`,
/// truncated toward zero.
///
/// Matching is case-insensitive: both inputs are lowercased first, so
/// `similarity_percent(a, b)` equals the score of the lowercased pair.
pub fn similarity_percent(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        // Two empty strings are identical.
        return 100;
    }

    let matches = matching_chars(&a, &b);
    (2.0 * matches as f64 / total as f64 * 100.0) as u8
}

/// Characters covered by the recursive longest-common-run alignment.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous run between `a` and `b`, as
/// `(start_in_a, start_in_b, length)`. Ties keep the earliest run in `a`,
/// then in `b`.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                current[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        prev = current;
    }

    best
}
