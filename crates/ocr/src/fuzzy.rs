//! Ratcliff/Obershelp string similarity.
//!
//! The ratio is `2*M / T`, where `T` is the combined length of both strings
//! and `M` the number of characters in matching blocks. Blocks are found by
//! taking the longest common substring, then recursing on the pieces to its
//! left and right.

/// Similarity of `a` and `b` in `[0.0, 1.0]`. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// True when `candidate` scores at least `cutoff` against any reference.
pub fn is_close_match(candidate: &str, references: &[&str], cutoff: f64) -> bool {
    references
        .iter()
        .any(|reference| similarity(reference, candidate) >= cutoff)
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
/// Ties go to the run starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // run[j - blo + 1]: length of the common run ending at a[i], b[j].
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut curr = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let k = if a[i] == b[j] { prev[j - blo] + 1 } else { 0 };
            curr[j - blo + 1] = k;
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings() {
        assert_eq!(similarity("tax", "tax"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn overlapping_runs() {
        assert!(approx(similarity("abcd", "bcde"), 0.75));
        assert!(approx(similarity("total", "subtotal"), 10.0 / 13.0));
    }

    #[test]
    fn recurses_on_both_sides() {
        // "app" then "l" to its right.
        assert!(approx(similarity("apple", "appel"), 0.8));
        assert!(approx(similarity("ape", "appel"), 0.75));
        assert!(approx(similarity("peach", "appel"), 0.4));
    }

    #[test]
    fn counts_unicode_scalars() {
        assert!(approx(similarity("café", "cafe"), 0.75));
    }

    #[test]
    fn close_match_uses_best_reference() {
        let refs = ["ape", "apple", "peach", "puppy"];
        assert!(is_close_match("appel", &refs, 0.8));
        assert!(!is_close_match("appel", &refs, 0.81));
        assert!(!is_close_match("zzz", &refs, 0.1));
    }

    #[test]
    fn empty_reference_set_never_matches() {
        assert!(!is_close_match("tax", &[], 0.0));
    }
}
