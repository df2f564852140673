//! Normalized edit-similarity scoring for approximate key matching.
//!
//! Implements the Ratcliff/Obershelp sequence ratio: the total size of
//! matching contiguous blocks, found by recursive longest-common-substring
//! decomposition, over the combined length of both strings. Scores range
//! from 0.0 (nothing in common) to 1.0 (identical).

use crate::correction::map::CorrectionMap;

/// Calculate the similarity ratio between two strings as `2*M / T`, where
/// `M` is the number of matched characters and `T` the total length of both
/// strings.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if total == 0 {
        return 1.0;
    }

    let matched = matching_total(&a_chars, &b_chars, 0, a_chars.len(), 0, b_chars.len());
    2.0 * matched as f64 / total as f64
}

/// Sum the sizes of all matching blocks between `a[alo..ahi]` and
/// `b[blo..bhi]` by recursing around the longest common block.
fn matching_total(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }

    size + matching_total(a, b, alo, i, blo, j)
        + matching_total(a, b, i + size, ahi, j + size, bhi)
}

/// Find the longest matching block between `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)` such that `a[i..i+size] == b[j..j+size]`. Ties
/// break toward the lowest `i`, then the lowest `j`, so decomposition is
/// deterministic.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);

    // j2len[j] = length of the match ending at a[i-1] / b[j-1]
    let mut j2len: Vec<usize> = vec![0; bhi.saturating_sub(blo) + 1];

    for i in alo..ahi {
        let mut new_j2len = vec![0; bhi.saturating_sub(blo) + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = if j > blo { j2len[j - blo] } else { 0 } + 1;
                new_j2len[j - blo + 1] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        j2len = new_j2len;
    }

    best
}

/// Find the single closest map key to `token`, scoring at or above `cutoff`.
///
/// Keys are scanned in lexicographic order and a later key must strictly
/// beat the current best score, so equal-scoring candidates resolve to the
/// lexicographically smallest key.
pub fn closest_key<'a>(map: &'a CorrectionMap, token: &str, cutoff: f64) -> Option<&'a str> {
    let token_len = token.chars().count();
    let mut best_key: Option<&str> = None;
    let mut best_score = cutoff;

    for key in map.sorted_keys() {
        // Upper bound on the ratio from lengths alone; skips hopeless keys.
        let key_len = key.chars().count();
        let upper = 2.0 * token_len.min(key_len) as f64 / (token_len + key_len).max(1) as f64;
        if upper < best_score {
            continue;
        }

        let score = sequence_ratio(key, token);
        if best_key.is_none() {
            if score >= best_score {
                best_key = Some(key.as_str());
                best_score = score;
            }
        } else if score > best_score {
            best_key = Some(key.as_str());
            best_score = score;
        }
    }

    best_key
}
