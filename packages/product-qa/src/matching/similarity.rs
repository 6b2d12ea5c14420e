//! Character-level fuzzy similarity.
//!
//! Scores are the normalized indel similarity `2 * LCS / (len_a + len_b)`
//! scaled to 0-100. `partial_ratio` slides the shorter string over the longer
//! one and keeps the best window score, so a short query contained in a long title
//! (or the reverse) scores 100.

use std::collections::HashMap;

/// Longest-common-subsequence length against a fixed pattern.
///
/// Patterns up to 64 characters use the bit-parallel recurrence, one word
/// operation per text character; longer ones fall back to a DP row.
enum LcsMatcher {
    BitParallel {
        masks: HashMap<char, u64>,
        len: usize,
    },
    Table(Vec<char>),
}

impl LcsMatcher {
    fn new(pattern: &[char]) -> Self {
        if pattern.len() > 64 {
            return LcsMatcher::Table(pattern.to_vec());
        }
        let mut masks: HashMap<char, u64> = HashMap::new();
        for (i, c) in pattern.iter().enumerate() {
            *masks.entry(*c).or_insert(0) |= 1u64 << i;
        }
        LcsMatcher::BitParallel {
            masks,
            len: pattern.len(),
        }
    }

    fn lcs(&self, text: &[char]) -> usize {
        match self {
            LcsMatcher::BitParallel { masks, len } => {
                let mut s: u64 = !0;
                for c in text {
                    if let Some(&m) = masks.get(c) {
                        let u = s & m;
                        s = s.wrapping_add(u) | s.wrapping_sub(u);
                    }
                }
                let live = if *len == 64 { !0 } else { (1u64 << len) - 1 };
                len - (s & live).count_ones() as usize
            }
            LcsMatcher::Table(pattern) => {
                let mut prev = vec![0usize; text.len() + 1];
                let mut curr = vec![0usize; text.len() + 1];
                for p in pattern {
                    for (j, t) in text.iter().enumerate() {
                        curr[j + 1] = if p == t {
                            prev[j] + 1
                        } else {
                            curr[j].max(prev[j + 1])
                        };
                    }
                    std::mem::swap(&mut prev, &mut curr);
                }
                prev[text.len()]
            }
        }
    }
}

fn indel_score(lcs: usize, len_a: usize, len_b: usize) -> f64 {
    let total = len_a + len_b;
    if total == 0 {
        return 0.0;
    }
    200.0 * lcs as f64 / total as f64
}

/// Best indel score of `needle` against any alignment inside `haystack`.
///
/// Alignments are every full-length window plus the partial windows that hang
/// off either end of the haystack.
fn best_alignment(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let h = haystack.len();
    let matcher = LcsMatcher::new(needle);

    let prefixes = (1..n).map(move |end| &haystack[..end]);
    let full = (0..=h - n).map(move |start| &haystack[start..start + n]);
    let suffixes = (h - n + 1..h).map(move |start| &haystack[start..]);

    let mut best: f64 = 0.0;
    for window in prefixes.chain(full).chain(suffixes) {
        let score = indel_score(matcher.lcs(window), n, window.len());
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

/// Asymmetric substring similarity, 0-100. Case-sensitive; see [`confidence`].
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.len() < b.len() {
        best_alignment(&a, &b)
    } else if a.len() > b.len() {
        best_alignment(&b, &a)
    } else {
        best_alignment(&a, &b).max(best_alignment(&b, &a))
    }
}

/// Case-insensitive partial ratio truncated to an integer score.
///
/// Empty input scores 0.
pub fn confidence(query: &str, title: &str) -> u8 {
    let score = partial_ratio(&query.to_lowercase(), &title.to_lowercase());
    if score.is_finite() {
        score.clamp(0.0, 100.0) as u8
    } else {
        0
    }
}
