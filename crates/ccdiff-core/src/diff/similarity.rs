//! Closest-match lookup for discrepant records.
//!
//! Similarity is the Ratcliff/Obershelp ratio `2·M / (|a| + |b|)` over the
//! two records' canonical keys, where `M` counts the characters in the
//! matching blocks found by recursively taking the longest common block and
//! recursing on both sides of it. For a `b` of 200 or more characters,
//! characters occurring in more than 1% of `b` (plus one) are not used to
//! seed blocks, although blocks may still extend over them.
//!
//! The search is O(candidates × |a| × |b|) per discrepancy. It is meant for
//! configuration-sized inputs and only runs for discrepancies that get printed.

use crate::diff::canonical::canonical_key;
use crate::diff::index::FrequencyIndex;
use crate::model::Record;
use std::collections::HashMap;

/// Ratios at or below this carry no information
pub const MIN_USEFUL_RATIO: f64 = 0.0;

/// Ratios at or above this mean the records are effectively the same
pub const NEAR_IDENTICAL_RATIO: f64 = 0.999;

const AUTOJUNK_MIN_LEN: usize = 200;

/// Best candidate found on the opposite side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch<'a> {
    pub ratio: f64,
    pub key: &'a str,
    pub record: &'a Record,
}

/// Longest-common-block matcher over two byte strings
struct BlockMatcher<'a> {
    a: &'a [u8],
    b: &'a [u8],
    /// Positions of each byte in `b`, minus popular bytes
    b2j: HashMap<u8, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        let mut b2j: HashMap<u8, Vec<usize>> = HashMap::new();
        for (j, byte) in b.iter().enumerate() {
            b2j.entry(*byte).or_default().push(j);
        }
        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }
        Self { a, b, b2j }
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` inside the given bounds,
    /// earliest in `a` then in `b` on ties
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Grow the block over bytes excluded from b2j
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// Total length of all matching blocks
    fn matched_len(&self) -> usize {
        let mut matched = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }
        matched
    }
}

/// Similarity ratio in `[0.0, 1.0]`; two empty strings are identical
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = BlockMatcher::new(a.as_bytes(), b.as_bytes()).matched_len();
    2.0 * matched as f64 / total as f64
}

/// Find the opposite-side record most similar to `entry`
///
/// Candidates are visited in first-insertion order and a later candidate
/// only wins with a strictly higher ratio. Returns `None` when there are no
/// candidates, or when the best ratio is `<= MIN_USEFUL_RATIO` or
/// `>= NEAR_IDENTICAL_RATIO`.
pub fn find_best_match<'a>(
    entry: &Record,
    candidates: &'a FrequencyIndex,
) -> Option<BestMatch<'a>> {
    let entry_key = canonical_key(entry);
    let mut best: Option<BestMatch<'a>> = None;

    for (key, record) in candidates.representatives() {
        let ratio = similarity_ratio(&entry_key, key);
        let floor = best.map_or(MIN_USEFUL_RATIO, |current| current.ratio);
        if ratio > floor {
            best = Some(BestMatch { ratio, key, record });
        }
    }

    best.filter(|found| found.ratio < NEAR_IDENTICAL_RATIO)
}
