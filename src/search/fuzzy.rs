//! Approximate substring similarity.
//!
//! [`partial_ratio`] scores how well the shorter of two strings fits
//! somewhere inside the longer one, on a 0-100 scale. The per-window measure
//! is the normalized indel similarity `2 * LCS / (len_a + len_b) * 100`,
//! where LCS is the longest common subsequence.

use std::collections::HashMap;

/// Best similarity between the shorter string and any window of the longer.
///
/// Windows have the length of the shorter string and slide across the longer
/// one, including partial windows that overhang either end. Both inputs are
/// compared as given; lowercase them first for case-insensitive scoring.
///
/// Two empty strings score `100.0`; an empty string against a non-empty one
/// scores `0.0`.
///
/// # Example
///
/// ```rust
/// use chatsift::search::partial_ratio;
///
/// assert_eq!(partial_ratio("world", "hello world!"), 100.0);
/// assert_eq!(partial_ratio("wrld", "hello world"), 75.0);
/// assert!(partial_ratio("xyz", "hello world") < 40.0);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let m = short.len();
    let n = long.len();

    let pattern = PatternMasks::new(short);
    // Mask of every char of the longer string, looked up once
    let masks: Vec<Option<&[u64]>> = long.iter().map(|&c| pattern.get(c)).collect();
    let mut state = vec![0u64; pattern.words];

    let mut best = 0.0_f64;

    // Window starts range over -(m-1)..n so that partial windows at both ends
    // are included.
    for offset in 0..(n + m - 1) {
        let start = offset.saturating_sub(m - 1);
        let end = (offset + 1).min(n);
        let window = &masks[start..end];

        // A window can never score above this; skip it if that cannot win
        let matched = window.iter().filter(|mask| mask.is_some()).count();
        if ratio(matched.min(m), m + window.len()) <= best {
            continue;
        }

        let lcs = pattern.lcs(window, &mut state);
        let score = ratio(lcs, m + window.len());
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn ratio(lcs: usize, total: usize) -> f64 {
    200.0 * lcs as f64 / total as f64
}

/// Per-character match masks of a pattern, for bit-parallel LCS.
///
/// Bit `i` of a character's mask is set when `pattern[i]` is that character.
/// Patterns longer than 64 chars span several words.
struct PatternMasks {
    words: usize,
    masks: HashMap<char, Vec<u64>>,
}

impl PatternMasks {
    fn new(pattern: &[char]) -> Self {
        let words = pattern.len().div_ceil(64);
        let mut masks: HashMap<char, Vec<u64>> = HashMap::new();
        for (i, &c) in pattern.iter().enumerate() {
            masks.entry(c).or_insert_with(|| vec![0; words])[i / 64] |= 1u64 << (i % 64);
        }
        Self { words, masks }
    }

    fn get(&self, c: char) -> Option<&[u64]> {
        self.masks.get(&c).map(Vec::as_slice)
    }

    /// LCS length of the pattern and a text given as per-char masks.
    ///
    /// Hyyrö's bit-vector recurrence `V' = (V + (V & M)) | (V & !M)`, where
    /// the zero bits of `V` count the LCS. Bits above the pattern length stay
    /// set since their masks are always zero.
    fn lcs(&self, text: &[Option<&[u64]>], state: &mut [u64]) -> usize {
        state.fill(u64::MAX);
        for mask in text.iter().flatten() {
            let mut carry = false;
            for (v, &m) in state.iter_mut().zip(mask.iter()) {
                let u = *v & m;
                let (sum, c1) = v.overflowing_add(u);
                let (sum, c2) = sum.overflowing_add(u64::from(carry));
                carry = c1 || c2;
                *v = sum | (*v & !m);
            }
        }
        let ones: usize = state.iter().map(|v| v.count_ones() as usize).sum();
        self.words * 64 - ones
    }
}
