//! String Similarity
//!
//! Levenshtein edit distance with shared prefix/suffix trimming.
//! Characters compare by Unicode scalar value; no case folding or
//! normalization is applied.

use tracing::{debug, trace};

use crate::matrix::Matrix;

/// Calculate the edit distance between two strings: the minimum number
/// of single-character insertions, deletions, or substitutions needed
/// to turn one into the other.
///
/// The argument order is unimportant; the result is the same either
/// way. Shared prefixes and suffixes are stripped before the table is
/// built, so near-identical strings stay cheap regardless of length.
///
/// `similarity("kitten", "sitting")` is 3, `similarity("ab", "ac")` is 1,
/// and any string has distance 0 to itself.
pub fn similarity(str1: &str, str2: &str) -> usize {
    // Identical inputs need no table at all
    if str1 == str2 {
        trace!("inputs identical, distance 0");
        return 0;
    }

    let chars1: Vec<char> = str1.chars().collect();
    let chars2: Vec<char> = str2.chars().collect();

    // Trim the common prefix and suffix. `end1`/`end2` are exclusive,
    // so the guards below cannot underflow on empty or fully-matched
    // inputs. The suffix scan must not cross back past `start`.
    let mut start = 0;
    let mut end1 = chars1.len();
    let mut end2 = chars2.len();

    while start < end1 && start < end2 && chars1[start] == chars2[start] {
        start += 1;
    }

    while end1 > start && end2 > start && chars1[end1 - 1] == chars2[end2 - 1] {
        end1 -= 1;
        end2 -= 1;
    }

    let length1 = end1 - start;
    let length2 = end2 - start;

    // One side fully consumed by the matched affixes: the distance is
    // the insertions that remain on the other side.
    if length1 == 0 {
        trace!("affixes consumed str1, {} insertions remain", length2);
        return length2;
    }
    if length2 == 0 {
        trace!("affixes consumed str2, {} deletions remain", length1);
        return length1;
    }

    debug!("filling {}x{} distance table", length1 + 1, length2 + 1);

    // Row 0 and column 0 hold the distance from the empty string; the
    // interior starts at 0 and is overwritten by the fill below.
    let mut table = Matrix::new(length1 + 1, length2 + 1, |row, column| {
        if row == 0 {
            column
        } else if column == 0 {
            row
        } else {
            0
        }
    })
    .expect("distance table dimensions fit in usize");

    for i in 1..=length1 {
        for j in 1..=length2 {
            let substitution = if chars1[start + i - 1] == chars2[start + j - 1] {
                0
            } else {
                1
            };
            table[(i, j)] = (table[(i - 1, j)] + 1)
                .min(table[(i, j - 1)] + 1)
                .min(table[(i - 1, j - 1)] + substitution);
        }
    }

    table[(length1, length2)]
}
