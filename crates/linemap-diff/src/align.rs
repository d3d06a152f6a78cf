//! Sequence alignment: LCS-based edit scripts over normalized lines.
//!
//! The aligner fills a dense `(n+1) × (m+1)` dynamic-programming table of
//! longest-common-subsequence lengths, then walks it backwards from `(n, m)`
//! to produce an edit script. Cost is `O(n·m)` time and space for the table
//! and `O(n+m)` for the walk.
//!
//! When both a deletion and an insertion lead to an equally long LCS, the walk
//! takes the insertion. Reversed into forward order this places deletions
//! before insertions within a changed region, and it is what fixes one
//! alignment out of several optimal ones. Reference outputs depend on it.

use linemap_types::{EditOperation, LineSequence, LocationMapping, NormalizedLine};

/// Row-major table of LCS lengths. Cell `(i, j)` holds the LCS length of the
/// first `i` original lines and the first `j` new lines.
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(original: &[NormalizedLine], new: &[NormalizedLine]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0u32; (original.len() + 1) * width];

        for (i, orig_line) in original.iter().enumerate() {
            let prev_row = i * width;
            let row = prev_row + width;
            for (j, new_line) in new.iter().enumerate() {
                cells[row + j + 1] = if orig_line == new_line {
                    cells[prev_row + j] + 1
                } else {
                    cells[prev_row + j + 1].max(cells[row + j])
                };
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Compute the edit script turning `original` into `new`, in forward order.
///
/// Every original position appears in exactly one `Match` or `Delete`, and
/// every new position in exactly one `Match` or `Insert`. Positions are
/// 1-based and ascend on each side.
pub fn edit_script(original: &LineSequence, new: &LineSequence) -> Vec<EditOperation> {
    let orig = original.as_slice();
    let new = new.as_slice();
    let table = LcsTable::build(orig, new);

    let (mut i, mut j) = (orig.len(), new.len());
    let common = table.get(i, j) as usize;
    let mut ops = Vec::with_capacity(i + j - common);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && orig[i - 1] == new[j - 1] {
            ops.push(EditOperation::Match { orig: i, new: j });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(EditOperation::Insert { new: j });
            j -= 1;
        } else {
            ops.push(EditOperation::Delete { orig: i });
            i -= 1;
        }
    }

    ops.reverse();
    ops
}

/// Align two line sequences, returning one [`LocationMapping`] per edit
/// operation in forward order.
///
/// Matched lines map to `(i, j)`, deleted original lines to `(i, -1)`, and
/// inserted new lines to `(-1, j)`.
pub fn align(original: &LineSequence, new: &LineSequence) -> Vec<LocationMapping> {
    edit_script(original, new)
        .into_iter()
        .map(EditOperation::to_mapping)
        .collect()
}
