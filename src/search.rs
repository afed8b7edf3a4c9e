//! Bounded edit-distance search over the compressed structure.
//!
//! The walk carries one dynamic-programming row per (node, offset)
//! position: `row[i]` is the Levenshtein distance between the first `i`
//! bytes of the query and the path walked from the root to that position.
//! A branch is abandoned as soon as the row's minimum exceeds the bound,
//! since every extension can only grow that minimum.

use smallvec::SmallVec;

use crate::node::Node;

/// Inline row capacity; queries up to 15 bytes never heap-allocate rows.
const ROW_INLINE: usize = 16;

type Row = SmallVec<[usize; ROW_INLINE]>;

/// Emit every stored value whose key lies within `max_distance` edits of
/// `word`, paired with its exact distance.
pub(crate) fn bounded_search<'t, V>(
    root: &'t Node<V>,
    word: &[u8],
    max_distance: usize,
    emit: &mut impl FnMut(&'t V, usize),
) {
    let Some(first) = root.first_child.as_deref() else {
        return;
    };
    // Distance from the empty path: i edits to delete each query prefix.
    let entry_row: Row = (0..=word.len()).collect();
    search_from(first, 0, &entry_row, word, max_distance, emit);
}

fn search_from<'t, V>(
    node: &'t Node<V>,
    offset: usize,
    entry_row: &[usize],
    word: &[u8],
    max_distance: usize,
    emit: &mut impl FnMut(&'t V, usize),
) {
    let byte = node.label[offset];
    let mut row = Row::with_capacity(word.len() + 1);
    row.push(entry_row[0] + 1);
    for i in 1..=word.len() {
        let insertion = row[i - 1] + 1;
        let deletion = entry_row[i] + 1;
        let substitution = entry_row[i - 1] + usize::from(byte != word[i - 1]);
        row.push(insertion.min(deletion).min(substitution));
    }

    let at_boundary = offset + 1 == node.label.len();
    if at_boundary && row[word.len()] <= max_distance {
        if let Some(value) = node.value.as_ref() {
            emit(value, row[word.len()]);
        }
    }

    // The row minimum is the best distance any extension of this path can
    // still reach.
    let best = row.iter().copied().min().unwrap_or(usize::MAX);
    if best <= max_distance {
        if !at_boundary {
            search_from(node, offset + 1, &row, word, max_distance, emit);
        } else if let Some(child) = node.first_child.as_deref() {
            search_from(child, 0, &row, word, max_distance, emit);
        }
    }

    // Siblings branch at the same depth: they restart from the row this
    // node was entered with, which this node's own label cannot prune.
    if let Some(sibling) = node.next_sibling.as_deref() {
        search_from(sibling, 0, entry_row, word, max_distance, emit);
    }
}
