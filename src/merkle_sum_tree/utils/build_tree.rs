use crate::merkle_sum_tree::utils::create_middle_node::create_middle_node;
use crate::merkle_sum_tree::utils::operation_helpers::{log2, next_power_of_two};
use crate::merkle_sum_tree::{Node, TreeError, UserRecord};
use ark_std::{end_timer, start_timer};
use std::thread;

/// Builds the full tree as a flat 1-indexed array of length `2 * tree_size`:
/// index 0 unused, root at index 1, node `i`'s children at `2i` and `2i+1`,
/// leaves (real records first, then `EMPTY` padding) at
/// `[tree_size, 2 * tree_size)`.
///
/// All-or-nothing: the first integrity error from the combiner aborts the
/// build and no array is returned.
pub fn build_merkle_tree_from_records(records: &[UserRecord]) -> Result<Vec<Node>, TreeError> {
    let tree_size = next_power_of_two(records.len());
    let depth = log2(tree_size);

    let mut tree = vec![Node::empty(); 2 * tree_size];

    let timer = start_timer!(|| "compute leaves");
    compute_leaves(records, &mut tree[tree_size..]);
    end_timer!(timer);

    // Fold one level at a time, bottom-up. Nodes within a level are mutually
    // independent; the pairing (2i, 2i+1) is fixed and never reordered.
    for level in (0..depth).rev() {
        let timer = start_timer!(|| "compute middle level");
        compute_level(&mut tree, level)?;
        end_timer!(timer);
    }

    Ok(tree)
}

// Encode the leaves in parallel chunks
fn compute_leaves(records: &[UserRecord], leaves: &mut [Node]) {
    if records.is_empty() {
        return;
    }

    let chunk_size = (records.len() + num_cpus::get() - 1) / num_cpus::get();
    thread::scope(|s| {
        for (chunk, out) in records
            .chunks(chunk_size)
            .zip(leaves.chunks_mut(chunk_size))
        {
            s.spawn(move || {
                for (record, slot) in chunk.iter().zip(out.iter_mut()) {
                    *slot = record.compute_leaf();
                }
            });
        }
    });
}

// If the level is small, compute the nodes sequentially;
// otherwise, compute the nodes in parallel chunks with a barrier at the end
fn compute_level(tree: &mut [Node], level: usize) -> Result<(), TreeError> {
    let level_len = 1 << level;

    // this level occupies [level_len, 2 * level_len),
    // its children occupy [2 * level_len, 4 * level_len)
    let (upper, children) = tree.split_at_mut(2 * level_len);
    let parents = &mut upper[level_len..];
    let children = &children[..2 * level_len];

    let workers = num_cpus::get();
    if level_len <= workers {
        for (i, parent) in parents.iter_mut().enumerate() {
            *parent = create_middle_node(&children[2 * i], &children[2 * i + 1])?;
        }
        return Ok(());
    }

    let chunk_size = (level_len + workers - 1) / workers;
    thread::scope(|s| {
        let mut handles = Vec::new();
        for (parent_chunk, child_chunk) in parents
            .chunks_mut(chunk_size)
            .zip(children.chunks(2 * chunk_size))
        {
            handles.push(s.spawn(move || -> Result<(), TreeError> {
                for (parent, pair) in parent_chunk.iter_mut().zip(child_chunk.chunks(2)) {
                    *parent = create_middle_node(&pair[0], &pair[1])?;
                }
                Ok(())
            }));
        }

        for handle in handles {
            handle.join().expect("tree worker panicked")?;
        }
        Ok(())
    })
}
