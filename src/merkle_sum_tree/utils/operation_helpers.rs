/// Smallest power of two >= `n`, with `next_power_of_two(0) == 1` so a
/// degenerate snapshot still yields a one-leaf tree. Iterative doubling; no
/// recursion.
pub fn next_power_of_two(n: usize) -> usize {
    let mut size = 1;
    while size < n {
        size <<= 1;
    }
    size
}

/// log2 of a power of two (the tree depth for `tree_size` leaves).
pub fn log2(n: usize) -> usize {
    debug_assert!(n.is_power_of_two());
    n.trailing_zeros() as usize
}
