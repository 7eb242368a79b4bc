//! Full permutation generation by recursive descent.
//!
//! O(N!·N) time and space — exhaustive by design, no memoization, no
//! pruning. Only suitable for small N (the optimizer caps roster size for
//! this reason).

/// Generate every permutation of `values`, in position-lexicographic
/// order: for each position in turn, that element is fixed as the head
/// and prepended to every permutation of the remainder.
///
/// N ≤ 1 yields the single identity permutation (one empty sequence for
/// N = 0). Elements are taken by position, so duplicates in `values`
/// produce duplicate permutations; the optimizer only ever passes
/// distinct indices.
pub fn permutations<T: Clone>(values: &[T]) -> Vec<Vec<T>> {
    if values.len() <= 1 {
        return vec![values.to_vec()];
    }

    let mut all = Vec::new();
    for (index, head) in values.iter().enumerate() {
        let mut rest = Vec::with_capacity(values.len() - 1);
        rest.extend_from_slice(&values[..index]);
        rest.extend_from_slice(&values[index + 1..]);

        for tail in permutations(&rest) {
            let mut arrangement = Vec::with_capacity(values.len());
            arrangement.push(head.clone());
            arrangement.extend(tail);
            all.push(arrangement);
        }
    }
    all
}

/// Permutations of the index set `0..n`.
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let indices: Vec<usize> = (0..n).collect();
    permutations(&indices)
}
