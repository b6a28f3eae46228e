//! Index combination enumeration.
//!
//! Every best-subset search in the evaluator and every exhaustive board
//! enumeration walks k-subsets of `0..n` in lexicographic order. Each
//! combination is a small `Copy` value, so iterators carry no shared
//! mutable state and can be used from many threads at once.

/// Largest subset size supported.
pub const MAX_K: usize = 8;

/// One k-subset of indices, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    idx: [u8; MAX_K],
    len: u8,
}

impl Combo {
    /// The indices of this combination.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.idx[..self.len as usize]
    }
}

/// Lexicographic iterator over all k-subsets of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    current: Option<[u8; MAX_K]>,
}

impl Combinations {
    /// Iterate all `C(n, k)` subsets. Yields nothing when `k > n`, and a
    /// single empty combination when `k == 0`.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(k <= MAX_K, "subset size {} exceeds {}", k, MAX_K);
        let current = if k <= n {
            let mut idx = [0u8; MAX_K];
            for (i, slot) in idx.iter_mut().enumerate().take(k) {
                *slot = i as u8;
            }
            Some(idx)
        } else {
            None
        };
        Self { n, k, current }
    }
}

impl Iterator for Combinations {
    type Item = Combo;

    fn next(&mut self) -> Option<Combo> {
        let idx = self.current?;
        let combo = Combo {
            idx,
            len: self.k as u8,
        };

        // Advance: find the rightmost index that can still move right
        let mut next = idx;
        let mut i = self.k;
        loop {
            if i == 0 {
                self.current = None;
                break;
            }
            i -= 1;
            if (next[i] as usize) < self.n - self.k + i {
                next[i] += 1;
                for j in i + 1..self.k {
                    next[j] = next[j - 1] + 1;
                }
                self.current = Some(next);
                break;
            }
        }

        Some(combo)
    }
}

/// Binomial coefficient `C(n, k)`.
pub fn n_choose_k(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_binomial() {
        for n in 0..=9 {
            for k in 0..=n.min(MAX_K) {
                let count = Combinations::new(n, k).count() as u64;
                assert_eq!(count, n_choose_k(n, k), "C({}, {})", n, k);
            }
        }
        assert_eq!(n_choose_k(7, 5), 21);
        assert_eq!(n_choose_k(52, 5), 2_598_960);
        assert_eq!(n_choose_k(3, 5), 0);
    }

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<Vec<u8>> = Combinations::new(4, 2)
            .map(|c| c.as_slice().to_vec())
            .collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_edge_sizes() {
        let empty: Vec<Combo> = Combinations::new(5, 0).collect();
        assert_eq!(empty.len(), 1);
        assert!(empty[0].as_slice().is_empty());

        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert_eq!(Combinations::new(5, 5).count(), 1);
    }
}
