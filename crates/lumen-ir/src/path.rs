//! Path labels and the path-space enumerator.
//!
//! A [`PathLabel`] names one spatial propagation path of the optical
//! network as a fixed-length bit tuple; each bit position corresponds to
//! one path-encoded qubit. The enumeration functions here drive every gate
//! lowering, so their order must be deterministic: it fixes the relative
//! ordering of the elements a gate compiles to, and with it the layout of
//! composed circuits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-length bit tuple identifying one spatial path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathLabel(Vec<u8>);

impl PathLabel {
    /// Create a label from raw bits.
    ///
    /// # Panics
    ///
    /// Panics if any entry is not 0 or 1.
    pub fn from_bits(bits: impl Into<Vec<u8>>) -> Self {
        let bits = bits.into();
        assert!(
            bits.iter().all(|&b| b <= 1),
            "PathLabel bits must be 0 or 1"
        );
        Self(bits)
    }

    /// Number of bits in the label.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the label has no bits (single-path network).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bit at position `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn bit(&self, idx: usize) -> u8 {
        self.0[idx]
    }

    /// A copy of this label with the bit at `idx` set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range or `value` is not 0 or 1.
    #[must_use]
    pub fn with_bit(&self, idx: usize, value: u8) -> Self {
        assert!(value <= 1, "PathLabel bits must be 0 or 1");
        let mut bits = self.0.clone();
        bits[idx] = value;
        Self(bits)
    }

    /// The raw bits, most significant first.
    pub fn bits(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PathLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for PathLabel {
    fn from(bits: Vec<u8>) -> Self {
        PathLabel::from_bits(bits)
    }
}

impl From<&[u8]> for PathLabel {
    fn from(bits: &[u8]) -> Self {
        PathLabel::from_bits(bits.to_vec())
    }
}

/// All `2^n_bits` labels of length `n_bits`, in lexicographic order with
/// the most significant bit first: `00, 01, 10, 11`.
///
/// The order is identical across calls; callers rely on it for stage
/// ordering within a gate.
pub fn all_bitstrings(n_bits: usize) -> Vec<PathLabel> {
    let count = 1usize << n_bits;
    (0..count)
        .map(|value| {
            let bits = (0..n_bits)
                .map(|pos| ((value >> (n_bits - 1 - pos)) & 1) as u8)
                .collect();
            PathLabel(bits)
        })
        .collect()
}

/// The perfect matching of all length-`n_bits` labels into pairs that
/// differ only at bit `idx`.
///
/// The first member of each pair has a 0 at `idx`, the second a 1. Every
/// label appears in exactly one pair, so `2^(n_bits-1)` pairs come back
/// (for `n_bits >= 1`). Pair order follows [`all_bitstrings`].
///
/// # Panics
///
/// Panics if `idx >= n_bits`.
pub fn pairs_at_bit(n_bits: usize, idx: usize) -> Vec<(PathLabel, PathLabel)> {
    assert!(idx < n_bits, "bit index {idx} out of range for {n_bits} bits");
    all_bitstrings(n_bits)
        .into_iter()
        .filter(|label| label.bit(idx) == 0)
        .map(|label| {
            let flipped = label.with_bit(idx, 1);
            (label, flipped)
        })
        .collect()
}

/// All length-`n_bits` labels whose bit at `idx` equals `value`.
///
/// # Panics
///
/// Panics if `idx >= n_bits`.
pub fn labels_with_bit(n_bits: usize, idx: usize, value: u8) -> Vec<PathLabel> {
    assert!(idx < n_bits, "bit index {idx} out of range for {n_bits} bits");
    all_bitstrings(n_bits)
        .into_iter()
        .filter(|label| label.bit(idx) == value)
        .collect()
}

/// Pairing for path qubit `k` under the polarization+path convention:
/// labels have `num_qubits - 1` bits and qubit `k` owns bit `k - 2`.
///
/// Callers must ensure `k` is in `[2, num_qubits]`; the gate compiler
/// validates operands before reaching this point.
pub fn paired_paths_for_qubit(num_qubits: usize, k: usize) -> Vec<(PathLabel, PathLabel)> {
    pairs_at_bit(num_qubits - 1, k - 2)
}

/// Labels whose bit for path qubit `k` equals `value`, under the
/// polarization+path convention. Same precondition as
/// [`paired_paths_for_qubit`].
pub fn paths_with_bit(num_qubits: usize, k: usize, value: u8) -> Vec<PathLabel> {
    labels_with_bit(num_qubits - 1, k - 2, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_bitstrings_order() {
        let labels = all_bitstrings(2);
        let rendered: Vec<String> = labels.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["00", "01", "10", "11"]);
    }

    #[test]
    fn test_all_bitstrings_empty() {
        let labels = all_bitstrings(0);
        assert_eq!(labels.len(), 1);
        assert!(labels[0].is_empty());
    }

    #[test]
    fn test_pairs_at_bit_matching() {
        // All 8 labels of length 3 must show up in exactly one pair.
        let pairs = pairs_at_bit(3, 1);
        assert_eq!(pairs.len(), 4);

        let mut seen = HashSet::new();
        for (zero, one) in &pairs {
            assert_eq!(zero.bit(1), 0);
            assert_eq!(one.bit(1), 1);
            assert_eq!(zero.with_bit(1, 1), one.clone());
            assert!(seen.insert(zero.clone()));
            assert!(seen.insert(one.clone()));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_labels_with_bit() {
        let ones = labels_with_bit(3, 0, 1);
        assert_eq!(ones.len(), 4);
        assert!(ones.iter().all(|label| label.bit(0) == 1));
    }

    #[test]
    fn test_pol_path_convention() {
        // N=3: labels have 2 bits, qubit 2 owns bit 0.
        let pairs = paired_paths_for_qubit(3, 2);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, PathLabel::from_bits(vec![0, 0]));
        assert_eq!(pairs[0].1, PathLabel::from_bits(vec![1, 0]));

        let zeros = paths_with_bit(3, 3, 0);
        assert_eq!(zeros.len(), 2);
        assert!(zeros.iter().all(|label| label.bit(1) == 0));
    }

    #[test]
    fn test_with_bit_leaves_original() {
        let label = PathLabel::from_bits(vec![0, 1]);
        let flipped = label.with_bit(0, 1);
        assert_eq!(label.bit(0), 0);
        assert_eq!(flipped.bit(0), 1);
        assert_eq!(flipped.bit(1), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_pairs_bad_index_panics() {
        let _ = pairs_at_bit(2, 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn all_bitstrings_distinct_and_complete(n in 0usize..10) {
                let labels = all_bitstrings(n);
                prop_assert_eq!(labels.len(), 1 << n);
                prop_assert!(labels.iter().all(|l| l.len() == n));
                let unique: HashSet<_> = labels.iter().cloned().collect();
                prop_assert_eq!(unique.len(), labels.len());
            }

            #[test]
            fn pairs_form_perfect_matching(n in 1usize..9, idx_seed in 0usize..8) {
                let idx = idx_seed % n;
                let pairs = pairs_at_bit(n, idx);
                prop_assert_eq!(pairs.len(), 1 << (n - 1));

                let mut seen = HashSet::new();
                for (zero, one) in &pairs {
                    prop_assert_eq!(zero.bit(idx), 0);
                    prop_assert_eq!(one.bit(idx), 1);
                    prop_assert!(seen.insert(zero.clone()));
                    prop_assert!(seen.insert(one.clone()));
                }
                prop_assert_eq!(seen.len(), 1 << n);
            }

            #[test]
            fn bit_filter_partitions(n in 1usize..9, idx_seed in 0usize..8) {
                let idx = idx_seed % n;
                let zeros = labels_with_bit(n, idx, 0);
                let ones = labels_with_bit(n, idx, 1);
                prop_assert_eq!(zeros.len(), 1 << (n - 1));
                prop_assert_eq!(ones.len(), 1 << (n - 1));
                let union: HashSet<_> = zeros.iter().chain(ones.iter()).cloned().collect();
                prop_assert_eq!(union.len(), 1 << n);
            }
        }
    }
}
