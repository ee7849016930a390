//! Minimal generators of a delta set relative to gamma.
//!
//! An element `d` of a delta set is *minimal* unless `d - m` lies in gamma
//! for some minimal element `m` already accepted. Elements are visited in
//! the order given, so the first element is always minimal.

use crate::semigroup::gamma::Gamma;

/// Optional element deletion for [`generate_delta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Keep the input unchanged.
    Nothing,
    /// Drop every occurrence of this value first.
    Element(u64),
}

/// Minimal generators of `delta` (a subsequence of `delta`, in its order).
pub fn delta_min(delta: &[u64], gamma: &Gamma) -> Vec<u64> {
    let mut mins: Vec<u64> = Vec::new();
    for &d in delta {
        if !mins.iter().any(|&m| gamma.contains_residual(d, m)) {
            mins.push(d);
        }
    }
    mins
}

/// Apply `removal` to `delta_0`, then take minimal generators of the result.
///
/// Returns `(minimal_generators, filtered)`.
pub fn generate_delta(delta_0: &[u64], removal: Removal, gamma: &Gamma) -> (Vec<u64>, Vec<u64>) {
    let filtered: Vec<u64> = match removal {
        Removal::Nothing => delta_0.to_vec(),
        Removal::Element(x) => delta_0.iter().copied().filter(|&d| d != x).collect(),
    };
    (delta_min(&filtered, gamma), filtered)
}
