//! Syzygy elements and the per-delta degree contribution.

use crate::delta::delta_set::DeltaSet;
use crate::delta::minimal::{Removal, delta_min, generate_delta};
use crate::hilbert_error::HilbertError;
use crate::semigroup::gamma::Gamma;

/// Largest element of gamma that is not in `delta`.
pub fn get_max_number_of_complement(delta: &DeltaSet, gamma: &Gamma) -> Result<u64, HilbertError> {
    gamma
        .iter_desc()
        .find(|&x| !delta.contains(x))
        .ok_or(HilbertError::EmptyComplement {
            delta_len: delta.len(),
        })
}

/// The lift of `delta`: `delta ∪ {number}`, ascending.
pub fn get_m_delta(delta: &DeltaSet, number: u64) -> DeltaSet {
    delta.with(number)
}

/// Elements of `delta` lying a gamma-residue above at least two minimal
/// generators of `delta`, in `delta`'s order.
pub fn calculate_syzygy_delta(delta: &[u64], gamma: &Gamma) -> Vec<u64> {
    let mins = delta_min(delta, gamma);
    delta
        .iter()
        .copied()
        .filter(|&d| {
            mins.iter()
                .filter(|&&m| gamma.contains_residual(d, m))
                .take(2)
                .count()
                >= 2
        })
        .collect()
}

/// Minimal generators below `gamma_index`, minus the syzygy generators below
/// `gamma_index` that reach gamma when shifted onto some minimal generator.
///
/// The difference is signed: a negative value means the inputs are
/// inconsistent, and callers must treat it as an error rather than clamp it.
pub fn calculate_cardinality_syzygy(
    delta: &[u64],
    gamma: &Gamma,
    gamma_index: u64,
    syz_delta: &[u64],
) -> i64 {
    let (mins, _) = generate_delta(delta, Removal::Nothing, gamma);
    let cardinality = mins.iter().filter(|&&m| m < gamma_index).count();

    let (syz_mins, _) = generate_delta(syz_delta, Removal::Nothing, gamma);
    let cardinality_syzygy = syz_mins
        .iter()
        .filter(|&&sm| sm < gamma_index)
        .filter(|&&sm| mins.iter().any(|&m| gamma.contains(gamma_index - sm + m)))
        .count();

    cardinality as i64 - cardinality_syzygy as i64
}
