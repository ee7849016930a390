//! Semigroup membership, gap set and Frobenius number.
//!
//! Membership is decided by a forward sweep over `0..=limit`: `i` belongs to
//! the semigroup iff `i - g` does for some generator `g <= i`. Processing `i`
//! in increasing order lets every discovered member feed later ones.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::hilbert_error::HilbertError;
use crate::semigroup::generators::Generators;

/// Membership set of the semigroup generated by `generators`, restricted to
/// `[0, limit]`. `limit` defaults to `max(generators)^2`.
pub fn compute_numerical_semigroup(
    generators: &Generators,
    limit: Option<u64>,
) -> Result<BTreeSet<u64>, HilbertError> {
    let limit = resolve_limit(generators, limit)?;
    let member = membership_table(generators, limit)?;
    Ok(member
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i as u64))
        .collect())
}

fn resolve_limit(generators: &Generators, limit: Option<u64>) -> Result<u64, HilbertError> {
    match limit {
        Some(limit) => Ok(limit),
        None => generators.default_limit(),
    }
}

fn membership_table(generators: &Generators, limit: u64) -> Result<Vec<bool>, HilbertError> {
    let too_large = || HilbertError::LimitTooLarge { limit };
    let len = usize::try_from(limit)
        .ok()
        .and_then(|l| l.checked_add(1))
        .ok_or_else(too_large)?;
    let mut member = Vec::new();
    member.try_reserve_exact(len).map_err(|_| too_large())?;
    member.resize(len, false);
    member[0] = true;
    for i in 1..len {
        member[i] = generators
            .as_slice()
            .iter()
            .filter_map(|&g| usize::try_from(g).ok())
            .any(|g| g <= i && member[i - g]);
    }
    Ok(member)
}

/// Gap set and Frobenius number of a numerical semigroup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SemigroupAnalysis {
    /// The generators this analysis was computed from.
    pub generators: Generators,
    /// Bound used for the membership sweep.
    pub limit: u64,
    /// Non-members in `[0, limit)`, ascending.
    pub gaps: Vec<u64>,
    /// Largest gap; `None` when there are no gaps (1 is a generator).
    pub frobenius: Option<u64>,
}

impl SemigroupAnalysis {
    /// Whether `n` is a gap. Values at or beyond the bound never are.
    pub fn is_gap(&self, n: u64) -> bool {
        self.gaps.binary_search(&n).is_ok()
    }
}

/// Compute gaps in `[0, limit)` and the Frobenius number.
///
/// Fails with [`HilbertError::LimitTooLarge`] when the bound (given or
/// defaulted) cannot be held in memory.
pub fn compute_gaps_and_frobenius(
    generators: &Generators,
    limit: Option<u64>,
) -> Result<SemigroupAnalysis, HilbertError> {
    let limit = resolve_limit(generators, limit)?;
    let member = membership_table(generators, limit)?;
    let gaps: Vec<u64> = member[..member.len() - 1]
        .iter()
        .enumerate()
        .filter_map(|(n, &m)| (!m).then_some(n as u64))
        .collect();
    let frobenius = gaps.last().copied();
    log::debug!(
        "semigroup {generators}: limit={limit} genus={} frobenius={frobenius:?}",
        gaps.len()
    );
    Ok(SemigroupAnalysis {
        generators: generators.clone(),
        limit,
        gaps,
        frobenius,
    })
}

/// Frobenius number with the default bound.
pub fn get_frobenius_number(generators: &Generators) -> Result<Option<u64>, HilbertError> {
    Ok(compute_gaps_and_frobenius(generators, None)?.frobenius)
}
