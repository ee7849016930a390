//! Level-by-level enumeration of delta sets.
//!
//! Level 0 holds the single delta `gamma \ {0}`. Level `k + 1` collects,
//! for every delta at level `k` and every minimal generator `m` of it, the
//! delta with `m` deleted. Repeats are dropped on first sight, so each level
//! lists its distinct delta sets in the order they were first produced.

use itertools::Itertools;
use serde::Serialize;

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::delta::delta_set::DeltaSet;
use crate::delta::minimal::delta_min;
use crate::hilbert_error::HilbertError;
use crate::semigroup::gamma::Gamma;

/// Delta sets per level, `levels[k]` for `k = 0..=c`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeltaLevels {
    levels: Vec<Vec<DeltaSet>>,
}

impl DeltaLevels {
    /// Delta sets at level `k`, or an empty slice past the last level.
    pub fn level(&self, k: usize) -> &[DeltaSet] {
        self.levels.get(k).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of levels (`c + 1`).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[DeltaSet]> + '_ {
        self.levels.iter().map(Vec::as_slice)
    }

    /// `|D_k|` for each level.
    pub fn sizes(&self) -> Vec<usize> {
        self.levels.iter().map(Vec::len).collect()
    }
}

/// Starting state: gamma with 0 removed.
pub fn base_delta(gamma: &Gamma) -> DeltaSet {
    DeltaSet::from_sorted(gamma.elements().iter().copied().filter(|&x| x != 0).collect())
}

/// Distinct successors of `level`, in first-produced order.
pub fn next_level(level: &[DeltaSet], gamma: &Gamma) -> Vec<DeltaSet> {
    level
        .iter()
        .flat_map(|delta| {
            delta_min(delta, gamma)
                .into_iter()
                .map(move |m| delta.without(m))
        })
        .unique()
        .collect()
}

/// Enumerate levels `0..=c`.
///
/// Fails with [`HilbertError::LevelsExhausted`] if some level up to `c`
/// ends up empty, which happens when gamma is too short to support `c`
/// removal steps.
pub fn all_level_delta(gamma: &Gamma, c: u64) -> Result<DeltaLevels, HilbertError> {
    let depth = c as usize;
    let mut levels = Vec::with_capacity(depth + 1);
    levels.push(vec![base_delta(gamma)]);
    for k in 1..=depth {
        let next = next_level(&levels[k - 1], gamma);
        if next.is_empty() {
            return Err(HilbertError::LevelsExhausted {
                level: k,
                levels: depth,
            });
        }
        log::debug!("delta level {k}: {} sets", next.len());
        levels.push(next);
    }
    let out = DeltaLevels { levels };
    crate::debug_invariants!(out.validate_invariants(), "all_level_delta");
    Ok(out)
}

impl DebugInvariants for DeltaLevels {
    fn validate_invariants(&self) -> Result<(), HilbertError> {
        let base_len = match self.levels.first().map(Vec::as_slice) {
            Some([base]) => base.len(),
            _ => {
                return Err(HilbertError::InvariantViolation(
                    "level 0 must hold exactly one delta set".into(),
                ));
            }
        };
        for (k, level) in self.levels.iter().enumerate() {
            ensure(level.iter().all_unique(), || {
                format!("level {k} contains a repeated delta set")
            })?;
            for delta in level {
                ensure(delta.is_canonical(), || {
                    format!("level {k} delta {:?} is not strictly increasing", delta.as_slice())
                })?;
                ensure(delta.len() + k == base_len, || {
                    format!(
                        "level {k} delta has {} elements, expected {}",
                        delta.len(),
                        base_len.saturating_sub(k)
                    )
                })?;
            }
        }
        Ok(())
    }
}
