//! Gamma: the ambient domain over which delta sets live.
//!
//! Gamma is the list of non-gaps in `[0, c]` followed by every integer in
//! the half-open range `(c + 1) .. (g0 - 1) * c`, where `g0` is the first
//! generator as supplied and `c = frobenius + 1`. The tail bound is kept
//! exactly as given; it is what makes the enumeration deep enough to reach
//! level `c` for the generator sets this crate targets.

use hashbrown::HashSet;
use serde::Serialize;

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::hilbert_error::HilbertError;
use crate::semigroup::analyzer::SemigroupAnalysis;

/// Number of enumeration levels: Frobenius number plus one.
pub fn get_c(analysis: &SemigroupAnalysis) -> Result<u64, HilbertError> {
    analysis
        .frobenius
        .map(|f| f + 1)
        .ok_or(HilbertError::NoFrobeniusNumber)
}

/// Build gamma for the analysed semigroup.
pub fn get_gamma(analysis: &SemigroupAnalysis) -> Result<Gamma, HilbertError> {
    let c = get_c(analysis)?;
    let mut elements: Vec<u64> = (0..=c).filter(|&n| !analysis.is_gap(n)).collect();
    let tail_end = analysis
        .generators
        .first()
        .saturating_sub(1)
        .checked_mul(c)
        .ok_or(HilbertError::LimitTooLarge {
            limit: analysis.limit,
        })?;
    elements.extend((c + 1)..tail_end.max(c + 1));
    let gamma = Gamma::from_sorted(elements, c);
    crate::debug_invariants!(gamma.validate_invariants(), "get_gamma");
    Ok(gamma)
}

/// Strictly increasing element list plus a hash index for residue lookups.
#[derive(Clone, Debug, Serialize)]
pub struct Gamma {
    elements: Vec<u64>,
    #[serde(skip)]
    members: HashSet<u64>,
    c: u64,
}

impl PartialEq for Gamma {
    fn eq(&self, other: &Self) -> bool {
        self.c == other.c && self.elements == other.elements
    }
}

impl Eq for Gamma {}

impl Gamma {
    /// Wrap an ascending element list. `c` is the level count it was built for.
    pub fn from_sorted(elements: Vec<u64>, c: u64) -> Self {
        let members = elements.iter().copied().collect();
        Self { elements, members, c }
    }

    #[inline]
    pub fn elements(&self) -> &[u64] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The level count `c` gamma was built for.
    #[inline]
    pub fn c(&self) -> u64 {
        self.c
    }

    #[inline]
    pub fn contains(&self, n: u64) -> bool {
        self.members.contains(&n)
    }

    /// Whether `a - b` is a (non-negative) element of gamma.
    #[inline]
    pub fn contains_residual(&self, a: u64, b: u64) -> bool {
        a.checked_sub(b).is_some_and(|r| self.contains(r))
    }

    /// Elements in descending order.
    pub fn iter_desc(&self) -> impl Iterator<Item = u64> + '_ {
        self.elements.iter().rev().copied()
    }
}

impl DebugInvariants for Gamma {
    fn validate_invariants(&self) -> Result<(), HilbertError> {
        ensure(self.elements.first() == Some(&0), || {
            "gamma must start at 0".to_string()
        })?;
        ensure(self.elements.windows(2).all(|w| w[0] < w[1]), || {
            "gamma must be strictly increasing".to_string()
        })?;
        ensure(self.members.len() == self.elements.len(), || {
            format!(
                "gamma index holds {} values for {} elements",
                self.members.len(),
                self.elements.len()
            )
        })?;
        ensure(self.contains(self.c), || {
            format!("c = {} must be a member of gamma", self.c)
        })
    }
}
