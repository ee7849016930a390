//! Validated generator lists for numerical semigroups.

use serde::Serialize;

use crate::hilbert_error::HilbertError;

/// An ordered list of distinct positive integers with gcd 1.
///
/// Order is significant: the first generator fixes the length of gamma's
/// tail (see [`get_gamma`](crate::semigroup::gamma::get_gamma)).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Generators(Vec<u64>);

impl Generators {
    /// Validate `values` and wrap them, keeping the caller's order.
    pub fn new(values: Vec<u64>) -> Result<Self, HilbertError> {
        if values.is_empty() {
            return Err(HilbertError::EmptyGenerators);
        }
        if values.contains(&0) {
            return Err(HilbertError::NonPositiveGenerator(0));
        }
        let mut seen = hashbrown::HashSet::with_capacity(values.len());
        for &g in &values {
            if !seen.insert(g) {
                return Err(HilbertError::DuplicateGenerator(g));
            }
        }
        let g = values.iter().copied().fold(0, gcd);
        if g != 1 {
            return Err(HilbertError::NotCoprime { gcd: g });
        }
        Ok(Self(values))
    }

    /// The generators in the order they were supplied.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// The first generator as supplied (not necessarily the smallest).
    #[inline]
    pub fn first(&self) -> u64 {
        self.0[0]
    }

    /// The largest generator.
    #[inline]
    pub fn max(&self) -> u64 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Default membership bound: the square of the largest generator.
    pub fn default_limit(&self) -> Result<u64, HilbertError> {
        self.max()
            .checked_mul(self.max())
            .ok_or(HilbertError::LimitTooLarge { limit: u64::MAX })
    }
}

impl TryFrom<&[i64]> for Generators {
    type Error = HilbertError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        let unsigned = values
            .iter()
            .map(|&v| {
                if v > 0 {
                    Ok(v as u64)
                } else {
                    Err(HilbertError::NonPositiveGenerator(v))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(unsigned)
    }
}

impl std::fmt::Display for Generators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", itertools::join(&self.0, ", "))
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}
