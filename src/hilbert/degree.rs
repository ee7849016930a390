//! Degree assignment across levels.
//!
//! The degree of a delta at level `k` is its own syzygy-corrected
//! cardinality (see [`calculate_cardinality_syzygy`]) plus, for `k >= 1`,
//! the degree its lift `delta ∪ {max(gamma \ delta)}` received at level
//! `k - 1`. The previous level's table is passed in explicitly.

use hashbrown::HashMap;

use crate::delta::delta_set::DeltaSet;
use crate::delta::levels::DeltaLevels;
use crate::hilbert::polynomial::HilbertPolynomial;
use crate::hilbert::syzygy::{
    calculate_cardinality_syzygy, calculate_syzygy_delta, get_m_delta,
    get_max_number_of_complement,
};
use crate::hilbert_error::HilbertError;
use crate::semigroup::gamma::Gamma;

/// Degrees recorded for one level, keyed by delta set.
pub type DegreeTable = HashMap<DeltaSet, usize>;

/// Degrees of one level, in the level's delta order, plus the lookup table
/// the next level reads its lifts from.
#[derive(Clone, Debug, Default)]
pub struct LevelDegrees {
    pub degrees: Vec<usize>,
    pub table: DegreeTable,
}

impl LevelDegrees {
    /// Sum of one monomial `x^degree` per delta set.
    pub fn polynomial(&self) -> HilbertPolynomial {
        degree_polynomial(&self.degrees)
    }
}

/// Sum of `x^d` over `degrees`.
pub fn degree_polynomial(degrees: &[usize]) -> HilbertPolynomial {
    degrees
        .iter()
        .map(|&d| HilbertPolynomial::monomial(d))
        .sum()
}

/// Degree of `delta` ignoring the lift contribution.
pub fn base_degree(level: usize, delta: &DeltaSet, gamma: &Gamma) -> Result<usize, HilbertError> {
    let gamma_index = get_max_number_of_complement(delta, gamma)?;
    let syz_delta = calculate_syzygy_delta(delta, gamma);
    let value = calculate_cardinality_syzygy(delta, gamma, gamma_index, &syz_delta);
    degree_from_signed(level, delta, value)
}

/// A syzygy-corrected cardinality must be non-negative to serve as a degree.
fn degree_from_signed(level: usize, delta: &DeltaSet, value: i64) -> Result<usize, HilbertError> {
    usize::try_from(value).map_err(|_| HilbertError::NegativeDegree {
        level,
        delta: delta.to_vec(),
        value,
    })
}

/// Assign degrees to the delta sets of `level`, reading lifts from `previous`.
///
/// `previous` must be `Some` exactly when `level >= 1`.
pub fn level_degrees(
    level: usize,
    deltas: &[DeltaSet],
    gamma: &Gamma,
    previous: Option<&DegreeTable>,
) -> Result<LevelDegrees, HilbertError> {
    let mut out = LevelDegrees {
        degrees: Vec::with_capacity(deltas.len()),
        table: DegreeTable::with_capacity(deltas.len()),
    };
    for delta in deltas {
        let mut degree = base_degree(level, delta, gamma)?;
        if let Some(previous) = previous {
            let lift = get_m_delta(delta, get_max_number_of_complement(delta, gamma)?);
            degree += previous
                .get(&lift)
                .copied()
                .ok_or_else(|| HilbertError::MissingLiftDegree {
                    level,
                    lift: lift.into_vec(),
                })?;
        }
        log::trace!("level {level}: delta {:?} -> degree {degree}", delta.as_slice());
        out.degrees.push(degree);
        out.table.insert(delta.clone(), degree);
    }
    Ok(out)
}

/// Degrees for levels `0..=c`, in level and delta order.
pub fn all_level_degrees(
    levels: &DeltaLevels,
    gamma: &Gamma,
    c: u64,
) -> Result<Vec<Vec<usize>>, HilbertError> {
    let count = usize::try_from(c).map_or(levels.len(), |c| c.saturating_add(1));
    let mut previous: Option<DegreeTable> = None;
    let mut all = Vec::with_capacity(count.min(levels.len()));
    for (k, deltas) in levels.iter().take(count).enumerate() {
        let current = level_degrees(k, deltas, gamma, previous.as_ref())?;
        all.push(current.degrees);
        previous = Some(current.table);
    }
    Ok(all)
}

/// One polynomial per level `0..=c`: coefficient `d` counts the delta sets
/// at that level with degree `d`.
pub fn all_level_hilb_delta(
    levels: &DeltaLevels,
    gamma: &Gamma,
    c: u64,
) -> Result<Vec<HilbertPolynomial>, HilbertError> {
    let degrees = all_level_degrees(levels, gamma, c)?;
    Ok(degrees
        .iter()
        .enumerate()
        .map(|(k, level)| {
            let poly = degree_polynomial(level);
            log::debug!("level {k}: {} delta sets, polynomial {poly}", level.len());
            poly
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::levels::all_level_delta;

    fn gamma_3_4() -> Gamma {
        Gamma::from_sorted(vec![0, 3, 4, 6, 7, 8, 9, 10, 11], 6)
    }

    #[test]
    fn level_zero_has_degree_zero() {
        let g = gamma_3_4();
        let levels = all_level_delta(&g, 6).unwrap();
        let l0 = level_degrees(0, levels.level(0), &g, None).unwrap();
        assert_eq!(l0.degrees, vec![0]);
    }

    #[test]
    fn lifts_accumulate_previous_degrees() {
        let g = gamma_3_4();
        let levels = all_level_delta(&g, 6).unwrap();
        let degrees = all_level_degrees(&levels, &g, 6).unwrap();
        assert_eq!(degrees[1], vec![0, 1]);
        // [3, 6, 7, 9, 10, 11] lifts to [3, 6, 7, 8, 9, 10, 11] (degree 1).
        assert_eq!(degrees[2][2], 2);
    }

    #[test]
    fn polynomials_for_three_four() {
        let g = gamma_3_4();
        let levels = all_level_delta(&g, 6).unwrap();
        let polys = all_level_hilb_delta(&levels, &g, 6).unwrap();
        let coefs: Vec<Vec<usize>> = polys.iter().map(|p| p.to_coef_list()).collect();
        assert_eq!(
            coefs,
            vec![
                vec![1],
                vec![1, 1],
                vec![1, 1, 1],
                vec![1, 1, 2],
                vec![1, 1, 2],
                vec![1, 1, 2, 1],
                vec![1, 1, 2],
            ]
        );
    }

    #[test]
    fn negative_cardinality_is_not_a_degree() {
        let delta = DeltaSet::new(vec![3, 4]);
        assert_eq!(degree_from_signed(2, &delta, 3), Ok(3));
        assert_eq!(
            degree_from_signed(2, &delta, -1),
            Err(HilbertError::NegativeDegree {
                level: 2,
                delta: vec![3, 4],
                value: -1,
            })
        );
    }

    #[test]
    fn degree_polynomial_counts_each_degree() {
        let poly = degree_polynomial(&[0, 2, 1, 2]);
        assert_eq!(poly.to_coef_list(), vec![1, 1, 2]);
        assert_eq!(degree_polynomial(&[]).to_coef_list(), vec![0]);
    }

    #[test]
    fn missing_lift_is_reported() {
        let g = gamma_3_4();
        let orphan = DeltaSet::new(vec![4, 6, 7, 8, 9, 10, 11]);
        let err = level_degrees(1, &[orphan], &g, Some(&DegreeTable::new())).unwrap_err();
        assert_eq!(
            err,
            HilbertError::MissingLiftDegree {
                level: 1,
                lift: vec![3, 4, 6, 7, 8, 9, 10, 11],
            }
        );
    }
}
