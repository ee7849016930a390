//! Single-pass pipeline: generators → gamma/c → delta levels → degrees →
//! polynomials.
//!
//! Each stage runs once per [`HilbertPipeline`]; the delta enumeration is
//! memoized so that degree and polynomial queries share it.

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::delta::levels::{DeltaLevels, all_level_delta};
use crate::hilbert::degree::{all_level_degrees, all_level_hilb_delta};
use crate::hilbert::polynomial::HilbertPolynomial;
use crate::hilbert_error::HilbertError;
use crate::semigroup::analyzer::{SemigroupAnalysis, compute_gaps_and_frobenius};
use crate::semigroup::gamma::{Gamma, get_c, get_gamma};
use crate::semigroup::generators::Generators;

/// Knobs for a pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HilbertConfig {
    /// Membership bound for the semigroup sweep; `None` means
    /// `max(generators)^2`. A bound at or below the Frobenius number
    /// misreports the gap set.
    pub semigroup_limit: Option<u64>,
}

/// Everything a run produces, ready for printing or serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HilbertReport {
    pub generators: Generators,
    pub gaps: Vec<u64>,
    pub frobenius: u64,
    pub c: u64,
    pub gamma: Vec<u64>,
    pub level_sizes: Vec<usize>,
    /// Polynomials for levels `0..=c`.
    pub polynomials: Vec<HilbertPolynomial>,
}

impl HilbertReport {
    /// `(i, polynomial of level i - 1)` for `i = 1..=c`, the levels shown by
    /// default.
    pub fn printed_levels(&self) -> impl Iterator<Item = (usize, &HilbertPolynomial)> + '_ {
        self.polynomials
            .iter()
            .take(usize::try_from(self.c).unwrap_or(usize::MAX))
            .enumerate()
            .map(|(i, p)| (i + 1, p))
    }

    /// Coefficient lists for levels `0..c`.
    pub fn coefficients(&self) -> Vec<Vec<usize>> {
        self.printed_levels().map(|(_, p)| p.to_coef_list()).collect()
    }
}

#[derive(Debug)]
pub struct HilbertPipeline {
    analysis: SemigroupAnalysis,
    gamma: Gamma,
    c: u64,
    levels: OnceCell<DeltaLevels>,
}

impl HilbertPipeline {
    /// Analyse `generators` and build gamma. Fails if the semigroup has no
    /// Frobenius number.
    pub fn new(generators: &Generators, config: HilbertConfig) -> Result<Self, HilbertError> {
        let analysis = compute_gaps_and_frobenius(generators, config.semigroup_limit)?;
        let c = get_c(&analysis)?;
        let gamma = get_gamma(&analysis)?;
        log::info!(
            "pipeline {generators}: frobenius={} c={c} |gamma|={}",
            c - 1,
            gamma.len()
        );
        Ok(Self {
            analysis,
            gamma,
            c,
            levels: OnceCell::new(),
        })
    }

    pub fn analysis(&self) -> &SemigroupAnalysis {
        &self.analysis
    }

    pub fn gamma(&self) -> &Gamma {
        &self.gamma
    }

    pub fn c(&self) -> u64 {
        self.c
    }

    /// Delta levels `0..=c`, enumerated on first use.
    pub fn levels(&self) -> Result<&DeltaLevels, HilbertError> {
        self.levels
            .get_or_try_init(|| all_level_delta(&self.gamma, self.c))
    }

    /// Degrees per level, in each level's delta order.
    pub fn degrees(&self) -> Result<Vec<Vec<usize>>, HilbertError> {
        all_level_degrees(self.levels()?, &self.gamma, self.c)
    }

    /// Polynomials for levels `0..=c`.
    pub fn polynomials(&self) -> Result<Vec<HilbertPolynomial>, HilbertError> {
        all_level_hilb_delta(self.levels()?, &self.gamma, self.c)
    }

    pub fn report(&self) -> Result<HilbertReport, HilbertError> {
        let levels = self.levels()?;
        Ok(HilbertReport {
            generators: self.analysis.generators.clone(),
            gaps: self.analysis.gaps.clone(),
            frobenius: self.c - 1,
            c: self.c,
            gamma: self.gamma.elements().to_vec(),
            level_sizes: levels.sizes(),
            polynomials: self.polynomials()?,
        })
    }
}

/// Polynomials for levels `0..=c` with the default configuration.
pub fn get_polynomial(generators: &Generators) -> Result<Vec<HilbertPolynomial>, HilbertError> {
    HilbertPipeline::new(generators, HilbertConfig::default())?.polynomials()
}

/// Coefficient lists for levels `0..c` with the default configuration.
pub fn get_poly_coef(generators: &Generators) -> Result<Vec<Vec<usize>>, HilbertError> {
    Ok(HilbertPipeline::new(generators, HilbertConfig::default())?
        .report()?
        .coefficients())
}
