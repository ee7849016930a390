//! Single-variable polynomials as ascending coefficient sequences.
//!
//! Index `i` holds the coefficient of `x^i`. Trailing zero coefficients are
//! never stored, so the zero polynomial has no coefficients at all.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use num_traits::{One, Zero};
use serde::Serialize;

/// Polynomial with coefficients of type `C`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Polynomial<C> {
    coefficients: Vec<C>,
}

/// Level polynomial: coefficient `d` counts the delta sets of degree `d`.
pub type HilbertPolynomial = Polynomial<usize>;

impl<C> Polynomial<C>
where
    C: Copy + Zero + One + AddAssign,
{
    /// Build from ascending coefficients, dropping trailing zeros.
    pub fn new(mut coefficients: Vec<C>) -> Self {
        while coefficients.last().is_some_and(|c| c.is_zero()) {
            coefficients.pop();
        }
        Self { coefficients }
    }

    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    /// `x^degree` with coefficient one.
    pub fn monomial(degree: usize) -> Self {
        let mut coefficients = vec![C::zero(); degree + 1];
        coefficients[degree] = C::one();
        Self { coefficients }
    }

    /// Stored coefficients (empty for the zero polynomial).
    #[inline]
    pub fn coefficients(&self) -> &[C] {
        &self.coefficients
    }

    /// Coefficient list with the zero polynomial written as `[0]`.
    pub fn to_coef_list(&self) -> Vec<C> {
        if self.coefficients.is_empty() {
            vec![C::zero()]
        } else {
            self.coefficients.clone()
        }
    }

    /// Coefficient of `x^power`.
    pub fn coefficient(&self, power: usize) -> C {
        self.coefficients.get(power).copied().unwrap_or_else(C::zero)
    }

    /// Highest power with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Value at `x = 1`.
    pub fn coefficient_sum(&self) -> C {
        let mut total = C::zero();
        for &c in &self.coefficients {
            total += c;
        }
        total
    }
}

impl<C> AddAssign<&Polynomial<C>> for Polynomial<C>
where
    C: Copy + Zero + One + AddAssign,
{
    fn add_assign(&mut self, rhs: &Polynomial<C>) {
        if rhs.coefficients.len() > self.coefficients.len() {
            self.coefficients.resize(rhs.coefficients.len(), C::zero());
        }
        for (lhs, &c) in self.coefficients.iter_mut().zip(&rhs.coefficients) {
            *lhs += c;
        }
        while self.coefficients.last().is_some_and(|c| c.is_zero()) {
            self.coefficients.pop();
        }
    }
}

impl<C> Add for Polynomial<C>
where
    C: Copy + Zero + One + AddAssign,
{
    type Output = Polynomial<C>;

    fn add(mut self, rhs: Polynomial<C>) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<C> Sum for Polynomial<C>
where
    C: Copy + Zero + One + AddAssign,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn superscript(n: usize) -> String {
    n.to_string()
        .bytes()
        .map(|b| SUPERSCRIPTS[(b - b'0') as usize])
        .collect()
}

/// Ascending rendering with every term shown, e.g. `1 + 0·x + 2·x²`.
impl<C> fmt::Display for Polynomial<C>
where
    C: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return f.write_str("0");
        }
        for (power, c) in self.coefficients.iter().enumerate() {
            if power > 0 {
                f.write_str(" + ")?;
            }
            match power {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}·x")?,
                _ => write!(f, "{c}·x{}", superscript(power))?,
            }
        }
        Ok(())
    }
}
