//! `DeltaSet`: a finite subset of gamma kept as an ascending sequence.
//!
//! Every delta set produced by the enumerator is obtained from gamma by
//! deleting elements, so it stays sorted and duplicate-free. Keeping that
//! canonical form means sequence equality *is* set equality, which lets the
//! type be used directly as a hash key for level deduplication and degree
//! lookups.

use std::ops::Deref;

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeltaSet(Vec<u64>);

impl DeltaSet {
    /// Canonicalize arbitrary input: sort ascending and drop repeats.
    pub fn new(mut elements: Vec<u64>) -> Self {
        elements.sort_unstable();
        elements.dedup();
        Self(elements)
    }

    /// Wrap a sequence already known to be strictly increasing.
    #[inline]
    pub(crate) fn from_sorted(elements: Vec<u64>) -> Self {
        debug_assert!(elements.windows(2).all(|w| w[0] < w[1]));
        Self(elements)
    }

    /// Copy of `self` with every occurrence of `x` removed.
    pub fn without(&self, x: u64) -> Self {
        Self(self.0.iter().copied().filter(|&d| d != x).collect())
    }

    /// Copy of `self` with `x` inserted in order (no-op if already present).
    pub fn with(&self, x: u64) -> Self {
        let mut out = self.0.clone();
        if let Err(pos) = out.binary_search(&x) {
            out.insert(pos, x);
        }
        Self(out)
    }

    #[inline]
    pub fn contains(&self, x: u64) -> bool {
        self.0.binary_search(&x).is_ok()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }

    /// Whether the elements are strictly increasing.
    pub fn is_canonical(&self) -> bool {
        self.0.windows(2).all(|w| w[0] < w[1])
    }
}

impl Deref for DeltaSet {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}
