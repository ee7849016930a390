//! Delta sets, their minimal generators, and the level enumeration.

pub mod delta_set;
pub mod levels;
pub mod minimal;

pub use delta_set::DeltaSet;
pub use levels::{DeltaLevels, all_level_delta, base_delta, next_level};
pub use minimal::{Removal, delta_min, generate_delta};
