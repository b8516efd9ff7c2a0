//! Set helpers.

use std::hash::{BuildHasher, Hash};

use hashbrown::HashSet;

/// Returns true when `first` and `second` share no element.
pub fn is_disjoint<T, S>(first: &HashSet<T, S>, second: &HashSet<T, S>) -> bool
where
    T: Eq + Hash,
    S: BuildHasher,
{
    first.intersection(second).next().is_none()
}
