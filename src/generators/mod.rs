//! Generator pipelines
//!
//! Each pipeline is a pure function of its random number stream (and, for
//! resource allocation, its input rows). The CLI layer handles file I/O.

pub mod projects;
pub mod resources;
pub mod team_capabilities;
pub mod team_members;

use rand::Rng;

/// Pick a uniform random element of a static catalog slice.
///
/// Catalogs are compile-time non-empty, so indexing cannot fail.
pub(crate) fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
