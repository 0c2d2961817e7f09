pub(crate) mod fuzzy;
pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;

use rayon::prelude::*;
use std::cmp::Ordering;

/// Results below this match quality are dropped from search results.
const MIN_SCORE: f64 = 0.25;

/// A catalog or fleet entity that can be matched against a search query.
pub trait Searchable {
    fn id(&self) -> &str;
    /// Pre-lowercased text blob the query is matched against.
    fn haystack(&self) -> &str;
}

/// Generic ranked search function built for multithreaded searching.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Searchable,
{
    let normalized_needle = needle.to_lowercase();
    let mut results: Vec<(&T, f64)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let score = fuzzy::score(&normalized_needle, hay.haystack());
            if score > MIN_SCORE {
                Some((hay, score))
            } else {
                None
            }
        })
        .collect();

    results.par_sort_unstable_by(|(_, a): &(_, f64), (_, b): &(_, f64)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    });
    results.into_iter().map(|(entity, _)| entity).collect()
}
