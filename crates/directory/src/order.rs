use fastrand::Rng;

use crate::index::SearchIndex;

/// How a directory read was ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Browsing: every record, freshly shuffled.
    Shuffled,
    /// Searching: matching records only, best first.
    Ranked,
}

impl Presentation {
    /// Blank and whitespace-only queries browse; anything else searches.
    pub fn for_query(query: &str) -> Self {
        if query.trim().is_empty() {
            Presentation::Shuffled
        } else {
            Presentation::Ranked
        }
    }
}

/// A fresh uniform permutation of `0..len`.
///
/// Fisher-Yates via [`Rng::shuffle`], so every ordering is equally likely.
/// Each call draws anew: two consecutive browsing reads will not agree.
pub fn shuffled_order(len: usize, rng: &mut Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    rng.shuffle(&mut order);
    order
}

/// Record positions for one read of the directory.
///
/// Resolves the query against [`Presentation::for_query`]: browsing reads
/// reshuffle the whole roster, searching reads delegate to the index and
/// carry its ranking through unchanged.
pub fn presentation_order(index: &mut SearchIndex, query: &str, rng: &mut Rng) -> Vec<usize> {
    match Presentation::for_query(query) {
        Presentation::Shuffled => shuffled_order(index.len(), rng),
        Presentation::Ranked => index.search(query),
    }
}
