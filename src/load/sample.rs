//! Row limits and sampling order

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How many input rows a load commits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLimit {
    /// Every row, in input order
    #[default]
    All,
    /// A random sample of exactly this many rows (all rows if fewer)
    Sample(usize),
}

impl RowLimit {
    pub fn from_option(limit: Option<usize>) -> Self {
        limit.map_or(RowLimit::All, RowLimit::Sample)
    }
}

/// Put `rows` in the order a load processes them.
///
/// `All` keeps input order. `Sample(n)` shuffles the whole input and keeps
/// the first `n`; with a seed the shuffle is reproducible.
pub fn sample_rows<T>(mut rows: Vec<T>, limit: RowLimit, seed: Option<u64>) -> Vec<T> {
    let RowLimit::Sample(n) = limit else {
        return rows;
    };

    match seed {
        Some(seed) => shuffle_truncate(&mut rows, n, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => shuffle_truncate(&mut rows, n, &mut rand::thread_rng()),
    }
    rows
}

fn shuffle_truncate<T, R: Rng + ?Sized>(rows: &mut Vec<T>, n: usize, rng: &mut R) {
    rows.shuffle(rng);
    rows.truncate(n);
}
