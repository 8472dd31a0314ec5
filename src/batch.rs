//! Thin multi-seed convenience layer over [`crate::search`]. Each seed's
//! pipeline run owns its own RNG/piece-list/weight-table quintuple (every
//! call into `locator`/`generator` constructs those fresh), so running the
//! work-stealing iterator here shares nothing across threads — it's
//! parallel only because the seeds are independent, not because any part
//! of the core was made thread-safe.

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::locator::ChunkPos;
use crate::report::FortressMatch;

/// Runs the full search pipeline for each of `seeds`, in parallel, and
/// returns one result list per seed in input order. Reports progress to
/// stderr as seeds finish, the way a long batch search should.
pub fn run_batch(seeds: &[i64], center: ChunkPos, radius_chunks: i32) -> Vec<(i64, Vec<FortressMatch>)> {
    seeds
        .par_iter()
        .progress_count(seeds.len() as u64)
        .map(|&seed| (seed, crate::search(seed, center, radius_chunks)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn batch_matches_sequential_search() {
        let seeds = [1i64, 2, 3];
        let center = ChunkPos::new(0, 0);
        let batched = run_batch(&seeds, center, 100);
        for (seed, matches) in &batched {
            let direct = crate::search(*seed, center, 100);
            assert_eq!(matches.len(), direct.len());
        }
    }
}
