use crate::rng::SimRng;
use crate::simulation::deck::{Deck, SimParams, SimulationError, ValidParams};
use crate::simulation::hand::draw_lands;
use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;

/// Trials per generator stream. Fixed so that chunk boundaries, and with
/// them the drawn hands, do not depend on how many threads run the chunks.
pub const CHUNK_TRIALS: u64 = 1 << 16;

/// Histogram of lands-per-hand over a run of trials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    deck: Deck,
    counts: Vec<u64>,
    trials: u64,
    seed: u64,
}

impl FrequencyTable {
    /// Number of hands that held exactly `lands` lands
    pub fn count(&self, lands: usize) -> u64 {
        self.counts.get(lands).copied().unwrap_or(0)
    }

    /// Deck composition the hands were drawn from
    pub fn deck(&self) -> Deck {
        self.deck
    }

    pub fn hand_size(&self) -> usize {
        self.counts.len() - 1
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Seed that reproduces this table
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sum of all counts; equals `trials()`
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Every outcome `0..=hand_size`, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    /// Outcomes that occurred at least once
    pub fn observed(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.iter().filter(|(_, count)| *count > 0)
    }
}

/// Run a simulation with the default hand size bound.
///
/// Returns a table mapping lands-in-hand to the number of hands that had
/// that many lands. Fails before drawing anything if a parameter is out of
/// range.
pub fn simulate(
    deck_size: i64,
    land_count: i64,
    hand_size: i64,
    trials: i64,
    seed: Option<u64>,
) -> Result<FrequencyTable, SimulationError> {
    let params = SimParams {
        deck_size,
        land_count,
        hand_size,
        trials,
        seed,
        ..SimParams::default()
    };
    Ok(Sampler::new(params.validate()?).run())
}

/// Draws hands for one validated parameter set
pub struct Sampler {
    params: ValidParams,
    parallel: bool,
}

impl Sampler {
    pub fn new(params: ValidParams) -> Self {
        Sampler {
            params,
            parallel: false,
        }
    }

    /// Spread chunks over the rayon pool. Results are identical either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self) -> FrequencyTable {
        let seed = self.params.seed.unwrap_or_else(SimRng::entropy_seed);
        let trials = self.params.trials;
        let chunks = trials.div_ceil(CHUNK_TRIALS);
        let width = self.params.hand_size + 1;

        debug!(
            "simulating {} trials: deck={} lands={} hand={} seed={} chunks={} parallel={}",
            trials,
            self.params.deck.size,
            self.params.deck.lands,
            self.params.hand_size,
            seed,
            chunks,
            self.parallel
        );

        let counts = if self.parallel {
            (0..chunks)
                .into_par_iter()
                .map(|chunk| self.run_chunk(seed, chunk))
                .reduce(|| vec![0; width], add_counts)
        } else {
            (0..chunks)
                .map(|chunk| self.run_chunk(seed, chunk))
                .fold(vec![0; width], add_counts)
        };

        FrequencyTable {
            deck: self.params.deck,
            counts,
            trials,
            seed,
        }
    }

    fn run_chunk(&self, seed: u64, chunk: u64) -> Vec<u64> {
        let start = chunk * CHUNK_TRIALS;
        let len = CHUNK_TRIALS.min(self.params.trials - start);
        trace!("chunk {} covers trials {}..{}", chunk, start, start + len);

        let ValidParams { deck, hand_size, .. } = self.params;
        let mut rng = SimRng::with_stream(seed, chunk);
        let mut counts = vec![0; hand_size + 1];
        for _ in 0..len {
            counts[draw_lands(deck, hand_size, &mut rng)] += 1;
        }
        counts
    }
}

fn add_counts(mut acc: Vec<u64>, other: Vec<u64>) -> Vec<u64> {
    for (total, count) in acc.iter_mut().zip(other) {
        *total += count;
    }
    acc
}
