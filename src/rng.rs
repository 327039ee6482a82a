use rand::seq::index::{self, IndexVec};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator for reproducible simulations
#[derive(Clone)]
pub struct SimRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SimRng {
    /// Create a new SimRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::entropy_seed);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        SimRng { rng, seed }
    }

    /// Create a generator on an independent ChaCha stream of the same seed.
    /// Streams never overlap, so chunks of one simulation can run anywhere.
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        SimRng { rng, seed }
    }

    /// Draw a fresh seed from the thread-local entropy source
    pub fn entropy_seed() -> u64 {
        rand::thread_rng().gen()
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw `amount` distinct positions out of `0..len`, uniformly and
    /// without replacement. Memory grows with `amount`, not `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> IndexVec {
        index::sample(&mut self.rng, len, amount)
    }
}
