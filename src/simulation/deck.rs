use serde::Serialize;
use thiserror::Error;

/// Largest opening hand accepted unless the caller raises the bound
pub const DEFAULT_MAX_HAND_SIZE: usize = 7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Raw simulation parameters as supplied by a caller.
///
/// Fields are signed so that out-of-range input such as a negative hand size
/// can be represented and rejected by [`SimParams::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimParams {
    pub deck_size: i64,
    pub land_count: i64,
    pub hand_size: i64,
    pub trials: i64,
    pub seed: Option<u64>,
    pub max_hand_size: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            deck_size: 100,
            land_count: 35,
            hand_size: 7,
            trials: 100_000,
            seed: None,
            max_hand_size: DEFAULT_MAX_HAND_SIZE,
        }
    }
}

impl SimParams {
    /// Check every constraint and produce the validated form
    pub fn validate(&self) -> Result<ValidParams, SimulationError> {
        if self.deck_size <= 0 {
            return Err(invalid(format!(
                "deck_size must be positive, got {}",
                self.deck_size
            )));
        }
        if !(0..=self.deck_size).contains(&self.land_count) {
            return Err(invalid(format!(
                "land_count must be between 0 and deck_size ({}), got {}",
                self.deck_size, self.land_count
            )));
        }
        let max_hand = i64::try_from(self.max_hand_size).unwrap_or(i64::MAX);
        if !(0..=max_hand).contains(&self.hand_size) {
            return Err(invalid(format!(
                "hand_size must be between 0 and {}, got {}",
                max_hand, self.hand_size
            )));
        }
        if self.hand_size > self.deck_size {
            return Err(invalid(format!(
                "hand_size ({}) cannot exceed deck_size ({})",
                self.hand_size, self.deck_size
            )));
        }
        if self.trials <= 0 {
            return Err(invalid(format!(
                "trials must be positive, got {}",
                self.trials
            )));
        }

        let size = usize::try_from(self.deck_size).map_err(|_| {
            invalid(format!(
                "deck_size {} exceeds the address range of this platform",
                self.deck_size
            ))
        })?;

        Ok(ValidParams {
            // land_count and hand_size are at most deck_size, so they fit too
            deck: Deck {
                size,
                lands: self.land_count as usize,
            },
            hand_size: self.hand_size as usize,
            trials: self.trials as u64,
            seed: self.seed,
        })
    }
}

fn invalid(reason: String) -> SimulationError {
    SimulationError::InvalidParameter(reason)
}

/// Parameters that passed validation; only constructible through
/// [`SimParams::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidParams {
    pub(crate) deck: Deck,
    pub(crate) hand_size: usize,
    pub(crate) trials: u64,
    pub(crate) seed: Option<u64>,
}

impl ValidParams {
    pub fn deck(&self) -> Deck {
        self.deck
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Land / non-land composition of a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub size: usize,
    pub lands: usize,
}

impl Deck {
    pub fn non_lands(&self) -> usize {
        self.size - self.lands
    }
}
