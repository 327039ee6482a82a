pub mod deck;
pub mod exact;
pub mod hand;
pub mod report;
pub mod sampler;

pub use deck::{Deck, SimParams, SimulationError, ValidParams, DEFAULT_MAX_HAND_SIZE};
pub use exact::hypergeometric;
pub use report::{format_comparison, format_table, Report};
pub use sampler::{simulate, FrequencyTable, Sampler};
