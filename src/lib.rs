pub mod rng;
pub mod simulation;

#[cfg(test)]
mod integration_tests;
