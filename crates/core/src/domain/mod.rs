// Domain Layer - Strategies and their cost model

pub mod cost;
pub mod strategy;

// Re-exports
pub use cost::{ExchangeCost, STEPS_PER_EXCHANGE};
pub use strategy::ExchangeStrategy;
