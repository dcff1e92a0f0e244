// Application Layer - Exchange operations

pub mod exchange;

// Re-exports
pub use exchange::{exchange_at_by_copy, exchange_at_by_move, exchange_by_copy, exchange_by_move};
