// Exchange Core - Domain Types & Exchange Operations
// NO I/O dependencies

pub mod application;
pub mod domain;
pub mod error;

pub use application::exchange::{
    exchange_at_by_copy, exchange_at_by_move, exchange_by_copy, exchange_by_move,
};
pub use domain::{ExchangeCost, ExchangeStrategy};
pub use error::{ExchangeError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
