//! Error types for strict cleaning and capacity estimation.
//!
//! Table generation itself cannot fail; only the opt-in strict mode and the
//! capacity estimator produce these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Unknown symbol {symbol:?} at line {line}, column {column}")]
  UnknownSymbol {
    line: usize,
    column: usize,
    symbol: char,
  },

  #[error("Invalid capacity: {text:?}")]
  InvalidCapacity { text: String },

  #[error("{name} capacity must be at least one cell")]
  ZeroCapacity { name: &'static str },

  #[error("Capacity arithmetic out of range: {expression}")]
  CapacityOverflow { expression: String },
}

pub type Result<T> = std::result::Result<T, Error>;
