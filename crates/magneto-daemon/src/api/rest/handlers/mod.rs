//! API request handlers

mod health;
mod mutant;
mod stats;

pub use health::*;
pub use mutant::*;
pub use stats::*;
