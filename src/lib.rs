pub mod case_io;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod genotype;
pub mod state;

pub use engine::{solve, SearchConfig, Verdict};
pub use error::*;
