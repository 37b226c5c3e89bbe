#[macro_use]
extern crate log;

pub mod config;
pub mod engine;
pub mod error;
pub mod sequence;

pub use engine::{
    seed_randomly, seed_randomly_with, try_seed_randomly, try_seed_randomly_with, SeedEngine,
};
pub use error::SeedError;
pub use sequence::{EntropySeedSequence, SeedParam, SeedSequence, SeedWord};
