pub mod coding;
pub mod error;
pub mod matrix;
pub mod sim;

pub use coding::{reference_generator, BlockDecoder};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use sim::{EntropySource, PrngSource, Simulator, SweepConfig, SweepPoint};
