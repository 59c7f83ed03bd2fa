//! Monte Carlo bit-error-rate simulation over an AWGN channel.
//!
//! The driver repeatedly sends a uniformly random information word through
//! encode -> antipodal BPSK mapping -> additive Gaussian noise -> exhaustive
//! ML decode, counts decoding errors, and sweeps this experiment across a
//! grid of noise levels. One result row is produced per noise level:
//! SNR in dB, sigma, empirical error rate, and average decode-path time.
//!
//! Randomness is injected through the [`source::EntropySource`] trait so
//! tests can script exact draw sequences.

pub mod source;
pub mod sweep;

pub use source::{EntropySource, PrngSource};
pub use sweep::{Simulator, SweepConfig, SweepPoint};
