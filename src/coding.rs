//! Linear block code encoding and exhaustive maximum-likelihood decoding.
//!
//! A linear block code maps k information bits to an n-bit codeword through a
//! binary generator matrix over GF(2). This module implements:
//! - GF(2) encoding via generator-matrix multiplication
//! - Exhaustive (brute-force) soft-decision ML decoding by correlation search
//! - A nested code family built by truncating one fixed generator matrix
//!
//! Exhaustive decoding is exact for the AWGN/BPSK channel model but scales as
//! `O(2^k * n)` per decode call, so it is only practical for small numbers of
//! information bits.

use crate::error::Error;

/// Result type for coding operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod block;
pub use block::{reference_generator, BlockDecoder};
