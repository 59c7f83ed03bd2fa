//! Exhaustive maximum-likelihood decoder for a nested linear block code family.
//!
//! The decoder is configured with an `n x K` binary generator matrix and an
//! information-bit count `k <= K`. Only the first `k` columns of the generator
//! are used, which yields a family of nested codes of fixed codeword length
//! `n` and varying message length `k` from a single fixed matrix. At
//! construction every one of the `2^k` codewords is precomputed into a flat
//! table so that decoding reduces to a correlation scan over table rows.
//!
//! Decoding consumes soft channel outputs (real-valued samples of antipodal
//! BPSK signaling) rather than hard bits. For each candidate word the score is
//! the sum of received samples at positions where the candidate codeword has a
//! one bit; since the term the true ML metric subtracts is identical across
//! candidates, maximizing this partial sum is equivalent to maximizing the
//! full correlation with the antipodal signal.

use crate::coding::Result;
use crate::error::Error;
use crate::matrix::Matrix;

/// Largest supported information-bit count. The codeword table holds
/// `2^k * n` entries, so this bounds table memory rather than any property
/// of the code itself.
pub const MAX_INFO_BITS: usize = 24;

/// Encoder/decoder for one member of a nested linear block code family.
#[derive(Debug, Clone)]
pub struct BlockDecoder {
    /// Generator matrix truncated to the first `k` columns (n x k)
    generator: Matrix<u8>,
    /// Number of information bits
    k: usize,
    /// Codeword length (rows of the generator matrix)
    n: usize,
    /// Precomputed codewords, row `i` = encode(i) (2^k x n)
    table: Matrix<bool>,
}

impl BlockDecoder {
    /// Creates a decoder for the code spanned by the first `k` columns of
    /// `generator`.
    ///
    /// # Arguments
    ///
    /// * `generator` - Binary generator matrix (entries must be 0 or 1)
    /// * `k` - Number of information bits, `1 <= k <= generator.cols()`
    ///
    /// # Returns
    ///
    /// A new `BlockDecoder` with its codeword table built, or an error if the
    /// parameters are invalid
    pub fn new(generator: &Matrix<u8>, k: usize) -> Result<Self> {
        if k == 0 || k > generator.cols() {
            return Err(Error::InvalidInput(format!(
                "Information bit count must be in 1..={}, got {}",
                generator.cols(),
                k
            )));
        }
        if k > MAX_INFO_BITS {
            return Err(Error::InvalidInput(format!(
                "Information bit count {} exceeds the supported maximum {}",
                k, MAX_INFO_BITS
            )));
        }
        let n = generator.rows();
        if n == 0 {
            return Err(Error::InvalidInput(
                "Generator matrix must have at least one row".to_string(),
            ));
        }

        // Own the n x k truncation; the wider source matrix is not retained.
        let mut truncated = Matrix::new(n, k);
        for row in 0..n {
            for col in 0..k {
                let entry = *generator.get(row, col)?;
                if entry > 1 {
                    return Err(Error::InvalidInput(format!(
                        "Generator entries must be 0 or 1, found {} at ({}, {})",
                        entry, row, col
                    )));
                }
                truncated.set(row, col, entry)?;
            }
        }

        let words = 1usize << k;
        let mut table = Matrix::new(words, n);
        for word in 0..words {
            for row in 0..n {
                let bit = generator_parity(&truncated, k, word as u32, row)?;
                table.set(word, row, bit)?;
            }
        }

        Ok(BlockDecoder {
            generator: truncated,
            k,
            n,
            table,
        })
    }

    /// Number of information bits.
    pub fn info_bits(&self) -> usize {
        self.k
    }

    /// Codeword length.
    pub fn codeword_length(&self) -> usize {
        self.n
    }

    /// The precomputed codeword table; row `i` holds encode(`i`).
    pub fn codeword_table(&self) -> &Matrix<bool> {
        &self.table
    }

    /// Encodes an information word into a codeword.
    ///
    /// Bit `j` of `word` (0-indexed from the most significant of its `k`
    /// bits) selects column `j` of the generator matrix; codeword bit `i` is
    /// the mod-2 sum of the selected entries in row `i`.
    ///
    /// # Arguments
    ///
    /// * `word` - Information word in `[0, 2^k)`
    ///
    /// # Returns
    ///
    /// The codeword as an `n x 1` boolean column
    pub fn encode(&self, word: u32) -> Result<Matrix<bool>> {
        self.check_word(word)?;
        let mut codeword = Matrix::new(self.n, 1);
        for row in 0..self.n {
            let bit = generator_parity(&self.generator, self.k, word, row)?;
            codeword.set(row, 0, bit)?;
        }
        Ok(codeword)
    }

    /// Decodes soft channel outputs by exhaustive correlation search.
    ///
    /// # Arguments
    ///
    /// * `received` - `n` real-valued samples of the noisy antipodal signal
    ///
    /// # Returns
    ///
    /// The information word in `[0, 2^k)` whose codeword maximizes the
    /// correlation score; on a tie the smallest word wins
    pub fn decode(&self, received: &[f64]) -> Result<u32> {
        if received.len() != self.n {
            return Err(Error::InvalidInput(format!(
                "Received vector length {} does not match codeword length {}",
                received.len(),
                self.n
            )));
        }

        let table = self.table.as_slice();
        let words = 1usize << self.k;
        let mut best_word = 0u32;
        let mut best_score = f64::NEG_INFINITY;
        for word in 0..words {
            let row = &table[word * self.n..(word + 1) * self.n];
            let mut score = 0.0;
            for (j, &bit) in row.iter().enumerate() {
                if bit {
                    score += received[j];
                }
            }
            // Strict comparison keeps the first maximum, so ties resolve to
            // the smallest word.
            if score > best_score {
                best_score = score;
                best_word = word as u32;
            }
        }
        Ok(best_word)
    }

    fn check_word(&self, word: u32) -> Result<()> {
        let words = 1u32 << self.k;
        if word >= words {
            return Err(Error::InvalidInput(format!(
                "Information word {} out of range for {} bits",
                word, self.k
            )));
        }
        Ok(())
    }
}

/// Mod-2 inner product of generator row `row` with the `k`-bit expansion of
/// `word`, most significant bit first.
fn generator_parity(generator: &Matrix<u8>, k: usize, word: u32, row: usize) -> Result<bool> {
    let mut sum = 0u32;
    for col in 0..k {
        let bit = (word >> (k - 1 - col)) & 1;
        sum += u32::from(*generator.get(row, col)?) * bit;
    }
    Ok(sum % 2 == 1)
}

/// The fixed 20x13 generator matrix of the reference code family
/// (n = 20, K = 13, usable with any `k` in 1..=13).
pub fn reference_generator() -> Matrix<u8> {
    Matrix::from_rows(vec![
        vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0],
        vec![1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0],
        vec![1, 0, 0, 1, 0, 0, 1, 0, 1, 1, 1, 1, 1],
        vec![1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1],
        vec![1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 1],
        vec![1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1],
        vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1],
        vec![1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1],
        vec![1, 1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 1],
        vec![1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 1],
        vec![1, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1],
        vec![1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1],
        vec![1, 0, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1],
        vec![1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1],
        vec![1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1],
        vec![1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1],
        vec![1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 1, 1],
        vec![1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 1, 1],
        vec![1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
        vec![1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    ])
    .expect("reference generator rows are rectangular")
}
