//! Noise-level sweep driver.
//!
//! For each sigma in an inclusive grid the driver runs a fixed number of
//! independent transmission trials against one configured decoder, tallies
//! decoding errors, and streams one [`SweepPoint`] per level to a caller
//! supplied sink as soon as the level completes. Nothing buffers the whole
//! sweep in memory; persistence is the sink's concern.

use std::time::Instant;

use log::debug;

use crate::coding::BlockDecoder;
use crate::error::{Error, Result};
use crate::sim::source::EntropySource;

/// Relative slack when sizing the sigma grid, so that inclusive endpoints
/// survive binary rounding of the step accumulation (e.g. 0.1..0.3 step 0.1
/// must yield three levels, not two).
const GRID_TOLERANCE: f64 = 1e-6;

/// Parameters of one noise-level sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// First noise standard deviation (inclusive)
    pub sigma_start: f64,
    /// Last noise standard deviation (inclusive)
    pub sigma_end: f64,
    /// Grid spacing between consecutive sigma values
    pub sigma_step: f64,
    /// Number of independent trials per noise level
    pub trials: usize,
}

impl SweepConfig {
    /// Checks that the sigma range is finite, positive, and properly ordered
    /// and that the trial count is positive.
    pub fn validate(&self) -> Result<()> {
        let finite_positive = |v: f64| v.is_finite() && v > 0.0;
        if !finite_positive(self.sigma_start)
            || !finite_positive(self.sigma_end)
            || !finite_positive(self.sigma_step)
        {
            return Err(Error::InvalidInput(format!(
                "Sigma parameters must be finite and positive: start={}, end={}, step={}",
                self.sigma_start, self.sigma_end, self.sigma_step
            )));
        }
        if self.sigma_start >= self.sigma_end {
            return Err(Error::InvalidInput(format!(
                "Sigma range must satisfy start < end: start={}, end={}",
                self.sigma_start, self.sigma_end
            )));
        }
        if self.trials == 0 {
            return Err(Error::InvalidInput(
                "Trial count must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of sigma levels on the inclusive grid.
    fn levels(&self) -> usize {
        let span = (self.sigma_end - self.sigma_start) / self.sigma_step;
        (span + GRID_TOLERANCE).floor() as usize + 1
    }
}

/// One row of sweep output, aggregated over all trials at a single sigma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Signal-to-noise ratio in dB, `10 * log10(1 / sigma^2)` under unit
    /// signal energy
    pub snr_db: f64,
    /// Noise standard deviation of this level
    pub sigma: f64,
    /// Fraction of trials that decoded to the wrong word, in `[0, 1]`
    pub error_rate: f64,
    /// Average wall-clock time of one encode/channel/decode trial, seconds
    pub avg_decode_time: f64,
}

/// Drives repeated encode/channel/decode trials against one decoder.
#[derive(Debug)]
pub struct Simulator<S> {
    decoder: BlockDecoder,
    source: S,
}

impl<S: EntropySource> Simulator<S> {
    /// Creates a driver owning `decoder` and the randomness `source`.
    pub fn new(decoder: BlockDecoder, source: S) -> Self {
        Simulator { decoder, source }
    }

    /// The decoder under test.
    pub fn decoder(&self) -> &BlockDecoder {
        &self.decoder
    }

    /// Runs one transmission trial at noise level `sigma`.
    ///
    /// Draws a uniform information word, encodes it, maps the codeword to
    /// antipodal amplitudes (bit 1 -> +1, bit 0 -> -1), adds independent
    /// `N(0, sigma^2)` noise per coordinate, and decodes the result.
    ///
    /// # Returns
    ///
    /// `true` if the decoded word differs from the transmitted one
    pub fn run_single_trial(&mut self, sigma: f64) -> Result<bool> {
        let words = 1u32 << self.decoder.info_bits();
        let word = self.source.next_word(words);
        let codeword = self.decoder.encode(word)?;

        let n = self.decoder.codeword_length();
        let mut received = Vec::with_capacity(n);
        for row in 0..n {
            let amplitude = if *codeword.get(row, 0)? { 1.0 } else { -1.0 };
            received.push(amplitude + sigma * self.source.next_normal());
        }

        let decoded = self.decoder.decode(&received)?;
        Ok(decoded != word)
    }

    /// Sweeps the sigma grid, streaming one [`SweepPoint`] per level to
    /// `emit` in increasing sigma order.
    ///
    /// # Arguments
    ///
    /// * `config` - Sigma grid and trial count, validated before any trial runs
    /// * `emit` - Sink invoked once per completed level; an error from the
    ///   sink aborts the sweep
    pub fn run_sweep<F>(&mut self, config: &SweepConfig, mut emit: F) -> Result<()>
    where
        F: FnMut(&SweepPoint) -> Result<()>,
    {
        config.validate()?;
        for level in 0..config.levels() {
            let sigma = config.sigma_start + level as f64 * config.sigma_step;
            let mut errors = 0usize;
            let started = Instant::now();
            for _ in 0..config.trials {
                if self.run_single_trial(sigma)? {
                    errors += 1;
                }
            }
            let avg_decode_time = started.elapsed().as_secs_f64() / config.trials as f64;
            let error_rate = errors as f64 / config.trials as f64;
            let snr_db = 10.0 * (1.0 / (sigma * sigma)).log10();
            debug!(
                "k={} sigma={:.4}: {} errors in {} trials (rate {:.6})",
                self.decoder.info_bits(),
                sigma,
                errors,
                config.trials,
                error_rate
            );
            emit(&SweepPoint {
                snr_db,
                sigma,
                error_rate,
                avg_decode_time,
            })?;
        }
        Ok(())
    }

    /// Runs a sweep and collects the rows into a vector.
    pub fn run_sweep_collect(&mut self, config: &SweepConfig) -> Result<Vec<SweepPoint>> {
        let mut points = Vec::new();
        self.run_sweep(config, |point| {
            points.push(*point);
            Ok(())
        })?;
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coding::{reference_generator, BlockDecoder};
    use crate::sim::source::PrngSource;
    use approx::assert_relative_eq;

    /// Scripted source: cycles through preset words, emits zero noise.
    struct QuietSource {
        words: Vec<u32>,
        next: usize,
    }

    impl EntropySource for QuietSource {
        fn next_word(&mut self, bound: u32) -> u32 {
            let word = self.words[self.next % self.words.len()] % bound;
            self.next += 1;
            word
        }

        fn next_normal(&mut self) -> f64 {
            0.0
        }
    }

    fn config(start: f64, end: f64, step: f64, trials: usize) -> SweepConfig {
        SweepConfig {
            sigma_start: start,
            sigma_end: end,
            sigma_step: step,
            trials,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(config(0.1, 0.3, 0.1, 100).validate().is_ok());
        assert!(config(0.3, 0.1, 0.1, 100).validate().is_err());
        assert!(config(0.1, 0.1, 0.1, 100).validate().is_err());
        assert!(config(0.1, 0.3, 0.0, 100).validate().is_err());
        assert!(config(0.1, 0.3, -0.1, 100).validate().is_err());
        assert!(config(0.1, 0.3, 0.1, 0).validate().is_err());
        assert!(config(f64::NAN, 0.3, 0.1, 100).validate().is_err());
    }

    #[test]
    fn test_sweep_emits_inclusive_grid() {
        let decoder = BlockDecoder::new(&reference_generator(), 2).unwrap();
        let mut simulator = Simulator::new(decoder, PrngSource::seeded(1));

        let points = simulator
            .run_sweep_collect(&config(0.1, 0.3, 0.1, 1000))
            .unwrap();

        assert_eq!(points.len(), 3);
        for pair in points.windows(2) {
            assert!(pair[0].sigma < pair[1].sigma);
        }
        for point in &points {
            assert!(point.error_rate >= 0.0 && point.error_rate <= 1.0);
            assert!(point.avg_decode_time >= 0.0);
        }
    }

    #[test]
    fn test_snr_formula() {
        let decoder = BlockDecoder::new(&reference_generator(), 1).unwrap();
        let mut simulator = Simulator::new(decoder, PrngSource::seeded(2));

        let points = simulator
            .run_sweep_collect(&config(0.5, 0.6, 0.2, 10))
            .unwrap();

        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].snr_db, 10.0 * 4.0_f64.log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_noiseless_trials_never_error() {
        let decoder = BlockDecoder::new(&reference_generator(), 4).unwrap();
        let source = QuietSource {
            words: (0..16).collect(),
            next: 0,
        };
        let mut simulator = Simulator::new(decoder, source);

        for _ in 0..64 {
            assert!(!simulator.run_single_trial(0.0).unwrap());
        }
    }

    #[test]
    fn test_error_rate_grows_with_noise() {
        let decoder = BlockDecoder::new(&reference_generator(), 3).unwrap();
        let mut simulator = Simulator::new(decoder, PrngSource::seeded(3));

        let mut rate_at = |sigma: f64| {
            let mut errors = 0;
            for _ in 0..400 {
                if simulator.run_single_trial(sigma).unwrap() {
                    errors += 1;
                }
            }
            errors as f64 / 400.0
        };

        let quiet = rate_at(0.05);
        let loud = rate_at(1.5);
        assert!(quiet <= loud, "quiet={}, loud={}", quiet, loud);
        assert_eq!(quiet, 0.0);
    }

    #[test]
    fn test_sink_error_aborts_sweep() {
        let decoder = BlockDecoder::new(&reference_generator(), 2).unwrap();
        let mut simulator = Simulator::new(decoder, PrngSource::seeded(4));

        let mut emitted = 0;
        let result = simulator.run_sweep(&config(0.1, 0.5, 0.1, 10), |_| {
            emitted += 1;
            if emitted == 2 {
                Err(Error::InvalidInput("stop".to_string()))
            } else {
                Ok(())
            }
        });

        assert!(result.is_err());
        assert_eq!(emitted, 2);
    }
}
