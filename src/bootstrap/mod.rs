//! Bootstrap resampling of trajectory estimators.
//!
//! A [Bootstrap] draws `n` frame indices with replacement for every
//! iteration and applies the same indices to all paired series. Series
//! that are not paired are captured by the statistic and stay fixed.
use cpprops_core::si::QuantityArray1;
use cpprops_core::{log_iter, CpError, CpResult, Verbosity};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

mod estimators;
mod summary;
pub use summary::{quantile, BootstrapSummary};

/// Counter based RNG seed (SplitMix64).
///
/// Iteration `counter` of a bootstrap with base seed `base_seed` is
/// seeded independently of all other iterations.
#[inline]
pub fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Settings of a bootstrap resampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Bootstrap {
    n_boot: usize,
    seed: Option<u64>,
    verbosity: Verbosity,
}

impl Bootstrap {
    /// Bootstrap with `n_boot` iterations and a random seed.
    pub fn new(n_boot: usize) -> Self {
        Self {
            n_boot,
            seed: None,
            verbosity: Verbosity::None,
        }
    }

    /// Use a fixed base seed to make the ensemble reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Number of iterations.
    pub fn n_boot(&self) -> usize {
        self.n_boot
    }

    /// Draw the frame indices of one iteration.
    pub fn sample_indices<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
        (0..len).map(|_| rng.gen_range(0..len)).collect()
    }

    /// Empirical distribution of `statistic` under resampling of the
    /// `paired` series.
    ///
    /// All paired series are named for error messages and must have the
    /// same length. In every iteration the statistic receives the
    /// resampled series in the order of `paired` and returns the value
    /// of the estimator as a float. The result has exactly `n_boot`
    /// entries.
    pub fn resample<F>(
        &self,
        paired: &[(&str, &QuantityArray1)],
        statistic: F,
    ) -> CpResult<Array1<f64>>
    where
        F: Fn(&[QuantityArray1]) -> CpResult<f64> + Sync,
    {
        let Some(&(first_name, first)) = paired.first() else {
            if self.n_boot == 0 {
                return Ok(Array1::zeros(0));
            }
            return Err(CpError::InvalidInput(
                "bootstrap requires at least one resampled series".into(),
            ));
        };
        let len = first.len();
        if let Some((name, x)) = paired.iter().find(|(_, x)| x.len() != len) {
            return Err(CpError::InvalidInput(format!(
                "'{name}' has {} frames but '{first_name}' has {len}",
                x.len()
            )));
        }
        if self.n_boot == 0 {
            return Ok(Array1::zeros(0));
        }
        if len == 0 {
            return Err(CpError::InsufficientSample(format!(
                "cannot resample the empty series '{first_name}'"
            )));
        }

        let base_seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let iteration = |k: usize| -> CpResult<f64> {
            let mut rng = StdRng::seed_from_u64(counter_rng_seed(base_seed, k as u64));
            let indices = Self::sample_indices(len, &mut rng);
            let sample: Vec<QuantityArray1> =
                paired.iter().map(|(_, x)| x.select(&indices)).collect();
            let value = statistic(&sample)?;
            log_iter!(self.verbosity, "bootstrap {:>6}: {}", k, value);
            Ok(value)
        };

        #[cfg(not(feature = "rayon"))]
        let values = (0..self.n_boot)
            .map(iteration)
            .collect::<CpResult<Vec<f64>>>()?;
        #[cfg(feature = "rayon")]
        let values = (0..self.n_boot)
            .into_par_iter()
            .map(iteration)
            .collect::<CpResult<Vec<f64>>>()?;
        Ok(Array1::from_vec(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpprops_core::si::*;
    use cpprops_core::statistics::mean;
    use ndarray::arr1;

    fn mean_kelvin(s: &[QuantityArray1]) -> CpResult<f64> {
        mean(&s[0])?.convert_into(KELVIN)
    }

    #[test]
    fn test_ensemble_length() -> CpResult<()> {
        let t = arr1(&[290.0, 300.0, 310.0]) * KELVIN;
        assert_eq!(
            Bootstrap::new(0).resample(&[("temperature", &t)], mean_kelvin)?.len(),
            0
        );
        assert_eq!(
            Bootstrap::new(25)
                .resample(&[("temperature", &t)], mean_kelvin)?
                .len(),
            25
        );
        Ok(())
    }

    #[test]
    fn test_values_within_sample_range() -> CpResult<()> {
        let t = arr1(&[290.0, 295.0, 300.0, 305.0, 310.0]) * KELVIN;
        let ensemble = Bootstrap::new(200)
            .seed(7)
            .resample(&[("temperature", &t)], mean_kelvin)?;
        assert!(ensemble.iter().all(|&x| (290.0..=310.0).contains(&x)));
        Ok(())
    }

    #[test]
    fn test_seed_reproducible() -> CpResult<()> {
        let t = arr1(&[290.0, 295.0, 300.0, 305.0, 310.0]) * KELVIN;
        let a = Bootstrap::new(50)
            .seed(42)
            .resample(&[("temperature", &t)], mean_kelvin)?;
        let b = Bootstrap::new(50)
            .seed(42)
            .resample(&[("temperature", &t)], mean_kelvin)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_paired_indices() -> CpResult<()> {
        // identical series stay identical when resampled jointly
        let x = arr1(&[1.0, 2.0, 3.0, 4.0]) * KELVIN;
        let ensemble = Bootstrap::new(20).seed(3).resample(
            &[("x", &x), ("y", &x)],
            |s| Ok(if s[0] == s[1] { 1.0 } else { 0.0 }),
        )?;
        assert!(ensemble.iter().all(|&v| v == 1.0));
        Ok(())
    }

    #[test]
    fn test_length_mismatch() {
        let x = arr1(&[1.0, 2.0, 3.0]) * KELVIN;
        let y = arr1(&[1.0, 2.0]) * KELVIN;
        let err = Bootstrap::new(5)
            .resample(&[("energy", &x), ("volume", &y)], mean_kelvin)
            .unwrap_err();
        assert!(matches!(err, CpError::InvalidInput(_)));
        assert!(err.to_string().contains("volume"));
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn test_no_paired_series() {
        assert!(Bootstrap::new(0).resample(&[], |_| Ok(1.0)).is_ok());
        assert!(matches!(
            Bootstrap::new(3).resample(&[], |_| Ok(1.0)),
            Err(CpError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_counter_seed() {
        assert_ne!(counter_rng_seed(1, 0), counter_rng_seed(1, 1));
        assert_eq!(counter_rng_seed(5, 9), counter_rng_seed(5, 9));
    }
}
