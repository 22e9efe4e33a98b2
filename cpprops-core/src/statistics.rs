//! Moments of unit-tagged time series.
//!
//! The variance is the population variance (normalized by `n`), the
//! covariance is the sample covariance (normalized by `n - 1`).
//! Fluctuation moments need at least [MIN_FLUCTUATION_SAMPLES] frames.
use crate::errors::{CpError, CpResult};
use crate::si::{Quantity, QuantityArray1};

/// Minimum number of frames for variances and covariances.
pub const MIN_FLUCTUATION_SAMPLES: usize = 2;

/// Return an error if a series has fewer than `min` frames.
pub fn require_samples(name: &str, len: usize, min: usize) -> CpResult<()> {
    if len < min {
        return Err(CpError::InsufficientSample(format!(
            "{name} requires at least {min} frame(s), got {len}"
        )));
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(x: &QuantityArray1) -> CpResult<Quantity> {
    require_samples("mean", x.len(), 1)?;
    Ok(Quantity::new(x.value.sum() / x.len() as f64, x.unit))
}

/// Population variance $\frac{1}{n}\sum_i\left(x_i-\langle x\rangle\right)^2$.
pub fn variance(x: &QuantityArray1) -> CpResult<Quantity> {
    require_samples("variance", x.len(), MIN_FLUCTUATION_SAMPLES)?;
    let n = x.len() as f64;
    let m = x.value.sum() / n;
    let var = x.value.iter().map(|xi| (xi - m).powi(2)).sum::<f64>() / n;
    Ok(Quantity::new(var, x.unit.powi(2)))
}

/// Sample covariance $\frac{1}{n-1}\sum_i\left(x_i-\langle x\rangle\right)\left(y_i-\langle y\rangle\right)$.
pub fn covariance(x: &QuantityArray1, y: &QuantityArray1) -> CpResult<Quantity> {
    if x.len() != y.len() {
        return Err(CpError::InvalidInput(format!(
            "covariance of series with different lengths ({} and {})",
            x.len(),
            y.len()
        )));
    }
    require_samples("covariance", x.len(), MIN_FLUCTUATION_SAMPLES)?;
    let n = x.len() as f64;
    let mx = x.value.sum() / n;
    let my = y.value.sum() / n;
    let cov = x
        .value
        .iter()
        .zip(y.value.iter())
        .map(|(xi, yi)| (xi - mx) * (yi - my))
        .sum::<f64>()
        / (n - 1.0);
    Ok(Quantity::new(cov, x.unit * y.unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::*;
    use approx::assert_relative_eq;
    use ndarray::{arr1, Array1};

    #[test]
    fn test_moments() -> CpResult<()> {
        let x = Array1::range(0.0, 11.0, 1.0) * KELVIN;
        assert_relative_eq!(mean(&x)?, 5.0 * KELVIN);
        assert_relative_eq!(variance(&x)?, 10.0 * KELVIN * KELVIN, max_relative = 1e-14);
        assert_relative_eq!(covariance(&x, &x)?, 11.0 * KELVIN * KELVIN, max_relative = 1e-14);
        Ok(())
    }

    #[test]
    fn test_covariance_units() -> CpResult<()> {
        let e = arr1(&[1.0, 2.0, 3.0]) * JOULE;
        let v = arr1(&[3.0, 2.0, 1.0]) * METER.powi(3);
        let cov = covariance(&e, &v)?;
        assert_eq!(cov.unit(), SIUnit::ENERGY * SIUnit::VOLUME);
        assert_relative_eq!(cov, -1.0 * JOULE * METER.powi(3), max_relative = 1e-14);
        Ok(())
    }

    #[test]
    fn test_insufficient_sample() {
        let x = arr1(&[1.0]) * KELVIN;
        assert!(mean(&x).is_ok());
        assert!(matches!(
            variance(&x),
            Err(CpError::InsufficientSample(_))
        ));
        assert!(matches!(
            covariance(&x, &x),
            Err(CpError::InsufficientSample(_))
        ));
        let empty = Array1::<f64>::zeros(0) * KELVIN;
        assert!(mean(&empty).is_err());
    }

    #[test]
    fn test_covariance_length_mismatch() {
        let x = arr1(&[1.0, 2.0]) * KELVIN;
        let y = arr1(&[1.0, 2.0, 3.0]) * KELVIN;
        assert!(matches!(covariance(&x, &y), Err(CpError::InvalidInput(_))));
    }
}
