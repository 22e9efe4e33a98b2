use cpprops_core::{CpError, CpResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantile of a sample with linear interpolation between order
/// statistics (R-7 definition).
pub fn quantile(data: &[f64], p: f64) -> CpResult<f64> {
    if data.is_empty() {
        return Err(CpError::InsufficientSample(
            "cannot compute the quantile of an empty sample".into(),
        ));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(CpError::InvalidInput(format!(
            "quantile probability must be in [0, 1], got {p}"
        )));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let h = (sorted.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    Ok(sorted[lower] + (h - lower as f64) * (sorted[upper] - sorted[lower]))
}

/// Mean, standard deviation and percentile confidence interval of a
/// bootstrap ensemble.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BootstrapSummary {
    pub n_boot: usize,
    pub mean: f64,
    /// standard deviation normalized by `n - 1`
    pub std: f64,
    pub confidence_level: f64,
    pub lower: f64,
    pub upper: f64,
}

impl BootstrapSummary {
    /// Summarize an ensemble with at least two entries.
    pub fn from_ensemble(ensemble: &Array1<f64>, confidence_level: f64) -> CpResult<Self> {
        let n = ensemble.len();
        if n < 2 {
            return Err(CpError::InsufficientSample(format!(
                "bootstrap summary requires at least 2 iterations, got {n}"
            )));
        }
        if confidence_level.is_nan() || confidence_level <= 0.0 || confidence_level >= 1.0 {
            return Err(CpError::InvalidInput(format!(
                "confidence level must be in (0, 1), got {confidence_level}"
            )));
        }
        let mean = ensemble.sum() / n as f64;
        let std = (ensemble.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt();
        let alpha = 0.5 * (1.0 - confidence_level);
        let data = ensemble.to_vec();
        Ok(Self {
            n_boot: n,
            mean,
            std,
            confidence_level,
            lower: quantile(&data, alpha)?,
            upper: quantile(&data, 1.0 - alpha)?,
        })
    }
}

impl fmt::Display for BootstrapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} ± {:.4} ({:.0}% CI [{:.4}, {:.4}], n = {})",
            self.mean,
            self.std,
            100.0 * self.confidence_level,
            self.lower,
            self.upper,
            self.n_boot
        )
    }
}
