use cpprops_core::si::{Quantity, QuantityArray1, SIUnit};
use cpprops_core::statistics::mean;
use cpprops_core::{log_result, CpResult, Verbosity};

/// Mean mass density of the trajectory.
pub fn density(density: &QuantityArray1, verbosity: Verbosity) -> CpResult<Quantity> {
    density.check_unit(SIUnit::MASS_DENSITY)?;
    let rho = mean(density)?;
    log_result!(verbosity, "density: {}", rho);
    Ok(rho)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;
    use approx::assert_relative_eq;
    use cpprops_core::si::*;
    use cpprops_core::CpError;
    use ndarray::{arr1, Array1};

    #[test]
    fn test_density() -> CpResult<()> {
        let values = arr1(&[0.995, 0.998, 1.001, 0.997]);
        let rho = density(&(&values * (GRAM / (MILLI * LITER))), Verbosity::None)?;
        assert_relative_eq!(
            Property::Density.magnitude(rho)?,
            values.sum() / 4.0,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_invalid_input() {
        let empty = Array1::<f64>::zeros(0) * (GRAM / (MILLI * LITER));
        assert!(matches!(
            density(&empty, Verbosity::None),
            Err(CpError::InsufficientSample(_))
        ));
        let wrong = arr1(&[1.0]) * GRAM;
        assert!(matches!(
            density(&wrong, Verbosity::None),
            Err(CpError::UnitMismatch { .. })
        ));
    }
}
