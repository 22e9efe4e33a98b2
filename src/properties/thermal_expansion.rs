use super::{require_nonzero, PhysicalConstants};
use cpprops_core::si::{Quantity, QuantityArray1, SIUnit};
use cpprops_core::statistics::{covariance, mean};
use cpprops_core::{log_result, CpResult, Verbosity};

/// Isobaric thermal expansion coefficient from the cross fluctuation of
/// total energy and box volume.
///
/// $$\alpha=\frac{\mathrm{Cov}(E,V)}{R T^2\langle V\rangle}$$
///
/// Both series have to be sampled at the same frames.
pub fn thermal_expansion(
    total_energy: &QuantityArray1,
    volume: &QuantityArray1,
    temperature: Quantity,
    constants: &PhysicalConstants,
    verbosity: Verbosity,
) -> CpResult<Quantity> {
    total_energy.check_unit(SIUnit::MOLAR_ENERGY)?;
    volume.check_unit(SIUnit::VOLUME)?;
    temperature.check_unit(SIUnit::TEMPERATURE)?;
    require_nonzero("temperature", temperature)?;

    let cov = covariance(total_energy, volume)?;
    let v = mean(volume)?;
    require_nonzero("mean volume", v)?;
    let alpha = cov / (constants.gas_constant * temperature.powi(2) * v);
    log_result!(verbosity, "thermal expansion: {}", alpha);
    Ok(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;
    use approx::assert_relative_eq;
    use cpprops_core::si::*;
    use cpprops_core::CpError;
    use ndarray::arr1;

    fn kj_mol() -> Quantity {
        KILO * JOULE / MOL
    }

    fn nm3() -> Quantity {
        (NANO * METER).powi(3)
    }

    #[test]
    fn test_thermal_expansion() -> CpResult<()> {
        let energy = arr1(&[1.0, 2.0, 3.0]) * kj_mol();
        let volume = arr1(&[17.0, 18.0, 19.0]) * nm3();
        let alpha = thermal_expansion(
            &energy,
            &volume,
            300.0 * KELVIN,
            &PhysicalConstants::default(),
            Verbosity::None,
        )?;
        // Cov = 1 kJ/mol nm^3, <V> = 18 nm^3
        let expected = 1e3 / (8.31446261815324 * 300.0f64.powi(2) * 18.0);
        assert_relative_eq!(
            Property::ThermalExpansion.magnitude(alpha)?,
            expected,
            max_relative = 1e-12
        );
        assert_eq!(alpha.unit(), SIUnit::THERMAL_EXPANSIVITY);
        Ok(())
    }

    #[test]
    fn test_shuffle_invariance() -> CpResult<()> {
        let c = PhysicalConstants::default();
        let t = 298.0 * KELVIN;
        let e1 = arr1(&[-5.0, -4.0, -6.5, -5.5]) * kj_mol();
        let v1 = arr1(&[18.1, 18.3, 17.9, 18.0]) * nm3();
        let e2 = arr1(&[-5.5, -6.5, -5.0, -4.0]) * kj_mol();
        let v2 = arr1(&[18.0, 17.9, 18.1, 18.3]) * nm3();
        assert_relative_eq!(
            thermal_expansion(&e1, &v1, t, &c, Verbosity::None)?,
            thermal_expansion(&e2, &v2, t, &c, Verbosity::None)?,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_invalid_input() {
        let c = PhysicalConstants::default();
        let t = 300.0 * KELVIN;
        let energy = arr1(&[1.0, 2.0, 3.0]) * kj_mol();
        let short = arr1(&[17.0, 18.0]) * nm3();
        assert!(matches!(
            thermal_expansion(&energy, &short, t, &c, Verbosity::None),
            Err(CpError::InvalidInput(_))
        ));
        let zero = arr1(&[0.0, 0.0, 0.0]) * nm3();
        assert!(matches!(
            thermal_expansion(&energy, &zero, t, &c, Verbosity::None),
            Err(CpError::InsufficientSample(_))
        ));
        let single = arr1(&[1.0]) * kj_mol();
        let single_volume = arr1(&[18.0]) * nm3();
        assert!(matches!(
            thermal_expansion(&single, &single_volume, t, &c, Verbosity::None),
            Err(CpError::InsufficientSample(_))
        ));
        assert!(matches!(
            thermal_expansion(&energy, &energy, t, &c, Verbosity::None),
            Err(CpError::UnitMismatch { .. })
        ));
    }
}
