use super::{require_nonzero, PhysicalConstants};
use cpprops_core::si::{Quantity, QuantityArray1, SIUnit};
use cpprops_core::statistics::{mean, variance};
use cpprops_core::{log_result, CpResult, Verbosity};

/// Isothermal compressibility from the fluctuation of the box volume.
///
/// $$\kappa_T=\frac{\mathrm{Var}(V)}{k_B T\langle V\rangle}$$
pub fn isothermal_compressibility(
    volume: &QuantityArray1,
    temperature: Quantity,
    constants: &PhysicalConstants,
    verbosity: Verbosity,
) -> CpResult<Quantity> {
    volume.check_unit(SIUnit::VOLUME)?;
    temperature.check_unit(SIUnit::TEMPERATURE)?;
    require_nonzero("temperature", temperature)?;

    let var = variance(volume)?;
    let v = mean(volume)?;
    require_nonzero("mean volume", v)?;
    let kappa = var / (constants.boltzmann_constant * temperature * v);
    log_result!(verbosity, "isothermal compressibility: {}", kappa);
    Ok(kappa)
}
