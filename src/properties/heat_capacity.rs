use super::{require_nonzero, PhysicalConstants};
use cpprops_core::si::{Quantity, QuantityArray1, SIUnit};
use cpprops_core::statistics::variance;
use cpprops_core::{log_result, CpError, CpResult, Verbosity};

/// Specific heat capacity from the fluctuation of the total energy.
///
/// $$c_p=\frac{\mathrm{Var}(E)}{N T^2 R M}$$
///
/// `total_energy` is the molar total energy of the simulation box,
/// `box_count` the number of molecules in the box and `molar_mass` the
/// molar mass of a molecule. The result is a specific heat capacity
/// (reported in cal/g/K).
pub fn heat_capacity(
    total_energy: &QuantityArray1,
    box_count: usize,
    temperature: Quantity,
    molar_mass: Quantity,
    constants: &PhysicalConstants,
    verbosity: Verbosity,
) -> CpResult<Quantity> {
    total_energy.check_unit(SIUnit::MOLAR_ENERGY)?;
    temperature.check_unit(SIUnit::TEMPERATURE)?;
    molar_mass.check_unit(SIUnit::MOLAR_WEIGHT)?;
    if box_count == 0 {
        return Err(CpError::InsufficientSample(
            "number of molecules must not be zero".into(),
        ));
    }
    require_nonzero("temperature", temperature)?;
    require_nonzero("molar mass", molar_mass)?;

    let var = variance(total_energy)?;
    let cp = var / (box_count as f64 * temperature.powi(2) * constants.gas_constant) / molar_mass;
    log_result!(verbosity, "heat capacity: {}", cp);
    Ok(cp)
}
