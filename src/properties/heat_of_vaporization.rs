use super::PhysicalConstants;
use cpprops_core::si::{Quantity, QuantityArray1, SIUnit};
use cpprops_core::statistics::mean;
use cpprops_core::{log_result, CpError, CpResult, Verbosity};

/// Molar heat of vaporization from the potential energies of the liquid
/// box and of a single gas phase molecule.
///
/// $$\Delta H_\mathrm{vap}=\langle E_\mathrm{gas}\rangle-\frac{\langle E_\mathrm{liq}\rangle}{N}+R\langle T\rangle$$
///
/// `liquid_energy` is the potential energy of the whole box holding
/// `box_count` molecules, `temperature` the temperature series of the
/// liquid run.
pub fn heat_of_vaporization(
    liquid_energy: &QuantityArray1,
    gas_energy: &QuantityArray1,
    temperature: &QuantityArray1,
    box_count: usize,
    constants: &PhysicalConstants,
    verbosity: Verbosity,
) -> CpResult<Quantity> {
    liquid_energy.check_unit(SIUnit::MOLAR_ENERGY)?;
    gas_energy.check_unit(SIUnit::MOLAR_ENERGY)?;
    temperature.check_unit(SIUnit::TEMPERATURE)?;
    if box_count == 0 {
        return Err(CpError::InsufficientSample(
            "number of molecules must not be zero".into(),
        ));
    }

    let liquid = mean(liquid_energy)? / box_count as f64;
    let gas = mean(gas_energy)?;
    let rt = constants.gas_constant * mean(temperature)?;
    let hvap = gas.try_sub(liquid)?.try_add(rt)?;
    log_result!(verbosity, "heat of vaporization: {}", hvap);
    Ok(hvap)
}
