use super::Bootstrap;
use crate::properties::{self, PhysicalConstants, Property};
use cpprops_core::si::{Quantity, QuantityArray1};
use cpprops_core::statistics::mean;
use cpprops_core::{CpResult, Verbosity};
use ndarray::Array1;

impl Bootstrap {
    /// Bootstrap ensemble of the heat capacity in cal/g/K.
    ///
    /// Total energy and temperature are resampled jointly, the
    /// temperature enters as the mean of the resampled series.
    pub fn heat_capacity(
        &self,
        total_energy: &QuantityArray1,
        temperature: &QuantityArray1,
        box_count: usize,
        molar_mass: Quantity,
        constants: &PhysicalConstants,
    ) -> CpResult<Array1<f64>> {
        self.resample(
            &[("total energy", total_energy), ("temperature", temperature)],
            |s| {
                let cp = properties::heat_capacity(
                    &s[0],
                    box_count,
                    mean(&s[1])?,
                    molar_mass,
                    constants,
                    Verbosity::None,
                )?;
                Property::HeatCapacity.magnitude(cp)
            },
        )
    }

    /// Bootstrap ensemble of the thermal expansion coefficient in 1/K.
    pub fn thermal_expansion(
        &self,
        total_energy: &QuantityArray1,
        volume: &QuantityArray1,
        temperature: &QuantityArray1,
        constants: &PhysicalConstants,
    ) -> CpResult<Array1<f64>> {
        self.resample(
            &[
                ("total energy", total_energy),
                ("volume", volume),
                ("temperature", temperature),
            ],
            |s| {
                let alpha = properties::thermal_expansion(
                    &s[0],
                    &s[1],
                    mean(&s[2])?,
                    constants,
                    Verbosity::None,
                )?;
                Property::ThermalExpansion.magnitude(alpha)
            },
        )
    }

    /// Bootstrap ensemble of the isothermal compressibility in 1/bar.
    pub fn isothermal_compressibility(
        &self,
        volume: &QuantityArray1,
        temperature: &QuantityArray1,
        constants: &PhysicalConstants,
    ) -> CpResult<Array1<f64>> {
        self.resample(&[("volume", volume), ("temperature", temperature)], |s| {
            let kappa = properties::isothermal_compressibility(
                &s[0],
                mean(&s[1])?,
                constants,
                Verbosity::None,
            )?;
            Property::IsothermalCompressibility.magnitude(kappa)
        })
    }

    /// Bootstrap ensemble of the heat of vaporization in kJ/mol.
    ///
    /// Only the liquid potential energy and temperature are resampled,
    /// the gas phase series is the same in every iteration.
    pub fn heat_of_vaporization(
        &self,
        liquid_energy: &QuantityArray1,
        gas_energy: &QuantityArray1,
        temperature: &QuantityArray1,
        box_count: usize,
        constants: &PhysicalConstants,
    ) -> CpResult<Array1<f64>> {
        self.resample(
            &[
                ("liquid potential energy", liquid_energy),
                ("temperature", temperature),
            ],
            |s| {
                let hvap = properties::heat_of_vaporization(
                    &s[0],
                    gas_energy,
                    &s[1],
                    box_count,
                    constants,
                    Verbosity::None,
                )?;
                Property::HeatOfVaporization.magnitude(hvap)
            },
        )
    }
}
