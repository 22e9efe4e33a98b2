//! Estimators of condensed phase properties from trajectory statistics.
//!
//! Every estimator is a pure function of borrowed time series and scalar
//! parameters. The full sample is used, removing the equilibration part
//! is left to the caller.
use cpprops_core::si::*;
use cpprops_core::{CpError, CpResult};
use serde::{Deserialize, Serialize};
use std::fmt;

mod density;
mod heat_capacity;
mod heat_of_vaporization;
mod isothermal_compressibility;
mod thermal_expansion;
pub use density::density;
pub use heat_capacity::heat_capacity;
pub use heat_of_vaporization::heat_of_vaporization;
pub use isothermal_compressibility::isothermal_compressibility;
pub use thermal_expansion::thermal_expansion;

/// Physical constants used by the estimators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// ideal gas constant
    pub gas_constant: Quantity,
    /// Boltzmann constant
    pub boltzmann_constant: Quantity,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gas_constant: RGAS,
            boltzmann_constant: KB,
        }
    }
}

impl PhysicalConstants {
    /// Constants with custom values. Both are checked for the right dimension.
    pub fn new(gas_constant: Quantity, boltzmann_constant: Quantity) -> CpResult<Self> {
        gas_constant.check_unit(SIUnit::MOLAR_ENTROPY)?;
        boltzmann_constant.check_unit(SIUnit::ENTROPY)?;
        Ok(Self {
            gas_constant,
            boltzmann_constant,
        })
    }
}

/// Fail if a denominator of an estimator vanishes.
pub(crate) fn require_nonzero(name: &str, value: Quantity) -> CpResult<()> {
    if value.is_zero() {
        return Err(CpError::InsufficientSample(format!("{name} must not be zero")));
    }
    Ok(())
}

/// Properties computed from a trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    HeatCapacity,
    ThermalExpansion,
    IsothermalCompressibility,
    HeatOfVaporization,
    Density,
}

impl Property {
    /// All properties in report order.
    pub const ALL: [Property; 5] = [
        Self::HeatCapacity,
        Self::ThermalExpansion,
        Self::IsothermalCompressibility,
        Self::HeatOfVaporization,
        Self::Density,
    ];

    /// Unit in which the property is reported.
    pub fn unit(&self) -> Quantity {
        match self {
            Self::HeatCapacity => CALORIE / (GRAM * KELVIN),
            Self::ThermalExpansion => 1.0 / KELVIN,
            Self::IsothermalCompressibility => 1.0 / BAR,
            Self::HeatOfVaporization => KILO * JOULE / MOL,
            Self::Density => GRAM / (MILLI * LITER),
        }
    }

    /// Symbol of the reporting unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::HeatCapacity => "cal/g/K",
            Self::ThermalExpansion => "1/K",
            Self::IsothermalCompressibility => "1/bar",
            Self::HeatOfVaporization => "kJ/mol",
            Self::Density => "g/mL",
        }
    }

    /// Factor applied to the value in the report table.
    pub fn scale(&self) -> f64 {
        match self {
            Self::ThermalExpansion => 1e2,
            Self::IsothermalCompressibility => 1e4,
            _ => 1.0,
        }
    }

    /// Row label in the report table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HeatCapacity => "Heat capacity",
            Self::ThermalExpansion => "Thermal expansion (*1e2)",
            Self::IsothermalCompressibility => "Isothermal compressibility (*1e4)",
            Self::HeatOfVaporization => "Heat of vaporization",
            Self::Density => "Density",
        }
    }

    /// Value of a quantity in the reporting unit of the property.
    pub fn magnitude(&self, value: Quantity) -> CpResult<f64> {
        value.convert_into(self.unit())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HeatCapacity => "heat capacity",
            Self::ThermalExpansion => "thermal expansion",
            Self::IsothermalCompressibility => "isothermal compressibility",
            Self::HeatOfVaporization => "heat of vaporization",
            Self::Density => "density",
        };
        write!(f, "{name}")
    }
}
