//! Physical quantities with runtime checked units.
//!
//! A [Quantity] stores its value in SI base units together with the
//! exponents of the seven SI base dimensions. Products and quotients
//! combine the exponents, while sums, differences and conversions
//! require matching dimensions and fail with [CpError::UnitMismatch]
//! otherwise.
use crate::errors::{CpError, CpResult};
use ndarray::Array1;

mod fmt;
mod ops;

/// Exponents of the SI base units in the order
/// s, m, kg, A, K, mol, cd.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SIUnit(pub(crate) [i8; 7]);

impl SIUnit {
    pub const DIMENSIONLESS: Self = Self([0, 0, 0, 0, 0, 0, 0]);
    pub const TIME: Self = Self([1, 0, 0, 0, 0, 0, 0]);
    pub const LENGTH: Self = Self([0, 1, 0, 0, 0, 0, 0]);
    pub const MASS: Self = Self([0, 0, 1, 0, 0, 0, 0]);
    pub const TEMPERATURE: Self = Self([0, 0, 0, 0, 1, 0, 0]);
    pub const MOLES: Self = Self([0, 0, 0, 0, 0, 1, 0]);

    pub const VOLUME: Self = Self([0, 3, 0, 0, 0, 0, 0]);
    pub const ENERGY: Self = Self([-2, 2, 1, 0, 0, 0, 0]);
    pub const PRESSURE: Self = Self([-2, -1, 1, 0, 0, 0, 0]);
    pub const ENTROPY: Self = Self([-2, 2, 1, 0, -1, 0, 0]);
    pub const MOLAR_ENERGY: Self = Self([-2, 2, 1, 0, 0, -1, 0]);
    pub const MOLAR_ENTROPY: Self = Self([-2, 2, 1, 0, -1, -1, 0]);
    pub const SPECIFIC_ENTROPY: Self = Self([-2, 2, 0, 0, -1, 0, 0]);
    pub const MOLAR_WEIGHT: Self = Self([0, 0, 1, 0, 0, -1, 0]);
    pub const MASS_DENSITY: Self = Self([0, -3, 1, 0, 0, 0, 0]);
    pub const COMPRESSIBILITY: Self = Self([2, 1, -1, 0, 0, 0, 0]);
    pub const THERMAL_EXPANSIVITY: Self = Self([0, 0, 0, 0, -1, 0, 0]);

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    /// Raise the unit to an integer power.
    pub fn powi(self, n: i8) -> Self {
        Self(self.0.map(|e| e * n))
    }

    pub fn inv(self) -> Self {
        self.powi(-1)
    }
}

/// Physical quantity with runtime checked unit.
///
/// The value is stored in SI base units.
#[derive(Clone, PartialEq)]
pub struct Quantity<T = f64> {
    pub(crate) value: T,
    pub(crate) unit: SIUnit,
}

impl Copy for Quantity<f64> {}

pub type QuantityArray1 = Quantity<Array1<f64>>;

impl<T> Quantity<T> {
    pub(crate) const fn new(value: T, unit: SIUnit) -> Self {
        Self { value, unit }
    }

    /// The unit (dimension) of the quantity.
    pub fn unit(&self) -> SIUnit {
        self.unit
    }

    /// Return an error if the quantity does not have the given dimension.
    pub fn check_unit(&self, unit: SIUnit) -> CpResult<()> {
        if self.unit == unit {
            Ok(())
        } else {
            Err(CpError::UnitMismatch {
                expected: unit.to_string(),
                found: self.unit.to_string(),
            })
        }
    }

}

impl Quantity<f64> {
    /// Convert a quantity into the given unit and return it as a float.
    pub fn convert_into(&self, unit: Quantity) -> CpResult<f64> {
        self.check_unit(unit.unit)?;
        Ok(self.value / unit.value)
    }

    pub fn powi(self, n: i8) -> Self {
        Self::new(self.value.powi(n as i32), self.unit.powi(n))
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Sum of two quantities with identical units.
    pub fn try_add(self, other: Self) -> CpResult<Self> {
        other.check_unit(self.unit)?;
        Ok(Self::new(self.value + other.value, self.unit))
    }

    /// Difference of two quantities with identical units.
    pub fn try_sub(self, other: Self) -> CpResult<Self> {
        other.check_unit(self.unit)?;
        Ok(Self::new(self.value - other.value, self.unit))
    }
}

impl Quantity<Array1<f64>> {
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// New array built from the elements at `indices` (repetitions allowed).
    pub fn select(&self, indices: &[usize]) -> Self {
        Self::new(indices.iter().map(|&i| self.value[i]).collect(), self.unit)
    }

    /// Convert the array into the given unit.
    pub fn convert_into(&self, unit: Quantity) -> CpResult<Array1<f64>> {
        self.check_unit(unit.unit)?;
        Ok(&self.value / unit.value)
    }
}

/// SI base unit meter $\\left(\text{m}\\right)$
pub const METER: Quantity = Quantity::new(1.0, SIUnit::LENGTH);
/// SI base unit kilogram $\\left(\text{kg}\\right)$
pub const KILOGRAM: Quantity = Quantity::new(1.0, SIUnit::MASS);
/// SI base unit Kelvin $\\left(\text{K}\\right)$
pub const KELVIN: Quantity = Quantity::new(1.0, SIUnit::TEMPERATURE);
/// SI base unit mol $\\left(\text{mol}\\right)$
pub const MOL: Quantity = Quantity::new(1.0, SIUnit::MOLES);

/// Derived unit Pascal $\\left(1\\,\text{Pa}=1\\,\\frac{\text{kg}}{\text{m}\\cdot\text{s}^2}\\right)$
pub const PASCAL: Quantity = Quantity::new(1.0, SIUnit::PRESSURE);
/// Derived unit Joule $\\left(1\\,\text{J}=1\\,\text{kg}\\frac{\text{m}^2}{\text{s}^2}\\right)$
pub const JOULE: Quantity = Quantity::new(1.0, SIUnit::ENERGY);

/// Additional unit bar $\\left(1\\,\text{bar}=10^5\\,\text{Pa}\\right)$
pub const BAR: Quantity = Quantity::new(1e5, SIUnit::PRESSURE);
/// Additional unit calorie $\\left(1\\,\text{cal}=4.184\\,\text{J}\\right)$
pub const CALORIE: Quantity = Quantity::new(4.184, SIUnit::ENERGY);
/// Additional unit gram $\\left(1\\,\text{g}=10^{-3}\\,\text{kg}\\right)$
pub const GRAM: Quantity = Quantity::new(1e-3, SIUnit::MASS);
/// Additional unit liter $\\left(1\\,\text{l}=10^{-3}\\,\text{m}^3\\right)$
pub const LITER: Quantity = Quantity::new(1e-3, SIUnit::VOLUME);

/// Boltzmann constant $\\left(k_\text{B}=1.380649\times 10^{-23}\\,\\frac{\text{J}}{\text{K}}\\right)$
pub const KB: Quantity = Quantity::new(1.380649e-23, SIUnit::ENTROPY);
/// Ideal gas constant $\\left(R=8.31446261815324\\,\\frac{\text{J}}{\text{molK}}\\right)$
pub const RGAS: Quantity = Quantity::new(8.31446261815324, SIUnit::MOLAR_ENTROPY);

/// Prefix pico $\\left(\text{p}=10^{-12}\\right)$
pub const PICO: f64 = 1e-12;
/// Prefix nano $\\left(\text{n}=10^{-9}\\right)$
pub const NANO: f64 = 1e-9;
/// Prefix milli $\\left(\text{m}=10^{-3}\\right)$
pub const MILLI: f64 = 1e-3;
/// Prefix kilo $\\left(\text{k}=10^{3}\\right)$
pub const KILO: f64 = 1e3;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    #[test]
    fn test_unit_algebra() {
        let energy = KILO * JOULE / MOL;
        assert_eq!(energy.unit(), SIUnit::MOLAR_ENERGY);
        assert_eq!((energy / (KELVIN * MOL.powi(-1))).unit(), SIUnit::ENTROPY);
        assert_eq!((1.0 / BAR).unit(), SIUnit::COMPRESSIBILITY);
        assert_eq!(
            (NANO * METER).powi(3).unit(),
            SIUnit::LENGTH.powi(3)
        );
        assert_eq!((RGAS / KB).unit(), SIUnit::MOLES.inv());
    }

    #[test]
    fn test_convert_into() -> CpResult<()> {
        let e = 4.184 * KILO * JOULE;
        assert_relative_eq!(e.convert_into(KILO * CALORIE)?, 1.0, max_relative = 1e-15);
        let v = 1.0 * MILLI * LITER;
        assert_relative_eq!(v.convert_into(METER.powi(3))?, 1e-6, max_relative = 1e-15);
        assert_relative_eq!(BAR.convert_into(PASCAL)?, 1e5, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn test_unit_mismatch() {
        let t = 300.0 * KELVIN;
        assert!(matches!(
            t.convert_into(JOULE),
            Err(CpError::UnitMismatch { .. })
        ));
        assert!(t.try_add(1.0 * BAR).is_err());
        assert!(t.try_sub(1.0 * KELVIN).is_ok());
    }

    #[test]
    fn test_array_select() -> CpResult<()> {
        let t = arr1(&[280.0, 290.0, 300.0]) * KELVIN;
        let s = t.select(&[2, 2, 0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.convert_into(KELVIN)?, arr1(&[300.0, 300.0, 280.0]));
        Ok(())
    }
}
