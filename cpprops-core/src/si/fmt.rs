use super::*;
use itertools::Itertools;
use std::fmt;

const UNIT_SYMBOLS: [&str; 7] = ["s", "m", "kg", "A", "K", "mol", "cd"];

impl fmt::Display for SIUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let unit = self
            .0
            .iter()
            .zip(UNIT_SYMBOLS.iter())
            .filter_map(|(&u, &s)| match u {
                0 => None,
                1 => Some(s.to_owned()),
                _ => Some(format!("{s}^{u}")),
            })
            .join(" ");
        write!(f, "{unit}")
    }
}

impl fmt::Debug for SIUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIUnit({self})")
    }
}

impl<T: fmt::Debug> fmt::Debug for Quantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)?;
        if !self.unit.is_dimensionless() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

/// Units used for display with their symbol and whether
/// metric prefixes are applied.
const DISPLAY_UNITS: [(SIUnit, f64, &str, bool); 17] = [
    (SIUnit::TIME, 1.0, "s", true),
    (SIUnit::LENGTH, 1.0, "m", true),
    (SIUnit::MASS, 1e-3, "g", true),
    (SIUnit::MOLES, 1.0, "mol", true),
    (SIUnit::TEMPERATURE, 1.0, "K", false),
    (SIUnit::ENERGY, 1.0, "J", true),
    (SIUnit::PRESSURE, 1.0, "Pa", true),
    (SIUnit::VOLUME, 1.0, "m³", false),
    (SIUnit::ENTROPY, 1.0, "J/K", true),
    (SIUnit::MOLAR_ENERGY, 1.0, "J/mol", true),
    (SIUnit::MOLAR_ENTROPY, 1.0, "J/mol/K", true),
    (SIUnit::SPECIFIC_ENTROPY, 1.0, "J/kg/K", true),
    (SIUnit::MOLAR_WEIGHT, 1e-3, "g/mol", true),
    (SIUnit::MASS_DENSITY, 1e-3, "g/m³", true),
    (SIUnit::COMPRESSIBILITY, 1.0, "1/Pa", false),
    (SIUnit::THERMAL_EXPANSIVITY, 1.0, "1/K", false),
    (SIUnit::DIMENSIONLESS, 1.0, "", false),
];

impl fmt::Display for Quantity<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(&(_, reference, symbol, has_prefix)) =
            DISPLAY_UNITS.iter().find(|(u, ..)| *u == self.unit)
        else {
            return write!(f, "{:?}", self);
        };
        let (value, prefix) = get_prefix(self.value / reference, has_prefix);
        if !((1e-2..1e4).contains(&value.abs()) || value == 0.0) {
            write!(f, "{:e} {}{}", value, prefix, symbol)
        } else {
            value.fmt(f)?;
            write!(f, " {}{}", prefix, symbol)
        }
    }
}

impl fmt::Display for Quantity<Array1<f64>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

fn get_prefix(value: f64, has_prefix: bool) -> (f64, &'static str) {
    if !has_prefix {
        return (value, "");
    }
    let abs_value = value.abs();
    let e: i32 = if abs_value > PICO && abs_value < 1e15 {
        (abs_value.log10().floor() as i32).div_euclid(3) * 3
    } else {
        0
    };
    let prefix = match e {
        -12 => "p",
        -9 => "n",
        -6 => "µ",
        -3 => "m",
        3 => "k",
        6 => "M",
        9 => "G",
        12 => "T",
        _ => return (value, ""),
    };
    (value / 10f64.powi(e), prefix)
}

#[cfg(test)]
mod tests {
    use crate::si::*;
    use ndarray::arr1;

    #[test]
    fn test_fmt_si() {
        assert_eq!(format!("{:.3}", RGAS), "8.314 J/mol/K");
        assert_eq!(format!("{:.1}", 44.5 * KILO * JOULE / MOL), "44.5 kJ/mol");
        assert_eq!(format!("{}", 300.0 * KELVIN), "300 K");
    }

    #[test]
    fn test_fmt_unit() {
        assert_eq!(SIUnit::MOLAR_ENERGY.to_string(), "s^-2 m^2 kg mol^-1");
        assert_eq!(SIUnit::DIMENSIONLESS.to_string(), "1");
    }

    #[test]
    fn test_fmt_arr() {
        assert_eq!(
            format!("{}", arr1(&[273.15, 323.15]) * KELVIN),
            "[273.15, 323.15] K"
        );
    }

    #[test]
    fn test_fmt_zero() {
        assert_eq!(format!("{}", 0.0 * KELVIN), "0 K");
        assert_eq!(format!("{:.2}", 0.0 * PASCAL), "0.00 Pa");
    }
}
