use crate::bootstrap::BootstrapSummary;
use crate::properties::Property;
use cpprops_core::si::Quantity;
use cpprops_core::CpResult;
use indexmap::IndexMap;
use std::fmt;

const RULE: usize = 85;

/// Properties of one simulation method.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodProperties {
    pub method: String,
    /// number of liquid frames after removing the equilibration
    pub liquid_frames: usize,
    /// number of gas phase frames after removing the equilibration
    pub gas_frames: usize,
    values: IndexMap<Property, Quantity>,
    uncertainties: IndexMap<Property, BootstrapSummary>,
}

impl MethodProperties {
    pub fn new(method: &str, liquid_frames: usize, gas_frames: usize) -> Self {
        Self {
            method: method.into(),
            liquid_frames,
            gas_frames,
            values: IndexMap::new(),
            uncertainties: IndexMap::new(),
        }
    }

    /// Store the value of a property. The unit has to match the reporting unit.
    pub fn insert(&mut self, property: Property, value: Quantity) -> CpResult<()> {
        value.check_unit(property.unit().unit())?;
        self.values.insert(property, value);
        Ok(())
    }

    pub fn insert_uncertainty(&mut self, property: Property, summary: BootstrapSummary) {
        self.uncertainties.insert(property, summary);
    }

    pub fn get(&self, property: Property) -> Option<Quantity> {
        self.values.get(&property).copied()
    }

    /// Value of a property in its reporting unit.
    pub fn magnitude(&self, property: Property) -> Option<CpResult<f64>> {
        self.get(property).map(|v| property.magnitude(v))
    }

    pub fn uncertainty(&self, property: Property) -> Option<&BootstrapSummary> {
        self.uncertainties.get(&property)
    }

    pub fn has_uncertainties(&self) -> bool {
        !self.uncertainties.is_empty()
    }
}

/// Report table over all analyzed methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub methods: Vec<MethodProperties>,
}

impl Report {
    pub fn new(methods: Vec<MethodProperties>) -> Self {
        Self { methods }
    }

    /// Formatted table block of a single method.
    pub fn method_table(properties: &MethodProperties) -> CpResult<String> {
        let with_std = properties.has_uncertainties();
        let mut s = format!("{:35} {:10} {:>10} {:>25}", "Property", "Model", "Value", "Unit");
        if with_std {
            s += &format!(" {:>10}", "Std. dev.");
        }
        s += &format!("\n{}\n", "-".repeat(RULE));
        for property in Property::ALL {
            let Some(value) = properties.get(property) else {
                continue;
            };
            let scale = property.scale();
            s += &format!(
                "{:35} {:<10} {:>10.2} {:>25}",
                property.label(),
                properties.method,
                property.magnitude(value)? * scale,
                property.symbol()
            );
            if with_std {
                match properties.uncertainty(property) {
                    Some(u) => s += &format!(" {:>10.2}", u.std * scale),
                    None => s += &format!(" {:>10}", "-"),
                }
            }
            s.push('\n');
        }
        s += &"-".repeat(RULE);
        s.push('\n');
        Ok(s)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.methods {
            let table = Self::method_table(m).map_err(|_| fmt::Error)?;
            writeln!(f, "{table}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cpprops_core::si::*;
    use cpprops_core::CpError;

    fn water() -> MethodProperties {
        let mut m = MethodProperties::new("mm", 100, 100);
        m.insert(Property::HeatCapacity, 4184.0 * JOULE / (KILOGRAM * KELVIN))
            .unwrap();
        m.insert(Property::ThermalExpansion, 2.6e-4 / KELVIN).unwrap();
        m.insert(Property::IsothermalCompressibility, 4.5e-10 / PASCAL)
            .unwrap();
        m.insert(Property::HeatOfVaporization, 44.0 * KILO * JOULE / MOL)
            .unwrap();
        m.insert(Property::Density, 997.0 * KILOGRAM / METER.powi(3))
            .unwrap();
        m
    }

    #[test]
    fn test_insert_wrong_unit() {
        let mut m = water();
        assert!(matches!(
            m.insert(Property::Density, 300.0 * KELVIN),
            Err(CpError::UnitMismatch { .. })
        ));
        assert_relative_eq!(
            m.magnitude(Property::Density).unwrap().unwrap(),
            0.997,
            max_relative = 1e-12
        );
        let report = Report::new(vec![m]).to_string();
        assert!(report.contains("Density"));
    }

    #[test]
    fn test_method_table() -> CpResult<()> {
        let table = Report::method_table(&water())?;
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "-".repeat(85));
        assert!(lines[0].starts_with("Property"));
        assert_eq!(
            lines[2],
            format!("{:35} {:<10} {:>10} {:>25}", "Heat capacity", "mm", "1.00", "cal/g/K")
        );
        assert!(lines[3].contains("0.03"));
        assert!(lines[4].contains("Isothermal compressibility (*1e4)"));
        assert!(lines[4].contains("0.45"));
        assert!(lines[5].contains("44.00"));
        assert!(lines[6].contains("1.00"));
        assert!(!lines[0].contains("Std. dev."));
        Ok(())
    }

    #[test]
    fn test_method_table_with_uncertainty() -> CpResult<()> {
        let mut m = water();
        m.insert_uncertainty(
            Property::Density,
            BootstrapSummary {
                n_boot: 10,
                mean: 0.997,
                std: 0.004,
                confidence_level: 0.95,
                lower: 0.99,
                upper: 1.0,
            },
        );
        let table = Report::method_table(&m)?;
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].ends_with("Std. dev."));
        assert!(lines[6].ends_with("0.00"));
        assert!(lines[2].ends_with('-'));
        Ok(())
    }
}
