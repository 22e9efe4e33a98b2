//! Trajectory samples: time series of the observables reported by the simulation engine.
use crate::errors::{CpError, CpResult};
use crate::si::*;
use crate::statistics;
use crate::table::{Delimiter, Table};
use indexmap::IndexMap;
use ndarray::{concatenate, Array1, ArrayView1, Axis};
use std::fmt;
use std::path::Path;

/// Placeholder of a missing value in state data files.
pub const MISSING_VALUE: &str = "--";

/// Observables of a trajectory with their column name and unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Observable {
    PotentialEnergy,
    TotalEnergy,
    Temperature,
    BoxVolume,
    Density,
}

impl Observable {
    /// Column name in the state data files.
    pub fn column(&self) -> &'static str {
        match self {
            Self::PotentialEnergy => "Potential Energy (kJ/mole)",
            Self::TotalEnergy => "Total Energy (kJ/mole)",
            Self::Temperature => "Temperature (K)",
            Self::BoxVolume => "Box Volume (nm^3)",
            Self::Density => "Density (g/mL)",
        }
    }

    /// Unit of the values in the column.
    pub fn unit(&self) -> Quantity {
        match self {
            Self::PotentialEnergy | Self::TotalEnergy => KILO * JOULE / MOL,
            Self::Temperature => KELVIN,
            Self::BoxVolume => (NANO * METER).powi(3),
            Self::Density => GRAM / (MILLI * LITER),
        }
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Time-ordered frames of a simulation stored as one array per column.
///
/// All columns have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    columns: IndexMap<String, Array1<f64>>,
}

impl Trajectory {
    /// Create a trajectory from named columns of equal length.
    pub fn from_columns<S, I>(columns: I) -> CpResult<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Array1<f64>)>,
    {
        let columns: IndexMap<String, Array1<f64>> =
            columns.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if let Some((first, x)) = columns.first() {
            if let Some((name, y)) = columns.iter().find(|(_, y)| y.len() != x.len()) {
                return Err(CpError::InputData(format!(
                    "column '{name}' has {} frames while column '{first}' has {}",
                    y.len(),
                    x.len()
                )));
            }
        }
        Ok(Self { columns })
    }

    /// Parse all cells of a table as floating point numbers.
    pub fn from_table(table: &Table, source: &str) -> CpResult<Self> {
        let columns = table
            .header()
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let values = table
                    .rows()
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        // written by the engine for values not available yet
                        if row[j] == MISSING_VALUE {
                            return Ok(f64::NAN);
                        }
                        row[j].parse::<f64>().map_err(|e| {
                            CpError::InputData(format!(
                                "{source}: frame {}: cannot parse '{}' in column '{name}': {e}",
                                i + 1,
                                row[j]
                            ))
                        })
                    })
                    .collect::<CpResult<Array1<f64>>>()?;
                Ok((name.clone(), values))
            })
            .collect::<CpResult<Vec<_>>>()?;
        Self::from_columns(columns)
    }

    /// Read a tab separated state data file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CpResult<Self> {
        let path = path.as_ref();
        let table = Table::from_file(path, Delimiter::Tab)?;
        Self::from_table(&table, &path.display().to_string())
    }

    /// Append trajectories in the given order. All parts need the same columns.
    pub fn concat(parts: &[Trajectory]) -> CpResult<Self> {
        let Some(first) = parts.first() else {
            return Err(CpError::InvalidInput(
                "cannot concatenate an empty list of trajectories".into(),
            ));
        };
        let columns = first
            .columns
            .keys()
            .map(|name| {
                let views = parts
                    .iter()
                    .enumerate()
                    .map(|(k, p)| {
                        p.columns.get(name).map(|c| c.view()).ok_or_else(|| {
                            CpError::InputData(format!("part {k} has no column '{name}'"))
                        })
                    })
                    .collect::<CpResult<Vec<ArrayView1<f64>>>>()?;
                let joined = concatenate(Axis(0), &views)
                    .map_err(|e| CpError::InputData(e.to_string()))?;
                Ok((name.clone(), joined))
            })
            .collect::<CpResult<Vec<_>>>()?;
        Self::from_columns(columns)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in file order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Raw values of a column.
    pub fn column(&self, name: &str) -> CpResult<&Array1<f64>> {
        self.columns
            .get(name)
            .ok_or_else(|| CpError::InputData(format!("missing column '{name}'")))
    }

    /// Time series of an observable with its unit.
    pub fn get(&self, observable: Observable) -> CpResult<QuantityArray1> {
        Ok(self.column(observable.column())? * observable.unit())
    }

    /// Arithmetic mean of an observable.
    pub fn mean(&self, observable: Observable) -> CpResult<Quantity> {
        statistics::mean(&self.get(observable)?)
    }

    /// Number of leading frames removed for a given equilibration fraction.
    ///
    /// The count is rounded to the nearest integer, e.g. 10 of 110 frames
    /// for a fraction of 0.090909.
    pub fn equilibration_frames(len: usize, fraction: f64) -> CpResult<usize> {
        if !(0.0..1.0).contains(&fraction) {
            return Err(CpError::InvalidInput(format!(
                "equilibration fraction must be in [0, 1), got {fraction}"
            )));
        }
        Ok(((len as f64 * fraction).round() as usize).min(len))
    }

    /// Drop the leading equilibration part of the trajectory.
    pub fn skip_equilibration(&self, fraction: f64) -> CpResult<Self> {
        let skip = Self::equilibration_frames(self.len(), fraction)?;
        Ok(self.slice_from(skip))
    }

    /// All frames starting at `start`.
    pub fn slice_from(&self, start: usize) -> Self {
        let start = start.min(self.len());
        Self {
            columns: self
                .columns
                .iter()
                .map(|(k, v)| (k.clone(), v.slice(ndarray::s![start..]).to_owned()))
                .collect(),
        }
    }

    /// New trajectory built from the frames at `indices` (repetitions allowed).
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(k, v)| (k.clone(), indices.iter().map(|&i| v[i]).collect()))
                .collect(),
        }
    }
}
