//! Run plans for molecular dynamics simulations with an external engine.
//!
//! A run plan collects everything the engine needs for one equilibration
//! or production run: the potential, the ensemble, the integrator and the
//! locations of all input and output files. No simulation is performed
//! here.
use cpprops_core::CpError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod plan;
pub use plan::{
    Barostat, BoxSetup, MlPotential, Nonbonded, ProductionOptions, RunKind, RunOutputs, RunPlan,
    SimulationPaths,
};

/// Temperature of all runs in K.
pub const TEMPERATURE: f64 = 300.0;
/// Time step in ps.
pub const TIMESTEP: f64 = 0.0005;
/// Friction coefficient of the thermostat in 1/ps.
pub const FRICTION: f64 = 1.0;
/// Barostat pressure in bar.
pub const PRESSURE: f64 = 1.0;
/// Number of steps between two reported frames.
pub const REPORT_INTERVAL: usize = 100;
/// Edge length of the cubic box in Å.
pub const BOX_EDGE: f64 = 27.97898408;
/// Name of the single molecule system.
pub const MONOMER: &str = "mono";

/// Level of theory of the potential energy surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theory {
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "ani2x")]
    Ani2x,
    #[serde(rename = "mace-s")]
    MaceS,
    #[serde(rename = "mace-m")]
    MaceM,
    #[serde(rename = "mace-l")]
    MaceL,
    #[serde(rename = "nutmeg-s")]
    NutmegS,
}

impl Theory {
    /// Name of the machine learning potential, `None` for the force field.
    pub fn potential(&self) -> Option<&'static str> {
        match self {
            Self::Mm => None,
            Self::Ani2x => Some("ani2x"),
            Self::MaceS => Some("mace-off23-small"),
            Self::MaceM => Some("mace-off23-medium"),
            Self::MaceL => Some("mace-off23-large"),
            Self::NutmegS => Some("nutmeg-small"),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Ani2x => "ani2x",
            Self::MaceS => "mace-s",
            Self::MaceM => "mace-m",
            Self::MaceL => "mace-l",
            Self::NutmegS => "nutmeg-s",
        }
    }
}

impl fmt::Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theory {
    type Err = CpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Self::Mm),
            "ani2x" => Ok(Self::Ani2x),
            "mace-s" => Ok(Self::MaceS),
            "mace-m" => Ok(Self::MaceM),
            "mace-l" => Ok(Self::MaceL),
            "nutmeg-s" => Ok(Self::NutmegS),
            _ => Err(CpError::InvalidInput(format!(
                "unknown theory '{s}' (choose mm, ani2x, mace-s, mace-m, mace-l or nutmeg-s)"
            ))),
        }
    }
}

/// Thermodynamic ensemble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ensemble {
    Nvt,
    Npt,
}

impl fmt::Display for Ensemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nvt => write!(f, "NVT"),
            Self::Npt => write!(f, "NPT"),
        }
    }
}

impl FromStr for Ensemble {
    type Err = CpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NVT" => Ok(Self::Nvt),
            "NPT" => Ok(Self::Npt),
            _ => Err(CpError::InvalidInput(format!(
                "unknown ensemble '{s}' (choose NVT or NPT)"
            ))),
        }
    }
}

/// Integrator of the equations of motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegratorKind {
    Langevin,
    NoseHoover,
}

impl IntegratorKind {
    /// Short tag used in file names.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Langevin => "L",
            Self::NoseHoover => "NH",
        }
    }
}

impl fmt::Display for IntegratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for IntegratorKind {
    type Err = CpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::Langevin),
            "NH" => Ok(Self::NoseHoover),
            _ => Err(CpError::InvalidInput(
                "No valid integrator chosen! Choose L for Langevin or NH for Nose-Hoover!".into(),
            )),
        }
    }
}

/// Cutoff and switching distance of the nonbonded interactions in nm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cutoffs {
    pub cutoff: f64,
    pub switch_distance: f64,
}

impl Cutoffs {
    /// The small `moh73` box needs a shorter cutoff.
    pub fn for_system(system: &str) -> Self {
        if system == "moh73" {
            Self {
                cutoff: 0.7,
                switch_distance: 0.6,
            }
        } else {
            Self {
                cutoff: 1.2,
                switch_distance: 1.0,
            }
        }
    }
}
