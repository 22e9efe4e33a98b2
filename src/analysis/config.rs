use super::TrajectoryStore;
use crate::bootstrap::Bootstrap;
use cpprops_core::si::{Quantity, GRAM, MOL};
use cpprops_core::{CpError, CpResult, Trajectory};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Settings of a property analysis.
///
/// All fields are optional in the json representation and fall back to
/// the values of a 572 molecule water box simulated in eleven NPT runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// directory with one subdirectory per method
    pub data_dir: PathBuf,
    /// simulation methods (potentials) to analyze
    pub methods: Vec<String>,
    pub system: String,
    pub ensemble: String,
    /// first liquid run (inclusive)
    pub first_run: usize,
    /// last liquid run (inclusive)
    pub last_run: usize,
    /// fraction of frames removed as equilibration
    pub skip_fraction: f64,
    /// number of molecules in the liquid box
    pub box_count: usize,
    /// molar mass in g/mol
    pub molar_mass: f64,
    /// number of bootstrap iterations, no uncertainties for 0
    pub n_boot: usize,
    pub seed: Option<u64>,
    pub confidence_level: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/water_traj"),
            methods: ["mm", "ani2x", "mace_s", "mace_m"]
                .map(String::from)
                .to_vec(),
            system: "tip572".into(),
            ensemble: "NPT".into(),
            first_run: 1,
            last_run: 11,
            skip_fraction: 0.090909,
            box_count: 572,
            molar_mass: 18.015,
            n_boot: 0,
            seed: None,
            confidence_level: 0.95,
        }
    }
}

impl AnalysisConfig {
    /// Read a configuration from a json file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> CpResult<Self> {
        let path = file.as_ref();
        let f = File::open(path).map_err(|source| CpError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(f))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the consistency of the settings.
    pub fn validate(&self) -> CpResult<()> {
        if self.methods.is_empty() {
            return Err(CpError::InvalidInput("no method given".into()));
        }
        if self.first_run > self.last_run {
            return Err(CpError::InvalidInput(format!(
                "first run {} is larger than last run {}",
                self.first_run, self.last_run
            )));
        }
        Trajectory::equilibration_frames(0, self.skip_fraction)?;
        if self.box_count == 0 {
            return Err(CpError::InvalidInput(
                "number of molecules must be positive".into(),
            ));
        }
        if self.molar_mass.is_nan() || self.molar_mass <= 0.0 {
            return Err(CpError::InvalidInput(format!(
                "molar mass must be positive, got {}",
                self.molar_mass
            )));
        }
        if self.n_boot == 1 {
            return Err(CpError::InvalidInput(
                "n_boot must be 0 or at least 2".into(),
            ));
        }
        if self.confidence_level.is_nan()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(CpError::InvalidInput(format!(
                "confidence level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }
        Ok(())
    }

    pub fn molar_mass(&self) -> Quantity {
        self.molar_mass * GRAM / MOL
    }

    /// Bootstrap settings, `None` if no iterations are requested.
    pub fn bootstrap(&self) -> Option<Bootstrap> {
        (self.n_boot > 0).then(|| {
            let bootstrap = Bootstrap::new(self.n_boot);
            match self.seed {
                Some(seed) => bootstrap.seed(seed),
                None => bootstrap,
            }
        })
    }

    pub fn store(&self) -> TrajectoryStore {
        TrajectoryStore::new(&self.data_dir, &self.system, &self.ensemble)
            .runs(self.first_run, self.last_run)
    }
}
