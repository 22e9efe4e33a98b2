use super::*;
use cpprops_core::{CpResult, Observable};
use std::path::{Path, PathBuf};

/// Directory layout of a simulation project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationPaths {
    /// project root holding `trajectories/` and `rst/`
    pub root: PathBuf,
    /// directory with `<system>.psf` and `<system>.crd`
    pub coordinates: PathBuf,
    /// CHARMM parameter file of the force field
    pub parameter_file: PathBuf,
}

impl SimulationPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            coordinates: root.join("coordinates"),
            parameter_file: root.join("toppar").join("par_all36_cgenff.prm"),
            root,
        }
    }

    pub fn trajectories(&self, theory: Theory) -> PathBuf {
        self.root.join("trajectories").join(theory.to_string())
    }

    pub fn restarts(&self) -> PathBuf {
        self.root.join("rst")
    }

    /// Restart file written at the end of an equilibration run.
    pub fn equilibration_restart(&self, ensemble: Ensemble, system: &str, theory: Theory) -> PathBuf {
        self.restarts()
            .join(format!("equi_{ensemble}_{system}_{theory}.rst"))
    }
}

/// Kind of run with the counter of consecutive production runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    Equilibration,
    Production { counter: usize },
}

/// Machine learning potential setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlPotential {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_charge: Option<i32>,
    pub remove_center_of_mass_motion: bool,
}

impl MlPotential {
    fn new(theory: Theory) -> Option<Self> {
        theory.potential().map(|name| Self {
            name: name.into(),
            implementation: (theory == Theory::Ani2x).then(|| "torchani".into()),
            total_charge: (theory == Theory::NutmegS).then_some(0),
            remove_center_of_mass_motion: true,
        })
    }
}

/// Force field setup for nonbonded interactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nonbonded {
    pub parameter_file: PathBuf,
    /// particle mesh Ewald for periodic systems
    pub pme: bool,
    pub cutoffs: Cutoffs,
    pub rigid_water: bool,
}

/// Monte Carlo barostat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Barostat {
    /// pressure in bar
    pub pressure: f64,
    /// temperature in K
    pub temperature: f64,
}

/// Setup of the periodic box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxSetup {
    /// cubic box with the edge length in Å
    Cubic { edge: f64 },
    /// box spanned by the extent of the initial coordinates
    CoordinateExtent,
}

/// Files written by a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutputs {
    pub trajectory: PathBuf,
    pub state_data: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_state: Option<PathBuf>,
}

/// Options of a production run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductionOptions {
    /// counter of consecutive runs, starting at 1
    pub counter: usize,
    /// base name of output files
    pub name: String,
    pub integrator: IntegratorKind,
    pub topology: PathBuf,
    pub coordinates: PathBuf,
    pub restart_input: Option<PathBuf>,
    pub restart_output: Option<PathBuf>,
    pub trajectory_output: Option<PathBuf>,
    pub state_data_output: Option<PathBuf>,
}

impl ProductionOptions {
    pub fn new<P: AsRef<Path>>(
        counter: usize,
        name: &str,
        integrator: IntegratorKind,
        topology: P,
        coordinates: P,
    ) -> Self {
        Self {
            counter,
            name: name.into(),
            integrator,
            topology: topology.as_ref().to_path_buf(),
            coordinates: coordinates.as_ref().to_path_buf(),
            restart_input: None,
            restart_output: None,
            trajectory_output: None,
            state_data_output: None,
        }
    }
}

/// Everything the engine needs to perform one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunPlan {
    pub kind: RunKind,
    pub theory: Theory,
    pub system: String,
    pub ensemble: Ensemble,
    pub integrator: IntegratorKind,
    pub topology: PathBuf,
    pub coordinates: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential: Option<MlPotential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonbonded: Option<Nonbonded>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barostat: Option<Barostat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_box: Option<BoxSetup>,
    /// temperature in K
    pub temperature: f64,
    /// time step in ps
    pub timestep: f64,
    /// friction coefficient in 1/ps
    pub friction: f64,
    pub precision: String,
    pub steps: u64,
    pub report_interval: usize,
    /// columns of the state data file
    pub reported_columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_input: Option<PathBuf>,
    pub outputs: RunOutputs,
}

impl RunPlan {
    fn base(
        kind: RunKind,
        paths: &SimulationPaths,
        theory: Theory,
        system: &str,
        ensemble: Ensemble,
        integrator: IntegratorKind,
        steps: u64,
        outputs: RunOutputs,
    ) -> Self {
        let monomer = system == MONOMER;
        let nonbonded = (theory == Theory::Mm).then(|| Nonbonded {
            parameter_file: paths.parameter_file.clone(),
            pme: !monomer,
            cutoffs: Cutoffs::for_system(system),
            rigid_water: true,
        });
        let barostat = (ensemble == Ensemble::Npt && !monomer).then_some(Barostat {
            pressure: PRESSURE,
            temperature: TEMPERATURE,
        });
        Self {
            kind,
            theory,
            system: system.into(),
            ensemble,
            integrator,
            topology: paths.coordinates.join(format!("{system}.psf")),
            coordinates: paths.coordinates.join(format!("{system}.crd")),
            potential: MlPotential::new(theory),
            nonbonded,
            barostat,
            periodic_box: None,
            temperature: TEMPERATURE,
            timestep: TIMESTEP,
            friction: FRICTION,
            precision: "mixed".into(),
            steps,
            report_interval: REPORT_INTERVAL,
            reported_columns: [
                "Step",
                "Time (ps)",
                Observable::PotentialEnergy.column(),
                Observable::TotalEnergy.column(),
                Observable::Temperature.column(),
                Observable::BoxVolume.column(),
                Observable::Density.column(),
                "Speed (ns/day)",
            ]
            .map(String::from)
            .to_vec(),
            restart_input: None,
            outputs,
        }
    }

    /// Equilibration run with a Langevin integrator starting from the
    /// initial coordinates.
    pub fn equilibration(
        paths: &SimulationPaths,
        theory: Theory,
        system: &str,
        ensemble: Ensemble,
        steps: u64,
    ) -> Self {
        let monomer = system == MONOMER;
        let dir = paths.trajectories(theory);
        let stem = format!("{system}_{theory}_{ensemble}_equi");
        let outputs = RunOutputs {
            trajectory: dir.join(format!("{stem}.dcd")),
            state_data: dir.join(format!("{stem}.csv")),
            restart: (!monomer).then(|| paths.equilibration_restart(ensemble, system, theory)),
            system_state: (!monomer).then(|| {
                paths
                    .restarts()
                    .join(format!("equi_{ensemble}_state_{system}_{theory}.txt"))
            }),
        };
        let mut plan = Self::base(
            RunKind::Equilibration,
            paths,
            theory,
            system,
            ensemble,
            IntegratorKind::Langevin,
            steps,
            outputs,
        );
        if !monomer {
            plan.periodic_box = Some(BoxSetup::Cubic { edge: BOX_EDGE });
        }
        plan
    }

    /// Production run number `options.counter`.
    ///
    /// The first run continues from the restart file of the force field
    /// equilibration, every further run from the restart file of the
    /// previous run. Explicitly given files take precedence, the restart
    /// input of the first run included.
    pub fn production(
        paths: &SimulationPaths,
        theory: Theory,
        system: &str,
        ensemble: Ensemble,
        steps: u64,
        options: &ProductionOptions,
    ) -> CpResult<Self> {
        if options.counter == 0 {
            return Err(CpError::InvalidInput(
                "production run counter starts at 1".into(),
            ));
        }
        let monomer = system == MONOMER;
        let integrator = options.integrator;
        let dir = paths
            .trajectories(theory)
            .join(format!("traj_{ensemble}_{integrator}"));
        let file = |counter: usize, extension: &str| {
            dir.join(format!(
                "{}_{counter}_{ensemble}_{integrator}.{extension}",
                options.name
            ))
        };
        let outputs = RunOutputs {
            trajectory: options
                .trajectory_output
                .clone()
                .unwrap_or_else(|| file(options.counter, "dcd")),
            state_data: options
                .state_data_output
                .clone()
                .unwrap_or_else(|| file(options.counter, "csv")),
            restart: Some(
                options
                    .restart_output
                    .clone()
                    .unwrap_or_else(|| file(options.counter, "rst")),
            ),
            system_state: None,
        };
        let restart_input = options.restart_input.clone().unwrap_or_else(|| {
            if options.counter == 1 {
                paths.equilibration_restart(ensemble, system, Theory::Mm)
            } else {
                file(options.counter - 1, "rst")
            }
        });

        let mut plan = Self::base(
            RunKind::Production {
                counter: options.counter,
            },
            paths,
            theory,
            system,
            ensemble,
            integrator,
            steps,
            outputs,
        );
        plan.topology = options.topology.clone();
        plan.coordinates = options.coordinates.clone();
        plan.restart_input = Some(restart_input);
        if !monomer {
            plan.periodic_box = Some(match ensemble {
                Ensemble::Nvt => BoxSetup::Cubic { edge: BOX_EDGE },
                Ensemble::Npt => BoxSetup::CoordinateExtent,
            });
        }
        Ok(plan)
    }

    /// Whether the engine has to integrate at all.
    pub fn runs_dynamics(&self) -> bool {
        self.steps > 0
    }

    pub fn to_json(&self) -> CpResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
