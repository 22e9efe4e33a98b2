use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cpprops::simulation::{Ensemble, IntegratorKind, Theory};

#[derive(Parser)]
#[command(
    name = "cpprops",
    about = "Condensed phase properties from molecular dynamics trajectories",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print progress and the result of every estimator
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute properties from liquid and gas phase trajectories
    #[command(visible_alias = "c")]
    Compute(ComputeArgs),

    /// Print stored property tables of a species
    Available(AvailableArgs),

    /// Print the run plan of a simulation for the MD engine
    #[command(subcommand)]
    Plan(PlanCommand),
}

#[derive(Args)]
pub struct ComputeArgs {
    /// Analysis configuration (json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory with one subdirectory of trajectories per method
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Simulation method, repeatable
    #[arg(short, long = "method", value_name = "METHOD", action = clap::ArgAction::Append)]
    pub methods: Vec<String>,

    /// Fraction of frames removed as equilibration
    #[arg(long, value_name = "FRACTION")]
    pub skip_fraction: Option<f64>,

    /// Number of bootstrap iterations for standard deviations
    #[arg(short, long, value_name = "N")]
    pub n_boot: Option<usize>,

    /// Seed of the bootstrap resampling
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct AvailableArgs {
    /// Species, e.g. water
    pub species: String,

    /// Directory with the stored property tables
    #[arg(short, long, value_name = "DIR", default_value = "data/all_property_data")]
    pub dir: PathBuf,

    /// Method with stored repetition runs, repeatable
    #[arg(short, long = "method", value_name = "METHOD", action = clap::ArgAction::Append)]
    pub methods: Vec<String>,
}

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Equilibration run from the initial coordinates
    Equi(EquiArgs),

    /// Production run continuing from a restart file
    Production(ProductionArgs),
}

/// Project layout options shared by all run plans.
#[derive(Args)]
pub struct LayoutOptions {
    /// Project root with trajectories/ and rst/
    #[arg(long, value_name = "DIR", default_value = "simulation")]
    pub root: PathBuf,

    /// CHARMM parameter file of the force field
    #[arg(long, value_name = "FILE")]
    pub parameter_file: Option<PathBuf>,

    /// Write the plan to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct EquiArgs {
    /// mm, ani2x, mace-s, mace-m, mace-l or nutmeg-s
    pub theory: Theory,

    /// Simulation system, e.g. mono or moh323
    pub system: String,

    /// NVT or NPT
    pub ensemble: Ensemble,

    /// Number of MD steps
    pub steps: u64,

    /// Directory with <system>.psf and <system>.crd
    #[arg(long, value_name = "DIR")]
    pub coordinates: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutOptions,
}

#[derive(Args)]
pub struct ProductionArgs {
    /// Counter of consecutive runs, starting at 1
    #[arg(long = "counter", visible_alias = "cnt", value_name = "N")]
    pub counter: usize,

    /// Base name of output files
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// CHARMM PSF file
    #[arg(short, long, value_name = "FILE")]
    pub psf: PathBuf,

    /// CHARMM CRD file
    #[arg(short, long, value_name = "FILE")]
    pub crd: PathBuf,

    /// mm, ani2x, mace-s, mace-m, mace-l or nutmeg-s
    #[arg(short = 'm', long, value_name = "THEORY")]
    pub theory: Theory,

    /// NVT or NPT
    #[arg(short, long, value_name = "ENSEMBLE")]
    pub ensemble: Ensemble,

    /// L for Langevin or NH for Nose-Hoover
    #[arg(short, long, value_name = "INT")]
    pub integrator: IntegratorKind,

    /// Number of MD steps
    #[arg(short, long, value_name = "N")]
    pub steps: u64,

    /// Simulation system, e.g. moh323
    #[arg(long, value_name = "SYSTEM")]
    pub system: String,

    /// Restart file to continue from
    #[arg(long, value_name = "FILE")]
    pub restart_input: Option<PathBuf>,

    /// Restart file written at the end of the run
    #[arg(long, value_name = "FILE")]
    pub restart_output: Option<PathBuf>,

    /// Trajectory (dcd) output
    #[arg(long, value_name = "FILE")]
    pub trajectory_output: Option<PathBuf>,

    /// State data (csv) output
    #[arg(long, value_name = "FILE")]
    pub state_data_output: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
