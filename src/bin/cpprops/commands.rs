use std::fs;

use anyhow::{Context, Result};
use cpprops::analysis::{self, AnalysisConfig, Report, StoredProperties, REPETITION_METHODS};
use cpprops::properties::PhysicalConstants;
use cpprops::simulation::{ProductionOptions, RunPlan, SimulationPaths};
use cpprops::Verbosity;

use crate::cli::{
    AvailableArgs, Cli, Command, ComputeArgs, EquiArgs, LayoutOptions, PlanCommand, ProductionArgs,
};

pub fn dispatch(cli: Cli) -> Result<()> {
    let verbosity = Verbosity::from_flag(cli.verbose);
    match cli.command {
        Command::Compute(args) => compute(args, verbosity),
        Command::Available(args) => available(args),
        Command::Plan(PlanCommand::Equi(args)) => equilibration(args),
        Command::Plan(PlanCommand::Production(args)) => production(args),
    }
}

fn analysis_config(args: ComputeArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json(path)
            .with_context(|| format!("failed to load configuration '{}'", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if !args.methods.is_empty() {
        config.methods = args.methods;
    }
    if let Some(fraction) = args.skip_fraction {
        config.skip_fraction = fraction;
    }
    if let Some(n_boot) = args.n_boot {
        config.n_boot = n_boot;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid analysis configuration")?;
    Ok(config)
}

fn compute(args: ComputeArgs, verbosity: Verbosity) -> Result<()> {
    let config = analysis_config(args)?;
    log::info!(
        "reading trajectories from '{}'",
        config.data_dir.display()
    );
    println!("\nCOMPUTING CONDENSED PHASE PROPERTIES\n");
    let report = analysis::run(&config, &PhysicalConstants::default(), verbosity)
        .context("property analysis failed")?;
    for method in &report.methods {
        println!("{}", Report::method_table(method)?);
    }
    Ok(())
}

fn available(args: AvailableArgs) -> Result<()> {
    let methods = if args.methods.is_empty() {
        REPETITION_METHODS.map(String::from).to_vec()
    } else {
        args.methods
    };
    let stored = StoredProperties::new(&args.dir, &args.species);
    let overview = stored
        .overview(&methods)
        .with_context(|| format!("no stored properties for '{}'", args.species))?;
    println!("\n{overview}");
    Ok(())
}

fn simulation_paths(layout: &LayoutOptions) -> SimulationPaths {
    let mut paths = SimulationPaths::new(&layout.root);
    if let Some(file) = &layout.parameter_file {
        paths.parameter_file = file.clone();
    }
    paths
}

fn write_plan(plan: &RunPlan, layout: &LayoutOptions) -> Result<()> {
    if !plan.runs_dynamics() {
        log::warn!("zero steps requested, the engine will not integrate");
    }
    let json = plan.to_json()?;
    match &layout.output {
        Some(file) => fs::write(file, json)
            .with_context(|| format!("failed to write run plan '{}'", file.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn equilibration(args: EquiArgs) -> Result<()> {
    let mut paths = simulation_paths(&args.layout);
    if let Some(dir) = &args.coordinates {
        paths.coordinates = dir.clone();
    }
    let plan = RunPlan::equilibration(&paths, args.theory, &args.system, args.ensemble, args.steps);
    write_plan(&plan, &args.layout)
}

fn production(args: ProductionArgs) -> Result<()> {
    let paths = simulation_paths(&args.layout);
    let mut options =
        ProductionOptions::new(args.counter, &args.name, args.integrator, &args.psf, &args.crd);
    options.restart_input = args.restart_input;
    options.restart_output = args.restart_output;
    options.trajectory_output = args.trajectory_output;
    options.state_data_output = args.state_data_output;
    let plan = RunPlan::production(
        &paths,
        args.theory,
        &args.system,
        args.ensemble,
        args.steps,
        &options,
    )?;
    write_plan(&plan, &args.layout)
}
