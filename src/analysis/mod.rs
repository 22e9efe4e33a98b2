//! Property analysis of liquid and gas phase trajectories.
use crate::bootstrap::BootstrapSummary;
use crate::properties::{self, PhysicalConstants, Property};
use cpprops_core::statistics::mean;
use cpprops_core::{log_result, CpResult, Observable, Trajectory, Verbosity};

mod config;
mod report;
mod store;
mod stored;
pub use config::AnalysisConfig;
pub use report::{MethodProperties, Report};
pub use store::TrajectoryStore;
pub use stored::{StoredProperties, REPETITION_METHODS};

/// Compute all properties of a method from its liquid and gas trajectories.
///
/// The equilibration part is removed from both trajectories before the
/// estimators are evaluated. If bootstrapping is enabled in the
/// configuration, the standard deviation of every property is estimated
/// from the bootstrap ensemble.
pub fn analyze(
    method: &str,
    liquid: &Trajectory,
    gas: &Trajectory,
    config: &AnalysisConfig,
    constants: &PhysicalConstants,
    verbosity: Verbosity,
) -> CpResult<MethodProperties> {
    config.validate()?;
    let liquid = liquid.skip_equilibration(config.skip_fraction)?;
    let gas = gas.skip_equilibration(config.skip_fraction)?;
    log::info!(
        "{method}: {} liquid frames, {} gas frames after equilibration",
        liquid.len(),
        gas.len()
    );

    let total_energy = liquid.get(Observable::TotalEnergy)?;
    let potential_energy = liquid.get(Observable::PotentialEnergy)?;
    let temperature = liquid.get(Observable::Temperature)?;
    let volume = liquid.get(Observable::BoxVolume)?;
    let density = liquid.get(Observable::Density)?;
    let gas_energy = gas.get(Observable::PotentialEnergy)?;
    let mean_temperature = mean(&temperature)?;
    let molar_mass = config.molar_mass();

    let mut result = MethodProperties::new(method, liquid.len(), gas.len());
    result.insert(
        Property::HeatCapacity,
        properties::heat_capacity(
            &total_energy,
            config.box_count,
            mean_temperature,
            molar_mass,
            constants,
            verbosity,
        )?,
    )?;
    result.insert(
        Property::ThermalExpansion,
        properties::thermal_expansion(
            &total_energy,
            &volume,
            mean_temperature,
            constants,
            verbosity,
        )?,
    )?;
    result.insert(
        Property::IsothermalCompressibility,
        properties::isothermal_compressibility(&volume, mean_temperature, constants, verbosity)?,
    )?;
    result.insert(
        Property::HeatOfVaporization,
        properties::heat_of_vaporization(
            &potential_energy,
            &gas_energy,
            &temperature,
            config.box_count,
            constants,
            verbosity,
        )?,
    )?;
    result.insert(Property::Density, properties::density(&density, verbosity)?)?;

    if let Some(bootstrap) = config.bootstrap() {
        let bootstrap = bootstrap.verbosity(if verbosity >= Verbosity::Iter {
            Verbosity::Iter
        } else {
            Verbosity::None
        });
        log::info!("{method}: bootstrap with {} iterations", bootstrap.n_boot());
        let ensembles = [
            (
                Property::HeatCapacity,
                bootstrap.heat_capacity(
                    &total_energy,
                    &temperature,
                    config.box_count,
                    molar_mass,
                    constants,
                )?,
            ),
            (
                Property::ThermalExpansion,
                bootstrap.thermal_expansion(&total_energy, &volume, &temperature, constants)?,
            ),
            (
                Property::IsothermalCompressibility,
                bootstrap.isothermal_compressibility(&volume, &temperature, constants)?,
            ),
            (
                Property::HeatOfVaporization,
                bootstrap.heat_of_vaporization(
                    &potential_energy,
                    &gas_energy,
                    &temperature,
                    config.box_count,
                    constants,
                )?,
            ),
            (
                Property::Density,
                bootstrap.resample(&[("density", &density)], |s| {
                    Property::Density.magnitude(properties::density(&s[0], Verbosity::None)?)
                })?,
            ),
        ];
        for (property, ensemble) in ensembles {
            let summary = BootstrapSummary::from_ensemble(&ensemble, config.confidence_level)?;
            log_result!(verbosity, "{property}: {summary} {}", property.symbol());
            result.insert_uncertainty(property, summary);
        }
    }
    Ok(result)
}

/// Analyze all methods of a configuration.
pub fn run(
    config: &AnalysisConfig,
    constants: &PhysicalConstants,
    verbosity: Verbosity,
) -> CpResult<Report> {
    config.validate()?;
    let store = config.store();
    let methods = config
        .methods
        .iter()
        .map(|method| {
            log::info!("analyzing {method}");
            let liquid = store.liquid(method)?;
            let gas = store.gas(method)?;
            analyze(method, &liquid, &gas, config, constants, verbosity)
        })
        .collect::<CpResult<Vec<_>>>()?;
    Ok(Report::new(methods))
}
