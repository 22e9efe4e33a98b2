use approx::assert_relative_eq;
use cpprops::analysis::{self, AnalysisConfig, Report, TrajectoryStore};
use cpprops::properties::{PhysicalConstants, Property};
use cpprops::{Observable, Trajectory, Verbosity};
use ndarray::Array1;
use std::error::Error;

const R: f64 = 8.31446261815324;
const KB: f64 = 1.380649e-23;

fn config() -> AnalysisConfig {
    AnalysisConfig {
        data_dir: "tests/analysis/data".into(),
        methods: vec!["mm".into()],
        first_run: 1,
        last_run: 2,
        ..Default::default()
    }
}

fn column(traj: &Trajectory, observable: Observable) -> Array1<f64> {
    traj.column(observable.column()).unwrap().clone()
}

fn var(x: &Array1<f64>) -> f64 {
    let m = x.mean().unwrap();
    x.iter().map(|xi| (xi - m).powi(2)).sum::<f64>() / x.len() as f64
}

fn cov(x: &Array1<f64>, y: &Array1<f64>) -> f64 {
    let (mx, my) = (x.mean().unwrap(), y.mean().unwrap());
    x.iter()
        .zip(y.iter())
        .map(|(xi, yi)| (xi - mx) * (yi - my))
        .sum::<f64>()
        / (x.len() - 1) as f64
}

#[test]
fn test_equilibration_is_removed() -> Result<(), Box<dyn Error>> {
    let config = config();
    let store = config.store();
    let liquid = store.liquid("mm")?;
    let gas = store.gas("mm")?;
    assert_eq!(liquid.len(), 22);
    assert_eq!(gas.len(), 11);

    let result = analysis::analyze(
        "mm",
        &liquid,
        &gas,
        &config,
        &PhysicalConstants::default(),
        Verbosity::None,
    )?;
    assert_eq!(result.liquid_frames, 20);
    assert_eq!(result.gas_frames, 10);
    Ok(())
}

#[test]
fn test_properties_from_files() -> Result<(), Box<dyn Error>> {
    let config = config();
    let report = analysis::run(&config, &PhysicalConstants::default(), Verbosity::None)?;
    assert_eq!(report.methods.len(), 1);
    let result = &report.methods[0];

    let store = TrajectoryStore::new("tests/analysis/data", "tip572", "NPT").runs(1, 2);
    let liquid = store.liquid("mm")?.slice_from(2);
    let gas = store.gas("mm")?.slice_from(1);
    let e_tot = column(&liquid, Observable::TotalEnergy) * 1e3;
    let e_pot = column(&liquid, Observable::PotentialEnergy) * 1e3;
    let t = column(&liquid, Observable::Temperature);
    let v = column(&liquid, Observable::BoxVolume) * 1e-27;
    let rho = column(&liquid, Observable::Density);
    let e_gas = column(&gas, Observable::PotentialEnergy) * 1e3;
    let t_mean = t.mean().unwrap();
    let v_mean = v.mean().unwrap();

    let cp = var(&e_tot) / (572.0 * t_mean.powi(2) * R) / 4.184 / 18.015;
    let alpha = cov(&e_tot, &v) / (R * t_mean.powi(2) * v_mean);
    let kappa = var(&v) / (KB * t_mean * v_mean) * 1e5;
    let hvap = (e_gas.mean().unwrap() - e_pot.mean().unwrap() / 572.0 + R * t_mean) * 1e-3;

    let check = |property: Property, expected: f64| {
        let value = result.magnitude(property).unwrap().unwrap();
        assert_relative_eq!(value, expected, max_relative = 1e-9);
    };
    check(Property::HeatCapacity, cp);
    check(Property::ThermalExpansion, alpha);
    check(Property::IsothermalCompressibility, kappa);
    check(Property::HeatOfVaporization, hvap);
    check(Property::Density, rho.mean().unwrap());

    let table = Report::method_table(result)?;
    assert!(table.contains("Heat of vaporization"));
    assert!(table.contains(&format!("{hvap:>10.2}")));
    Ok(())
}

#[test]
fn test_shuffled_frames() -> Result<(), Box<dyn Error>> {
    let config = AnalysisConfig {
        skip_fraction: 0.0,
        ..config()
    };
    let store = config.store();
    let liquid = store.liquid("mm")?;
    let gas = store.gas("mm")?;
    let reversed: Vec<usize> = (0..liquid.len()).rev().collect();
    let shuffled = liquid.select(&reversed);
    let c = PhysicalConstants::default();
    let a = analysis::analyze("mm", &liquid, &gas, &config, &c, Verbosity::None)?;
    let b = analysis::analyze("mm", &shuffled, &gas, &config, &c, Verbosity::None)?;
    for property in Property::ALL {
        assert_relative_eq!(
            a.magnitude(property).unwrap()?,
            b.magnitude(property).unwrap()?,
            max_relative = 1e-9
        );
    }
    Ok(())
}

#[test]
fn test_bootstrap_uncertainties() -> Result<(), Box<dyn Error>> {
    let config = AnalysisConfig {
        n_boot: 50,
        seed: Some(17),
        ..config()
    };
    let c = PhysicalConstants::default();
    let first = analysis::run(&config, &c, Verbosity::None)?;
    let second = analysis::run(&config, &c, Verbosity::None)?;
    let result = &first.methods[0];
    for property in Property::ALL {
        let summary = result.uncertainty(property).unwrap();
        assert_eq!(summary.n_boot, 50);
        assert!(summary.std >= 0.0);
        assert!(summary.lower <= summary.upper);
        assert_eq!(Some(summary), second.methods[0].uncertainty(property));
    }
    let table = Report::method_table(result)?;
    assert!(table.lines().next().unwrap().ends_with("Std. dev."));
    Ok(())
}

#[test]
fn test_missing_method() {
    let config = AnalysisConfig {
        methods: vec!["mace_l".into()],
        ..config()
    };
    let result = analysis::run(&config, &PhysicalConstants::default(), Verbosity::None);
    assert!(result.is_err());
}
