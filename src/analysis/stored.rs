use cpprops_core::{CpResult, Delimiter, Table};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Methods with stored repetition runs.
pub const REPETITION_METHODS: [&str; 3] = ["mm", "ani2x", "mace_s"];

/// Previously computed property tables of a species.
///
/// Tables are `&` separated and stored below
/// `<dir>/<species>/thermodynamic_properties`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredProperties {
    dir: PathBuf,
    species: String,
}

impl StoredProperties {
    pub fn new<P: AsRef<Path>>(dir: P, species: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            species: species.into(),
        }
    }

    fn properties_dir(&self) -> PathBuf {
        self.dir
            .join(&self.species)
            .join("thermodynamic_properties")
    }

    /// Properties of the initial NPT run.
    pub fn initial_path(&self) -> PathBuf {
        self.properties_dir()
            .join("initial_npt_run")
            .join(format!("cp_props_{}.csv", self.species))
    }

    /// Properties of the initial NPT run as function of simulation time.
    pub fn time_series_path(&self) -> PathBuf {
        self.properties_dir()
            .join("initial_npt_run")
            .join(format!("cp_props_time_series_{}.csv", self.species))
    }

    /// Properties of every repetition run of a method.
    pub fn repetitions_path(&self, method: &str) -> PathBuf {
        self.properties_dir()
            .join("5_repetition_runs")
            .join(format!("{method}_props_per_run.csv"))
    }

    pub fn initial(&self) -> CpResult<Table> {
        Table::from_file(self.initial_path(), Delimiter::Ampersand)
    }

    pub fn time_series(&self) -> CpResult<Table> {
        Table::from_file(self.time_series_path(), Delimiter::Ampersand)
    }

    pub fn repetitions(&self, method: &str) -> CpResult<Table> {
        Table::from_file(self.repetitions_path(method), Delimiter::Ampersand)
    }

    /// Printable overview of the initial run and the repetition runs of `methods`.
    pub fn overview(&self, methods: &[String]) -> CpResult<String> {
        let rule = "-".repeat(50);
        let species = &self.species;
        let mut s = String::new();
        writeln!(s, "Properties from initial NPT 1ns run for {species}").ok();
        writeln!(s, "{}{rule}\n", self.initial()?).ok();
        writeln!(s, "Property time series from initial NPT run for {species}").ok();
        writeln!(s, "{}{rule}\n", self.time_series()?).ok();
        for method in methods {
            writeln!(s, "Properties from 5 repetition NPT runs for {species} with {method}").ok();
            writeln!(s, "{}{rule}\n", self.repetitions(method)?).ok();
        }
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpprops_core::CpError;
    use std::fs;

    #[test]
    fn test_paths() {
        let stored = StoredProperties::new("props", "water");
        assert_eq!(
            stored.initial_path(),
            Path::new("props/water/thermodynamic_properties/initial_npt_run/cp_props_water.csv")
        );
        assert_eq!(
            stored.repetitions_path("ani2x"),
            Path::new("props/water/thermodynamic_properties/5_repetition_runs/ani2x_props_per_run.csv")
        );
    }

    #[test]
    fn test_overview() -> CpResult<()> {
        let dir = tempfile::tempdir().unwrap();
        let stored = StoredProperties::new(dir.path(), "water");
        let initial = stored.initial_path();
        fs::create_dir_all(initial.parent().unwrap()).unwrap();
        fs::create_dir_all(stored.repetitions_path("mm").parent().unwrap()).unwrap();
        fs::write(&initial, "method & density\nmm & 0.99\n").unwrap();
        fs::write(stored.time_series_path(), "time & density\n1 & 0.98\n").unwrap();
        fs::write(stored.repetitions_path("mm"), "run & density\n1 & 0.99\n").unwrap();

        let overview = stored.overview(&["mm".to_string()])?;
        assert!(overview.contains("Properties from initial NPT 1ns run for water"));
        assert!(overview.contains("with mm"));
        assert!(overview.contains("0.98"));
        assert!(matches!(
            stored.overview(&["ani2x".to_string()]),
            Err(CpError::Io { .. })
        ));
        Ok(())
    }
}
