use cpprops_core::{CpResult, Trajectory};
use std::path::{Path, PathBuf};

/// Location of the state data files of liquid and gas phase runs.
///
/// Liquid runs are stored as `<dir>/<method>/<method>_<system>_<i>_<ensemble>.csv`,
/// the gas phase reference as `<dir>/<method>/gas_<method>.csv`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrajectoryStore {
    data_dir: PathBuf,
    system: String,
    ensemble: String,
    first_run: usize,
    last_run: usize,
}

impl TrajectoryStore {
    /// Store of a single liquid run.
    pub fn new<P: AsRef<Path>>(data_dir: P, system: &str, ensemble: &str) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            system: system.into(),
            ensemble: ensemble.into(),
            first_run: 1,
            last_run: 1,
        }
    }

    /// Range of liquid runs (inclusive).
    pub fn runs(mut self, first: usize, last: usize) -> Self {
        self.first_run = first;
        self.last_run = last;
        self
    }

    pub fn liquid_path(&self, method: &str, run: usize) -> PathBuf {
        self.data_dir.join(method).join(format!(
            "{method}_{}_{run}_{}.csv",
            self.system, self.ensemble
        ))
    }

    pub fn gas_path(&self, method: &str) -> PathBuf {
        self.data_dir
            .join(method)
            .join(format!("gas_{method}.csv"))
    }

    /// All liquid runs of a method concatenated in run order.
    pub fn liquid(&self, method: &str) -> CpResult<Trajectory> {
        let parts = (self.first_run..=self.last_run)
            .map(|run| {
                let path = self.liquid_path(method, run);
                log::debug!("reading {}", path.display());
                Trajectory::from_file(path)
            })
            .collect::<CpResult<Vec<_>>>()?;
        Trajectory::concat(&parts)
    }

    /// Gas phase reference trajectory of a method.
    pub fn gas(&self, method: &str) -> CpResult<Trajectory> {
        let path = self.gas_path(method);
        log::debug!("reading {}", path.display());
        Trajectory::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpprops_core::{CpError, Observable};
    use std::fs;

    fn write_run(dir: &Path, name: &str, energies: &[f64]) {
        let mut content = String::from("#\"Step\"\t\"Potential Energy (kJ/mole)\"\n");
        for (i, e) in energies.iter().enumerate() {
            content.push_str(&format!("{}\t{e}\n", 100 * (i + 1)));
        }
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_paths() {
        let store = TrajectoryStore::new("data", "tip572", "NPT").runs(1, 11);
        assert_eq!(
            store.liquid_path("mace_s", 3),
            Path::new("data/mace_s/mace_s_tip572_3_NPT.csv")
        );
        assert_eq!(store.gas_path("mm"), Path::new("data/mm/gas_mm.csv"));
    }

    #[test]
    fn test_read_runs() -> CpResult<()> {
        let dir = tempfile::tempdir().unwrap();
        let method_dir = dir.path().join("mm");
        fs::create_dir(&method_dir).unwrap();
        write_run(&method_dir, "mm_tip572_1_NPT.csv", &[1.0, 2.0]);
        write_run(&method_dir, "mm_tip572_2_NPT.csv", &[3.0]);
        write_run(&method_dir, "gas_mm.csv", &[0.5, 0.7]);

        let store = TrajectoryStore::new(dir.path(), "tip572", "NPT").runs(1, 2);
        let liquid = store.liquid("mm")?;
        assert_eq!(
            liquid.column(Observable::PotentialEnergy.column())?.to_vec(),
            vec![1.0, 2.0, 3.0]
        );
        assert_eq!(store.gas("mm")?.len(), 2);
        assert!(matches!(store.liquid("ani2x"), Err(CpError::Io { .. })));
        Ok(())
    }
}
