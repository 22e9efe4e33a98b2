//! Delimited text tables.
//!
//! Trajectory files written by the simulation engine are tab separated,
//! aggregated property tables are separated by `&`. The header line may be
//! commented with `#` and names may be enclosed in double quotes.
use crate::errors::{CpError, CpResult};
use itertools::Itertools;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Field separator of a table file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Ampersand,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Tab => '\t',
            Self::Ampersand => '&',
        }
    }
}

/// A table of string cells with named columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn clean_cell(cell: &str) -> String {
    cell.trim().trim_matches('"').trim().to_owned()
}

impl Table {
    /// Create a table from a header and rows of equal length.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> CpResult<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != header.len())
        {
            return Err(CpError::InputData(format!(
                "row {i} has {} fields, expected {}",
                row.len(),
                header.len()
            )));
        }
        Ok(Self { header, rows })
    }

    /// Parse a table from a reader. `source` is used in error messages.
    pub fn from_reader<R: BufRead>(
        reader: R,
        delimiter: Delimiter,
        source: &str,
    ) -> CpResult<Self> {
        let sep = delimiter.as_char();
        let mut lines = reader.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((i, line)) => {
                    let line = line.map_err(|source_err| CpError::Io {
                        path: format!("{source}:{}", i + 1),
                        source: source_err,
                    })?;
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let line = line.trim_start_matches('#');
                    break line.split(sep).map(clean_cell).collect::<Vec<_>>();
                }
                None => {
                    return Err(CpError::InputData(format!("{source}: file contains no header")))
                }
            }
        };

        let mut rows = Vec::new();
        for (i, line) in lines {
            let line = line.map_err(|source_err| CpError::Io {
                path: format!("{source}:{}", i + 1),
                source: source_err,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let row: Vec<_> = line.split(sep).map(clean_cell).collect();
            if row.len() != header.len() {
                return Err(CpError::InputData(format!(
                    "{source}:{}: expected {} fields, found {}",
                    i + 1,
                    header.len(),
                    row.len()
                )));
            }
            rows.push(row);
        }
        Ok(Self { header, rows })
    }

    /// Read a table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P, delimiter: Delimiter) -> CpResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CpError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), delimiter, &path.display().to_string())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Cells of the column with the given name.
    pub fn column(&self, name: &str) -> CpResult<Vec<&str>> {
        let j = self
            .column_index(name)
            .ok_or_else(|| CpError::InputData(format!("missing column '{name}'")))?;
        Ok(self.rows.iter().map(|r| r[j].as_str()).collect())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = (0..self.header.len())
            .map(|j| {
                self.rows
                    .iter()
                    .map(|r| r[j].chars().count())
                    .chain(std::iter::once(self.header[j].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!("{c:>w$}"))
                .join("  ")
        };
        writeln!(f, "{}", line(&self.header))?;
        for row in &self.rows {
            writeln!(f, "{}", line(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE_DATA: &str = "#\"Step\"\t\"Potential Energy (kJ/mole)\"\t\"Temperature (K)\"
100\t-24000.5\t299.1

200\t-24010.0\t301.2
";

    #[test]
    fn test_read_quoted_header() -> CpResult<()> {
        let table = Table::from_reader(STATE_DATA.as_bytes(), Delimiter::Tab, "test")?;
        assert_eq!(
            table.header(),
            ["Step", "Potential Energy (kJ/mole)", "Temperature (K)"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("Temperature (K)")?, vec!["299.1", "301.2"]);
        Ok(())
    }

    #[test]
    fn test_read_ampersand() -> CpResult<()> {
        let data = "method & heat capacity & density\nmm & 1.01 & 0.99\nani2x & 1.10 & 1.02\n";
        let table = Table::from_reader(data.as_bytes(), Delimiter::Ampersand, "props")?;
        assert_eq!(table.header(), ["method", "heat capacity", "density"]);
        assert_eq!(table.rows()[1], vec!["ani2x", "1.10", "1.02"]);
        Ok(())
    }

    #[test]
    fn test_wrong_field_count() {
        let data = "a\tb\n1\t2\n3\n";
        let err = Table::from_reader(data.as_bytes(), Delimiter::Tab, "broken.csv").unwrap_err();
        assert!(err.to_string().contains("broken.csv:3"));
    }

    #[test]
    fn test_missing_column() -> CpResult<()> {
        let table = Table::from_reader("a\tb\n1\t2\n".as_bytes(), Delimiter::Tab, "t")?;
        assert!(matches!(table.column("c"), Err(CpError::InputData(_))));
        Ok(())
    }

    #[test]
    fn test_display() -> CpResult<()> {
        let table = Table::new(
            vec!["method".into(), "value".into()],
            vec![vec!["mm".into(), "1.0".into()]],
        )?;
        assert_eq!(table.to_string(), "method  value\n    mm    1.0\n");
        Ok(())
    }
}
