use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use super::Distribution;
use crate::error::{Result, StatysError};

impl Distribution {
    /// Read a distribution from a headered CSV file, one sample per column.
    ///
    /// Columns become `arg0`, `arg1`, … in file order; header names are not kept.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading distribution from {} ...", path.as_ref().display());
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        Self::from_csv(rdr)
    }

    /// Same as [`Distribution::read`], from any reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        Self::from_csv(rdr)
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let width = rdr.headers()?.len();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); width];

        for result in rdr.records() {
            let record = result?;
            for (i, cell) in record.iter().enumerate() {
                let value = cell.parse::<f64>().map_err(|_| {
                    StatysError::type_error(format!(
                        "`arg{i}` should only hold numeric values, found {cell:?}"
                    ))
                })?;
                columns[i].push(value);
            }
        }

        if columns.iter().all(Vec::is_empty) {
            return Err(StatysError::size("CSV file contains no data records"));
        }

        Self::new(columns)
    }
}
