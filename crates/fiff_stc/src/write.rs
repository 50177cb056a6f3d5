//! Writing source estimate files
//!

use byteorder::{BigEndian, WriteBytesExt};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::SourceEstimate;

impl SourceEstimate {
    /// Write the source estimate
    ///
    /// Every vertex needs exactly one row of data and all rows must have the same length.
    #[instrument(skip_all, err)]
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.data.len() != self.vertices.len() {
            return Err(Error::InconsistentData(format!(
                "{} vertices but {} data rows",
                self.vertices.len(),
                self.data.len()
            )));
        }

        let n_times = self.n_times();
        if let Some(row) = self.data.iter().position(|row| row.len() != n_times) {
            return Err(Error::InconsistentData(format!(
                "row {} has {} samples, expected {}",
                row,
                self.data[row].len(),
                n_times
            )));
        }

        writer.write_f32::<BigEndian>(self.tmin * 1000.0)?;
        writer.write_f32::<BigEndian>(self.tstep * 1000.0)?;

        writer.write_u32::<BigEndian>(count(self.vertices.len())?)?;
        for vertex in &self.vertices {
            writer.write_u32::<BigEndian>(*vertex)?;
        }

        writer.write_u32::<BigEndian>(count(n_times)?)?;
        for t in 0..n_times {
            for row in &self.data {
                writer.write_f32::<BigEndian>(row[t])?;
            }
        }

        writer.flush()?;
        debug!(n_vertices = self.vertices.len(), n_times, "wrote source estimate");
        Ok(())
    }
}

fn count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::InconsistentData(format!("{} entries do not fit", len)))
}

/// Write a source estimate to a file, replacing it if it exists
pub fn write_stc(path: impl AsRef<Path>, stc: &SourceEstimate) -> Result<()> {
    stc.write(BufWriter::new(File::create(path)?))
}
