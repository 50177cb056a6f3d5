//! Reading source estimate files
//!

use byteorder::{BigEndian, ReadBytesExt};
use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::SourceEstimate;

impl SourceEstimate {
    /// Read a source estimate
    ///
    /// ```no_run
    /// fn print_vertices(reader: impl std::io::Read + std::io::Seek) -> fiff_stc::error::Result<()> {
    ///     let stc = fiff_stc::SourceEstimate::read(reader)?;
    ///
    ///     for (vertex, row) in stc.vertices.iter().zip(&stc.data) {
    ///         println!("{}: {:?}", vertex, row);
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<SourceEstimate> {
        let len = reader.seek(SeekFrom::End(0))?;
        if len % 4 != 0 {
            return Err(Error::InvalidFile);
        }
        let words = len / 4;
        reader.seek(SeekFrom::Start(0))?;

        let tmin = reader.read_f32::<BigEndian>()? / 1000.0;
        let tstep = reader.read_f32::<BigEndian>()? / 1000.0;

        let n_vertices = reader.read_u32::<BigEndian>()? as u64;
        if words < 4 + n_vertices {
            return Err(Error::InvalidFile);
        }

        let vertices = (0..n_vertices)
            .map(|_| reader.read_u32::<BigEndian>())
            .collect::<std::io::Result<Vec<_>>>()?;

        let n_times = reader.read_u32::<BigEndian>()? as u64;

        let expected = n_vertices * n_times;
        let found = words - 4 - n_vertices;
        if expected != found {
            return Err(Error::SampleCountMismatch { expected, found });
        }

        // Without vertices there are no samples to bound `n_times`
        let mut data = (0..n_vertices)
            .map(|_| Vec::with_capacity(n_times as usize))
            .collect::<Vec<_>>();
        if n_vertices > 0 {
            for _ in 0..n_times {
                for row in data.iter_mut() {
                    row.push(reader.read_f32::<BigEndian>()?);
                }
            }
        }

        debug!(n_vertices, n_times, "read source estimate");
        Ok(SourceEstimate {
            tmin,
            tstep,
            vertices,
            data,
        })
    }
}

/// Read a source estimate from a file
pub fn read_stc(path: impl AsRef<Path>) -> Result<SourceEstimate> {
    SourceEstimate::read(BufReader::new(File::open(path)?))
}
