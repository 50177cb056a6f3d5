use derive_more::derive::Constructor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Activity of a set of source space vertices over time
///
/// The number of time samples is the length of the data rows, so an estimate without vertices
/// has no time samples, whatever count its file header states.
#[derive(Constructor, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceEstimate {
    /// Time of the first sample in seconds
    pub tmin: f32,

    /// Time between samples in seconds
    pub tstep: f32,

    /// Source space vertex numbers
    pub vertices: Vec<u32>,

    /// One row of samples per vertex
    pub data: Vec<Vec<f32>>,
}

impl SourceEstimate {
    /// Number of time samples
    pub fn n_times(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Time of every sample in seconds
    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.n_times()).map(|i| self.tmin + i as f32 * self.tstep)
    }
}
