use thiserror::Error;

/// The sampled result of an integration run.
///
/// A trajectory holds an ordered sequence of sample times and, for each
/// equation, the state values at those times. `output()[i][k]` is the value
/// of component `i` at `times()[k]`.
///
/// Samples are only ever appended, one full state at a time, so every
/// component sequence stays index-aligned with the time sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Parts"))]
pub struct Trajectory {
    times: Vec<f64>,
    output: Vec<Vec<f64>>,
}

/// A component sequence whose length differs from the time sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("component {component} has {values} values for {times} times")]
pub struct MisalignedTrajectory {
    /// Index of the first misaligned component.
    pub component: usize,

    /// Number of values in that component.
    pub values: usize,

    /// Number of sample times.
    pub times: usize,
}

/// Unchecked serialized form, validated on the way into a [`Trajectory`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Parts {
    times: Vec<f64>,
    output: Vec<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<Parts> for Trajectory {
    type Error = MisalignedTrajectory;

    fn try_from(parts: Parts) -> Result<Self, Self::Error> {
        Self::from_parts(parts.times, parts.output)
    }
}

impl Trajectory {
    /// Creates an empty trajectory for a system of `dimension` equations.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self::with_capacity(dimension, 0)
    }

    /// Creates an empty trajectory with room for `samples` samples.
    #[must_use]
    pub fn with_capacity(dimension: usize, samples: usize) -> Self {
        Self {
            times: Vec::with_capacity(samples),
            output: (0..dimension)
                .map(|_| Vec::with_capacity(samples))
                .collect(),
        }
    }

    /// Rebuilds a trajectory from the `(times, output)` pair of [`into_parts`].
    ///
    /// # Errors
    ///
    /// Returns an error if any component does not hold one value per time.
    ///
    /// [`into_parts`]: Trajectory::into_parts
    pub fn from_parts(
        times: Vec<f64>,
        output: Vec<Vec<f64>>,
    ) -> Result<Self, MisalignedTrajectory> {
        if let Some((component, values)) = output
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, values)| values != times.len())
        {
            return Err(MisalignedTrajectory {
                component,
                values,
                times: times.len(),
            });
        }

        Ok(Self { times, output })
    }

    /// Appends a sample at time `t`.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not have one value per component.
    pub fn push(&mut self, t: f64, state: &[f64]) {
        assert_eq!(
            state.len(),
            self.output.len(),
            "sample dimension must match the trajectory"
        );

        self.times.push(t);
        for (component, &value) in self.output.iter_mut().zip(state) {
            component.push(value);
        }
    }

    /// Returns the sample times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the per-component value sequences.
    #[must_use]
    pub fn output(&self) -> &[Vec<f64>] {
        &self.output
    }

    /// Returns the value sequence of component `index`, if it exists.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<&[f64]> {
        self.output.get(index).map(Vec::as_slice)
    }

    /// Returns the full state at sample `k`, if it exists.
    #[must_use]
    pub fn state_at(&self, k: usize) -> Option<Vec<f64>> {
        if k >= self.times.len() {
            return None;
        }
        Some(self.output.iter().map(|component| component[k]).collect())
    }

    /// Returns the time and state of the last sample.
    #[must_use]
    pub fn last(&self) -> Option<(f64, Vec<f64>)> {
        let k = self.times.len().checked_sub(1)?;
        Some((self.times[k], self.state_at(k)?))
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if no samples have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.output.len()
    }

    /// Consumes the trajectory, returning `(times, output)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<Vec<f64>>) {
        (self.times, self.output)
    }
}
