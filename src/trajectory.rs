use crate::{Error, Problem, SampleSink};

/// Holds the samples of one integration run
///
/// The abscissae and ordinates are kept in separate vectors so they can be handed to
/// plotting routines directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    /// x values
    pub xx: Vec<f64>,

    /// y values
    pub yy: Vec<f64>,
}

impl Trajectory {
    /// Allocates an empty trajectory
    pub fn new() -> Self {
        Trajectory::default()
    }

    /// Appends a sample
    pub fn push(&mut self, x: f64, y: f64) {
        self.xx.push(x);
        self.yy.push(y);
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        self.xx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xx.is_empty()
    }

    /// Returns the last sample
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.xx.last()?, *self.yy.last()?))
    }

    /// Iterates over the (x, y) samples
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xx.iter().copied().zip(self.yy.iter().copied())
    }

    /// Finds the ordinate of the sample at exactly `x`
    pub fn y_at(&self, x: f64) -> Option<f64> {
        self.iter().find(|&(xi, _)| xi == x).map(|(_, y)| y)
    }

    /// Calculates |y_ref(x) - y| at every sample
    ///
    /// Returns None if the problem has no reference solution.
    pub fn errors(&self, problem: &Problem) -> Option<Vec<f64>> {
        self.iter()
            .map(|(x, y)| problem.analytical_y(x).map(|y_ref| f64::abs(y_ref - y)))
            .collect()
    }

    /// Calculates the largest |y_ref(x) - y| over all samples
    ///
    /// A NaN error dominates any finite one. Returns None if the problem has no reference solution.
    pub fn max_abs_error(&self, problem: &Problem) -> Option<f64> {
        let errors = self.errors(problem)?;
        Some(errors.into_iter().fold(0.0, |acc: f64, e| if e.is_nan() || e > acc { e } else { acc }))
    }
}

impl SampleSink for Trajectory {
    fn accept(&mut self, x: f64, y: f64) -> Result<(), Error> {
        self.push(x, y);
        Ok(())
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
