use crate::{Error, Method, Problem, SampleSink, Trajectory};
use tracing::debug;

/// Drives a [Method] over the interval of a [Problem] with a fixed step size
///
/// The integrator keeps no state between calls; each run starts again from (x0, y0).
///
/// # Sampling order
///
/// Each iteration updates y, advances x by dx, and only then emits (x, y). Thus x0 itself is
/// never emitted, and the loop keeps going while x ≤ x1, so the last sample lies in (x1, x1 + dx].
/// For x0 = 0, x1 = 10 and dx = 1 the samples are at x = 1, 2, ..., 11.
pub struct Integrator<'a> {
    problem: Problem<'a>,
}

/// Lazy sequence of samples produced by one run (see [Integrator::steps])
pub struct Steps<'p> {
    problem: &'p Problem<'p>,
    method: Method,
    dx: f64,
    x: f64,
    y: f64,
}

impl<'a> Integrator<'a> {
    /// Allocates a new instance
    pub fn new(problem: Problem<'a>) -> Self {
        Integrator { problem }
    }

    /// Returns the problem definition
    pub fn problem(&self) -> &Problem<'a> {
        &self.problem
    }

    /// Returns an iterator over the samples of one run
    ///
    /// # Errors
    ///
    /// * [Error::InvalidStepSize] if dx is not positive or not finite
    /// * [Error::StepTooSmall] if x + dx == x somewhere in the interval (the run would never end)
    pub fn steps(&self, method: Method, dx: f64) -> Result<Steps<'_>, Error> {
        self.check_step_size(dx)?;
        Ok(Steps {
            problem: &self.problem,
            method,
            dx,
            x: self.problem.x0(),
            y: self.problem.y0(),
        })
    }

    /// Runs the integration and emits every sample to `sink`
    ///
    /// Returns the number of emitted samples. A failing sink aborts the run.
    pub fn run<S>(&self, method: Method, dx: f64, sink: &mut S) -> Result<usize, Error>
    where
        S: SampleSink + ?Sized,
    {
        let steps = self.steps(method, dx)?;
        debug!(
            ?method,
            dx,
            x0 = self.problem.x0(),
            x1 = self.problem.x1(),
            "integration started"
        );
        let mut count = 0;
        for (x, y) in steps {
            sink.accept(x, y)?;
            count += 1;
        }
        debug!(?method, count, "integration finished");
        Ok(count)
    }

    /// Runs the integration and collects the samples
    pub fn trajectory(&self, method: Method, dx: f64) -> Result<Trajectory, Error> {
        let mut trajectory = Trajectory::new();
        self.run(method, dx, &mut trajectory)?;
        Ok(trajectory)
    }

    /// Checks that `dx` lets a run over the problem's interval terminate
    pub fn check_step_size(&self, dx: f64) -> Result<(), Error> {
        if dx.is_nan() || dx <= 0.0 || dx.is_infinite() {
            return Err(Error::InvalidStepSize(dx));
        }
        let x0 = self.problem.x0();
        let x1 = self.problem.x1();
        // a reversed interval emits nothing, so only a forward run can stall;
        // the spacing of floats grows with |x|, so checking both ends covers the interval
        let stalls = x1 >= x0 && (x0 + dx == x0 || x1 + dx == x1);
        if stalls {
            return Err(Error::StepTooSmall { dx, x0, x1 });
        }
        Ok(())
    }
}

impl Iterator for Steps<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.problem.x1() {
            return None;
        }
        self.y += self.method.compute_step(self.problem.model(), self.x, self.y, self.dx);
        self.x += self.dx;
        Some((self.x, self.y))
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
