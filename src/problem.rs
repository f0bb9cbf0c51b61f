use crate::{Dahlquist, Error, LinearDrift, ModelTrait, ModelType};
use std::collections::HashMap;

/// Model shared by concurrent runs
pub type BoxedModel<'a> = Box<dyn ModelTrait + Send + Sync + 'a>;

/// Allocates one of the built-in models
pub fn new_model(model_type: ModelType, params: HashMap<&str, f64>) -> Result<BoxedModel<'static>, Error> {
    let model: BoxedModel<'static> = match model_type {
        ModelType::Dahlquist => Box::new(Dahlquist::new(params)?),
        ModelType::LinearDrift => Box::new(LinearDrift::new(params)?),
    };
    Ok(model)
}

/// Initial value problem over a closed interval
///
/// ```text
/// dy/dx = f(x, y)   with   y(x0) = y0   and   x0 ≤ x ≤ x1
/// ```
///
/// The problem is read-only once allocated.
pub struct Problem<'a> {
    x0: f64,
    x1: f64,
    y0: f64,
    model: BoxedModel<'a>,
}

impl<'a> Problem<'a> {
    /// Allocates a new instance
    ///
    /// The bounds must be finite. An interval with `x1 < x0` is accepted and yields no samples.
    pub fn new(x0: f64, x1: f64, y0: f64, model: BoxedModel<'a>) -> Result<Self, Error> {
        if !x0.is_finite() || !x1.is_finite() {
            return Err(Error::NonFiniteInterval { x0, x1 });
        }
        Ok(Problem { x0, x1, y0, model })
    }

    /// Allocates a new instance from a plain function f(x,y)
    pub fn from_fn<F>(x0: f64, x1: f64, y0: f64, f: F) -> Result<Self, Error>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'a,
    {
        Problem::new(x0, x1, y0, Box::new(f))
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Returns the model holding f(x,y)
    pub fn model(&self) -> &(dyn ModelTrait + Send + Sync + 'a) {
        self.model.as_ref()
    }

    /// Calculates dy/dx = f(x,y)
    pub fn calc_f(&self, x: f64, y: f64) -> f64 {
        self.model.calc_f(x, y)
    }

    /// Calculates the reference solution y(x) through (x0, y0), if the model knows it
    pub fn analytical_y(&self, x: f64) -> Option<f64> {
        self.model.analytical_y(self.x0, self.y0, x)
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
