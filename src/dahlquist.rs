use crate::{Error, ModelTrait};
use std::collections::HashMap;

/// Dahlquist test equation
///
/// ```text
/// dy/dx = -λ y
/// y(x) = y0 e^(-λ (x - x0))
/// ```
///
/// A negative λ gives exponential growth (λ = -1 yields dy/dx = y).
pub struct Dahlquist {
    lambda: f64,
}

impl Dahlquist {
    /// Allocates a new instance
    ///
    /// # Parameters
    ///
    /// * `lambda` - decay constant (λ)
    pub fn new(params: HashMap<&str, f64>) -> Result<Self, Error> {
        let lambda = *params.get("lambda").ok_or(Error::MissingParameter("lambda"))?;
        Ok(Dahlquist { lambda })
    }

    /// Returns the decay constant λ
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl ModelTrait for Dahlquist {
    /// Calculates dy/dx = f(x,y)
    fn calc_f(&self, _x: f64, y: f64) -> f64 {
        -self.lambda * y
    }

    /// Calculates y(x)
    fn analytical_y(&self, x0: f64, y0: f64, x: f64) -> Option<f64> {
        Some(y0 * f64::exp(-self.lambda * (x - x0)))
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
