use crate::{Error, ModelTrait};
use std::collections::HashMap;

/// Implements a linear drift model
///
/// ```text
/// dy
/// ── = y - x
/// dx
/// ```
///
/// with the closed-form solution
///
/// ```text
/// y(x) = 1 + x + (y0 - 1 - x0) e^(x - x0)
/// ```
///
/// With y(0) = 1 the solution is the straight line y = 1 + x. Any perturbation of the
/// initial value grows like e^x, which makes this a sharp test of accumulated error.
pub struct LinearDrift;

impl LinearDrift {
    /// Allocates a new instance
    ///
    /// The model has no parameters; unknown keys are ignored.
    pub fn new(_params: HashMap<&str, f64>) -> Result<Self, Error> {
        Ok(LinearDrift)
    }
}

impl ModelTrait for LinearDrift {
    fn calc_f(&self, x: f64, y: f64) -> f64 {
        y - x
    }

    fn analytical_y(&self, x0: f64, y0: f64, x: f64) -> Option<f64> {
        Some(1.0 + x + (y0 - 1.0 - x0) * f64::exp(x - x0))
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use russell_lab::{approx_eq, deriv1_forward7};

    #[test]
    fn analytical_y_is_linear_without_perturbation() {
        let model = LinearDrift::new(HashMap::new()).unwrap();
        for x in [0.0, 1.0, 2.5, 10.0] {
            approx_eq(model.analytical_y(0.0, 1.0, x).unwrap(), 1.0 + x, 1e-15);
        }
    }

    #[test]
    fn analytical_y_satisfies_the_equation() {
        let model = LinearDrift::new(HashMap::new()).unwrap();
        let (x0, y0) = (0.0, 1.0 + 1e-2);
        approx_eq(model.analytical_y(x0, y0, x0).unwrap(), y0, 1e-15);
        let args = &mut 0;
        for x in [0.0, 0.5, 1.0] {
            let y = model.analytical_y(x0, y0, x).unwrap();
            let num = deriv1_forward7(x, args, |t, _| Ok(model.analytical_y(x0, y0, t).unwrap())).unwrap();
            println!("dy/dx: ana = {}, num = {}", model.calc_f(x, y), num);
            approx_eq(model.calc_f(x, y), num, 1e-8);
        }
    }
}
