pub trait ModelTrait {
    /// Calculates dy/dx = f(x,y)
    fn calc_f(&self, x: f64, y: f64) -> f64;

    /// Calculates the closed-form solution y(x) passing through (x0, y0), if known
    fn analytical_y(&self, _x0: f64, _y0: f64, _x: f64) -> Option<f64> {
        None
    }
}

impl<F> ModelTrait for F
where
    F: Fn(f64, f64) -> f64,
{
    fn calc_f(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
