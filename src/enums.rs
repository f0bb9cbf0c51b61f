use crate::ModelTrait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Single-step integration formula
///
/// Each variant computes the increment Δy for one step of size `dx` from the point `(x, y)`.
/// The variants are stateless, so one value may be shared by any number of runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Method {
    /// Explicit (forward) Euler
    ///
    /// ```text
    /// Δy = f(x, y) dx
    /// ```
    #[serde(rename = "euler")]
    #[value(name = "euler")]
    Euler,

    /// Modified Euler (Heun's predictor-corrector)
    ///
    /// ```text
    /// Δy = dx/2 (f(x, y) + f(x + dx, y + dx f(x, y)))
    /// ```
    #[serde(rename = "euler-mod")]
    #[value(name = "euler-mod")]
    ModifiedEuler,

    /// Classical fourth-order Runge-Kutta
    ///
    /// ```text
    /// k0 = f(x, y)
    /// k1 = f(x + dx/2, y + dx/2 k0)
    /// k2 = f(x + dx/2, y + dx/2 k1)
    /// k3 = f(x + dx, y + dx k2)
    /// Δy = dx/6 (k0 + 2 k1 + 2 k2 + k3)
    /// ```
    #[serde(rename = "runge-kutta")]
    #[value(name = "runge-kutta")]
    RungeKutta4,
}

impl Method {
    /// All methods, from the least to the most accurate
    pub const ALL: [Method; 3] = [Method::Euler, Method::ModifiedEuler, Method::RungeKutta4];

    /// Computes the increment Δy of one step
    ///
    /// Non-finite values returned by the model propagate into Δy.
    pub fn compute_step<M>(&self, model: &M, x: f64, y: f64, dx: f64) -> f64
    where
        M: ModelTrait + ?Sized,
    {
        match self {
            Method::Euler => model.calc_f(x, y) * dx,
            Method::ModifiedEuler => {
                let f0 = model.calc_f(x, y);
                let f1 = model.calc_f(x + dx, y + dx * f0);
                0.5 * dx * (f0 + f1)
            }
            Method::RungeKutta4 => {
                let h = 0.5 * dx;
                let k0 = model.calc_f(x, y);
                let k1 = model.calc_f(x + h, y + h * k0);
                let k2 = model.calc_f(x + h, y + h * k1);
                let k3 = model.calc_f(x + dx, y + dx * k2);
                dx / 6.0 * (k0 + 2.0 * k1 + 2.0 * k2 + k3)
            }
        }
    }

    /// Returns the order of the global error
    pub fn order(&self) -> usize {
        match self {
            Method::Euler => 1,
            Method::ModifiedEuler => 2,
            Method::RungeKutta4 => 4,
        }
    }

    /// Returns the number of f(x,y) evaluations per step
    pub fn n_function_evals(&self) -> usize {
        match self {
            Method::Euler => 1,
            Method::ModifiedEuler => 2,
            Method::RungeKutta4 => 4,
        }
    }

    /// Returns the conventional name of the output file (without extension)
    pub fn file_stem(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::ModifiedEuler => "euler-mod",
            Method::RungeKutta4 => "runge-kutta",
        }
    }
}

/// Built-in models
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// dy/dx = -λ y
    Dahlquist,

    /// dy/dx = y - x
    LinearDrift,
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
