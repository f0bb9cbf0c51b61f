use crate::{Error, Method, ModelType, Problem, new_model};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Holds the parameters of a batch of runs
///
/// Missing fields take their default values, which reproduce the classic comparison:
/// `dy/dx = y - x` over [0, 100] from `y0 = 1 + 1e-8` with `dx = 1.1`, for every method.
///
/// ```yaml
/// model: dahlquist
/// params:
///   lambda: 1.0
/// x1: 3.0
/// y0: 1.0
/// dx: 0.01
/// methods: [euler, runge-kutta]
/// output_dir: results
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in model providing f(x,y)
    pub model: ModelType,

    /// Model parameters
    pub params: HashMap<String, f64>,

    /// Start of the interval
    pub x0: f64,

    /// End of the interval
    pub x1: f64,

    /// Initial value y(x0)
    pub y0: f64,

    /// Step size
    pub dx: f64,

    /// Methods to run, one output file each
    pub methods: Vec<Method>,

    /// Directory receiving the output files
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: ModelType::LinearDrift,
            params: HashMap::new(),
            x0: 0.0,
            x1: 100.0,
            y0: 1.0 + 1e-8,
            dx: 1.1,
            methods: Method::ALL.to_vec(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Reads the configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::OpenConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    /// Parses the configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        let config = serde_yaml::from_str(text)?;
        Ok(config)
    }

    /// Allocates the problem described by this configuration
    pub fn build_problem(&self) -> Result<Problem<'static>, Error> {
        let params: HashMap<&str, f64> = self.params.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let model = new_model(self.model, params)?;
        Problem::new(self.x0, self.x1, self.y0, model)
    }

    /// Returns the path of the output file of `method`
    pub fn output_path(&self, method: Method) -> PathBuf {
        self.output_dir.join(format!("{}.txt", method.file_stem()))
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
