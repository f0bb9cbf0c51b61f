use crate::{Config, Error, Integrator, TextSink};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Runs every configured method and writes one text file per method
///
/// Returns the paths of the written files, in the order of `config.methods`.
pub fn run_config(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let integrator = Integrator::new(config.build_problem()?);
    integrator.check_step_size(config.dx)?;
    fs::create_dir_all(&config.output_dir).map_err(|source| Error::CreateSink {
        path: config.output_dir.clone(),
        source,
    })?;
    let mut paths = Vec::with_capacity(config.methods.len());
    for &method in &config.methods {
        let path = config.output_path(method);
        let mut sink = TextSink::create(&path)?;
        let count = integrator.run(method, config.dx, &mut sink)?;
        sink.finish()?;
        info!(?method, path = %path.display(), samples = count, "trajectory written");
        paths.push(path);
    }
    Ok(paths)
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
