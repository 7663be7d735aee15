use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::CLASSIFIER_DATA_ENV;

#[derive(Error, Debug)]
pub enum ClassifierResolveError {
    #[error("classifier data directory does not exist: {0}")]
    Missing(PathBuf),
    #[error("could not determine a default classifier data directory")]
    NoDefaultDir,
}

/// Resolve the engine's classifier data directory.
///
/// Resolution order:
/// 1. Explicit override (command-line flag)
/// 2. `EMOSCAN_CLASSIFIER_DATA` environment variable
/// 3. Platform data directory (`<data_dir>/emoscan/classifiers`)
///
/// An explicitly requested directory must exist; the platform default is
/// returned as-is, since validating its contents is the engine's concern.
pub fn resolve(override_dir: Option<&Path>) -> Result<PathBuf, ClassifierResolveError> {
    resolve_from_parts(
        override_dir,
        env::var_os(CLASSIFIER_DATA_ENV).map(PathBuf::from),
        default_dir(),
    )
}

fn default_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("emoscan").join("classifiers"))
}

fn resolve_from_parts(
    override_dir: Option<&Path>,
    env_dir: Option<PathBuf>,
    default_dir: Option<PathBuf>,
) -> Result<PathBuf, ClassifierResolveError> {
    let explicit = override_dir.map(Path::to_path_buf).or(env_dir);
    match explicit {
        Some(dir) if dir.is_dir() => Ok(dir),
        Some(dir) => Err(ClassifierResolveError::Missing(dir)),
        None => default_dir.ok_or(ClassifierResolveError::NoDefaultDir),
    }
}
