use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::content::Catalog;

/// Name of the directory holding progress files.
const APP_DIR: &str = "prepdeck";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// `None` means the bundled catalog.
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Flags and environment take precedence over the platform defaults.
    pub fn resolve(data_dir: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self { data_dir, catalog })
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => Catalog::bundled().context("Bundled catalog is invalid"),
        }
    }
}

/// Platform data directory, falling back to `~/.prepdeck`.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::data_dir() {
        return Ok(dir.join(APP_DIR));
    }
    Ok(dirs::home_dir()
        .context("Could not determine home directory")?
        .join(format!(".{}", APP_DIR)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/prepdeck-test")), None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/prepdeck-test"));
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_default_catalog_is_bundled() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/unused")), None).unwrap();
        let catalog = config.load_catalog().unwrap();
        assert!(catalog.checklist().is_some());
    }

    #[test]
    fn test_missing_catalog_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::resolve(
            Some(tmp.path().to_path_buf()),
            Some(tmp.path().join("nope.json")),
        )
        .unwrap();
        let err = config.load_catalog().unwrap_err();
        assert!(err.to_string().contains("Failed to load catalog"));
    }
}
