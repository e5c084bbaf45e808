use std::path::{Path, PathBuf};

use super::{WorkspaceError, WorkspaceResult};

/// Directory layout of a Docforge workspace.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: PathBuf) -> Self {
        let config_dir = root.join("config");
        let data_dir = root.join("data");
        let logs_dir = root.join("logs");
        Self {
            root,
            config_dir,
            data_dir,
            logs_dir,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.logs_dir.join("docforge.ndjson")
    }

    pub fn ensure_dirs(&self) -> WorkspaceResult<()> {
        create_if_missing(&self.root)?;
        create_if_missing(&self.config_dir)?;
        create_if_missing(&self.data_dir)?;
        create_if_missing(&self.logs_dir)?;
        Ok(())
    }
}

fn create_if_missing(path: &Path) -> WorkspaceResult<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(WorkspaceError::from)
}
