use std::io::ErrorKind;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use docforge_store::write_bytes_new;

use super::{WorkspacePaths, WorkspaceResult};

/// Persistence backend used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    Memory,
    File,
    Postgres,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Register the built-in templates when the workspace is first created.
    pub seed_catalog: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            store: StoreBackend::File,
            database_url: None,
            max_connections: 5,
            seed_catalog: true,
        }
    }
}

/// Settings plus whether this call created the workspace's settings file.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: WorkspaceSettings,
    pub created: bool,
}

/// Read `settings.toml`, writing the defaults first if it does not exist.
///
/// Creation never replaces an existing file, so when several processes open
/// a fresh workspace together exactly one of them reports `created`.
pub fn load_or_create_settings(paths: &WorkspacePaths) -> WorkspaceResult<LoadedSettings> {
    let path = paths.settings_path();
    if !path.exists() {
        let settings = WorkspaceSettings::default();
        let encoded = toml::to_string_pretty(&settings)?;
        match write_bytes_new(&path, encoded.as_bytes()) {
            Ok(()) => {
                return Ok(LoadedSettings {
                    settings,
                    created: true,
                });
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
            Err(err) => return Err(err.into()),
        }
    }

    let content = std::fs::read_to_string(&path)?;
    let settings: WorkspaceSettings = toml::from_str(&content)?;
    Ok(LoadedSettings {
        settings,
        created: false,
    })
}
