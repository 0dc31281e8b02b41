//! Configuration loading and saving

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{render, Config};

/// A loaded configuration together with the path it came from
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Load the configuration at `path`; a missing file yields an empty config
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = load_config_from_path(&path)?;
        Ok(Self { path, config })
    }

    /// Write the configuration back to the path it was loaded from
    pub fn save(&self) -> Result<()> {
        save_config_to_path(&self.config, &self.path)
    }

    /// Write the configuration to another path without re-pointing this handle
    pub fn save_to(&self, path: &Path) -> Result<()> {
        save_config_to_path(&self.config, path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

}

impl Deref for ConfigFile {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.config
    }
}

impl DerefMut for ConfigFile {
    fn deref_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

/// Load configuration from a specific path
///
/// Only a missing file is treated as an empty configuration. Any other read
/// failure is returned as [`Error::Io`].
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file absent, starting empty");
            return Ok(Config::default());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let config = parse_config(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        services = config.service.len(),
        apps = config.app.len(),
        "loaded config"
    );
    Ok(config)
}

/// Parse a configuration document. Unknown sections and keys are ignored.
///
/// A profile or key defined twice is rejected by the TOML grammar, so such a
/// document fails to parse instead of keeping the last definition.
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Replace the file at `path` with the canonical rendering of `config`
pub fn save_config_to_path(config: &Config, path: &Path) -> Result<()> {
    let content = render(config);
    write_atomic(path, content.as_bytes())?;

    debug!(path = %path.display(), bytes = content.len(), "saved config");
    Ok(())
}

/// Write through a sibling temp file and rename it over `path`
///
/// The original file is left untouched unless the rename succeeds. A symlink
/// at `path` is followed so the link survives and its target gets the new
/// contents. An existing file keeps its permissions.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let target = resolve_symlink(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

    let written = copy_permissions(&target, tmp.as_file())
        .and_then(|()| write_contents(tmp.as_file_mut(), contents));
    if let Err(e) = written {
        let tmp_path = tmp.path().to_path_buf();
        if let Err(cleanup) = tmp.close() {
            warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp file");
        }
        return Err(Error::io(&target, e));
    }

    tmp.persist(&target).map_err(|e| Error::io(&target, e.error))?;
    Ok(())
}

/// The file a save should replace: `path` itself, or where its symlink points
fn resolve_symlink(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {}
        _ => return Ok(path.to_path_buf()),
    }

    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        // Dangling link: create the file it names
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let link = fs::read_link(path).map_err(|e| Error::io(path, e))?;
            Ok(match path.parent() {
                Some(parent) if link.is_relative() => parent.join(link),
                _ => link,
            })
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

fn copy_permissions(target: &Path, tmp: &File) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) => tmp.set_permissions(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn write_contents(file: &mut File, contents: &[u8]) -> io::Result<()> {
    file.write_all(contents)?;
    file.flush()?;
    file.sync_all()
}
