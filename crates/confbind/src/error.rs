//! Error types for loading and saving config files.

use crate::format::FormatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned while loading a config file into its record type.
///
/// Returned by [`ConfigHandle::create`](crate::ConfigHandle::create) and
/// [`ConfigHandle::reload`](crate::ConfigHandle::reload). The variants are
/// checked in order and exactly one is reported per load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing exists at the bound path.
    #[error("config file does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },
    /// The file exists but its contents could not be read.
    #[error("could not read config file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The contents were read but do not map onto the record type.
    #[error("failed to map config file {} to {type_name}: {source}", path.display())]
    MappingFailed {
        path: PathBuf,
        type_name: &'static str,
        #[source]
        source: FormatError,
    },
}

impl LoadError {
    /// Path of the config file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::PathNotFound { path }
            | Self::ReadFailed { path, .. }
            | Self::MappingFailed { path, .. } => path,
        }
    }
}

/// Error returned when a save does not complete.
///
/// Covers serialization, the write itself, and the reload that follows a
/// successful write. When the reload is what failed, the file has already
/// been overwritten and the handle should be recreated.
#[derive(Debug, Error)]
#[error("failed to write config file {}", path.display())]
pub struct WriteError {
    path: PathBuf,
    #[source]
    cause: WriteCause,
}

impl WriteError {
    pub(crate) fn new(path: &Path, cause: WriteCause) -> Self {
        Self {
            path: path.to_path_buf(),
            cause,
        }
    }

    /// Path of the config file that failed to save.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Underlying failure behind a [`WriteError`], exposed only as its source.
#[derive(Debug, Error)]
pub(crate) enum WriteCause {
    #[error(transparent)]
    Serialize(FormatError),
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    Reload(LoadError),
}

/// Any error produced by a config handle.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
