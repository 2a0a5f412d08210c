//! A typed record bound to one config file.

use crate::error::{LoadError, WriteCause, WriteError};
use crate::format::{ConfigFormat, FormatError, JsonFormat};
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle over the config file at `path`, holding its record of type `T`.
///
/// The record is loaded once when the handle is created and replaced
/// wholesale by every successful [`save`](Self::save) or
/// [`reload`](Self::reload). Callers mutate it in place through
/// [`get_mut`](Self::get_mut); nothing reaches disk until `save`.
///
/// No file handle is kept open between calls.
#[derive(Debug)]
pub struct ConfigHandle<T, F = JsonFormat> {
    path: PathBuf,
    format: F,
    value: RwLock<T>,
    /// Serializes save and reload cycles on this handle.
    io_lock: Mutex<()>,
}

impl<T> ConfigHandle<T, JsonFormat>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the file at `path` using pretty printed JSON.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::create_with_format(path, JsonFormat::default())
    }
}

impl<T, F> ConfigHandle<T, F>
where
    T: Serialize + DeserializeOwned,
    F: ConfigFormat,
{
    /// Load the file at `path` using a caller supplied format.
    ///
    /// The file must already exist; no handle is returned if the load fails.
    pub fn create_with_format(path: impl AsRef<Path>, format: F) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let value = load_record(&path, &format)?;
        info!(
            "config loaded (path={}, type={})",
            path.display(),
            std::any::type_name::<T>()
        );
        Ok(Self {
            path,
            format,
            value: RwLock::new(value),
            io_lock: Mutex::new(()),
        })
    }

    /// Shared access to the live record.
    ///
    /// Drop the guard before calling [`save`](Self::save) on the same thread.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.value.read()
    }

    /// Exclusive access to the live record for in-place edits.
    ///
    /// Drop the guard before calling [`save`](Self::save) on the same thread.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.value.write()
    }

    /// Apply `edit` to the live record and return its result.
    pub fn update<R>(&self, edit: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.value.write();
        edit(&mut value)
    }

    /// The live record serialized with this handle's format.
    ///
    /// Reflects unsaved edits; computed on every call.
    pub fn json(&self) -> Result<String, FormatError> {
        self.format.to_text(&*self.value.read())
    }

    /// Write the live record to the file, then load it back.
    ///
    /// The file is created if it was removed after the handle was built.
    /// After success the record is exactly what the file now holds, so
    /// `#[serde(skip)]` fields are back at their defaults. If the write fails
    /// the record is untouched. If the reload fails the file has already
    /// been overwritten and the handle should be recreated.
    pub fn save(&self) -> Result<(), WriteError> {
        let _io = self.io_lock.lock();
        let text = self
            .format
            .to_text(&*self.value.read())
            .map_err(|err| WriteError::new(&self.path, WriteCause::Serialize(err)))?;

        debug!(
            "writing config (path={}, bytes={})",
            self.path.display(),
            text.len()
        );
        fs::write(&self.path, text.as_bytes())
            .map_err(|err| WriteError::new(&self.path, WriteCause::Io(err)))?;

        match load_record(&self.path, &self.format) {
            Ok(fresh) => {
                *self.value.write() = fresh;
                info!("config saved (path={})", self.path.display());
                Ok(())
            }
            Err(err) => {
                warn!(
                    "config written but reload failed; handle may be stale (path={}): {err}",
                    self.path.display()
                );
                Err(WriteError::new(&self.path, WriteCause::Reload(err)))
            }
        }
    }

    /// Replace the live record with the file's current contents.
    ///
    /// Unsaved edits are discarded. On failure the record is untouched.
    pub fn reload(&self) -> Result<(), LoadError> {
        let _io = self.io_lock.lock();
        let fresh = load_record(&self.path, &self.format)?;
        *self.value.write() = fresh;
        debug!("config reloaded (path={})", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    /// Consume the handle and return the live record.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

/// One load cycle: existence check, read, decode. Exactly one error kind is
/// reported, in that order.
fn load_record<T, F>(path: &Path, format: &F) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    F: ConfigFormat,
{
    if !path.exists() {
        return Err(LoadError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| LoadError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "read config (path={}, bytes={})",
        path.display(),
        bytes.len()
    );

    let mapping_failed = |source: FormatError| LoadError::MappingFailed {
        path: path.to_path_buf(),
        type_name: std::any::type_name::<T>(),
        source,
    };
    let text = String::from_utf8(bytes).map_err(|err| mapping_failed(err.into()))?;
    format.from_text(&text).map_err(mapping_failed)
}
