//! Typed JSON config files.
//!
//! A [`ConfigHandle`] binds one file path to one serde record type. It loads
//! the file when created, hands out the live record for reading and in-place
//! edits, and writes it back on [`ConfigHandle::save`], reloading afterwards
//! so the in-memory record always matches what is on disk.
//!
//! Field behavior comes from the record's serde attributes:
//!
//! - `#[serde(default)]` keeps the `Default` value of any field missing from
//!   the file. Those defaults are written into the file on the next save.
//! - `#[serde(skip)]` keeps a field out of the file entirely. It is reset to
//!   its default whenever the record is reloaded, including after a save.
//!
//! ```no_run
//! use confbind::ConfigHandle;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct AppConfig {
//!     name: String,
//!     workers: usize,
//! }
//!
//! # fn main() -> Result<(), confbind::ConfigError> {
//! let config = ConfigHandle::<AppConfig>::create("app.json")?;
//! config.get_mut().workers = 8;
//! config.save()?;
//! # Ok(())
//! # }
//! ```

mod error;
mod format;
mod handle;

/// Error types returned by load and save.
pub use error::{ConfigError, LoadError, WriteError};
/// Text formats and the trait they implement.
pub use format::{ConfigFormat, FormatError, Json5Format, JsonFormat};
pub use handle::ConfigHandle;

#[inline]
/// Route this crate's `log` output through env_logger (filtered by `RUST_LOG`).
///
/// Only active with the "logging" feature; otherwise a no-op, leaving the
/// choice of logger to the application. Calling it after a logger is already
/// installed does nothing.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_logging_can_run_twice() {
        super::init_logging();
        super::init_logging();
        log::debug!("logging initialized");
    }
}
