use serde_json::Value;
use std::fs;
use std::path::Path;

/// Write config contents to a path, creating parent directories if needed.
pub fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Parse the JSON currently stored at `path`.
pub fn read_json(path: &Path) -> Value {
    let contents = fs::read_to_string(path).expect("read");
    serde_json::from_str(&contents).expect("json")
}

/// Whether the current process is actually stopped by file permissions.
///
/// Privileged users (root, CAP_DAC_OVERRIDE) read and write regardless of
/// mode bits; permission tests skip themselves in that case.
#[cfg(unix)]
pub fn permissions_enforced() -> bool {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let probe = dir.path().join("probe");
    fs::write(&probe, "probe").expect("write probe");
    fs::set_permissions(&probe, fs::Permissions::from_mode(0o000)).expect("chmod");
    let enforced = fs::read(&probe).is_err();
    fs::set_permissions(&probe, fs::Permissions::from_mode(0o600)).expect("chmod");
    enforced
}

#[cfg(not(unix))]
pub fn permissions_enforced() -> bool {
    false
}
