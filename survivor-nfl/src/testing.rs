use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

/// A freshly created, empty directory under the system's temporary directory, unique to the
/// calling test and process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("survivor-nfl-{name}-{}", process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}
