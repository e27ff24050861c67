//! File and directory utilities.

use std::fs;
use std::fs::File;
use std::io::Error;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::to_writer_pretty;

/// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<(), Error> {
    let file = File::create(path)?;
    Ok(to_writer_pretty(file, value)?)
}

/// Recursively locates all files under `path` accepted by the `filter`. If `path` is itself a
/// file accepted by the filter, it is the sole result. Files are returned sorted by path, so that
/// e.g. weekly score files named `01.txt`, `02.txt`, ... are visited in week order.
pub fn list_files(path: impl Into<PathBuf>, filter: &mut impl FnMut(&Path) -> bool) -> Result<Vec<PathBuf>, Error> {
    let mut files = vec![];
    recurse_dir(path.into(), &mut files, filter)?;
    files.sort();
    Ok(files)
}

fn recurse_dir(path: PathBuf, files: &mut Vec<PathBuf>, filter: &mut impl FnMut(&Path) -> bool) -> Result<(), Error> {
    let md = fs::metadata(&path)?;
    if md.is_dir() {
        let entries = fs::read_dir(path)?;
        for entry in entries {
            recurse_dir(entry?.path(), files, filter)?;
        }
    } else if filter(&path) {
        files.push(path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::testing::scratch_dir;

    #[test]
    fn list_sorted_and_filtered() {
        let dir = scratch_dir("list_sorted_and_filtered");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("02.txt"), "").unwrap();
        fs::write(dir.join("01.txt"), "").unwrap();
        fs::write(dir.join("notes.md"), "").unwrap();
        fs::write(dir.join("nested").join("03.txt"), "").unwrap();

        let files = list_files(&dir, &mut |path| {
            path.extension().map_or(false, |extension| extension == "txt")
        })
        .unwrap();
        assert_eq!(
            vec![dir.join("01.txt"), dir.join("02.txt"), dir.join("nested").join("03.txt")],
            files
        );
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn list_single_file() {
        let dir = scratch_dir("list_single_file");
        let file = dir.join("01.txt");
        fs::write(&file, "").unwrap();
        assert_eq!(vec![file.clone()], list_files(&file, &mut |_| true).unwrap());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn list_missing() {
        let missing = env::temp_dir().join("survivor-nfl-no-such-dir");
        assert!(list_files(missing, &mut |_| true).is_err());
    }

    #[test]
    fn write_and_read_back() {
        let dir = scratch_dir("write_and_read_back");
        let path = dir.join("out.json");
        write_json(&path, &vec!["KC", "BUF"]).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        let decoded: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(vec!["KC", "BUF"], decoded);
        fs::remove_dir_all(dir).unwrap();
    }
}
