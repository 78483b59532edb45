use std::fs;
use std::path::{Path, PathBuf};

pub fn write_essay(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

pub fn write_pair(dir: &Path, first: &str, second: &str) -> (PathBuf, PathBuf) {
    (
        write_essay(dir, "essay1.txt", first),
        write_essay(dir, "essay2.txt", second),
    )
}
