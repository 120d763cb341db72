//! Contains the Sketch struct describing one installable example.
use std::path::PathBuf;

#[derive(Debug)]
pub struct Sketch {
    pub name: String,
    pub path: PathBuf,
}

impl Sketch {
    pub fn new(name: &str, path: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            path,
        }
    }
}
