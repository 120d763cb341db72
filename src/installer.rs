//! Contains the Installer struct and the sketch install/enumeration logic.
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use colored::*;

use super::sketch::Sketch;

pub const LIBRARY_NAME: &str = "xDuinoRails_LocoFuncDecoder";
pub const SKETCH_EXTENSION: &str = "ino";

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("example sketch not found at {}", .path.display())]
    SketchNotFound { path: PathBuf },
    #[error("failed to copy {} to {}: {source}", .source_path.display(), .target_path.display())]
    Copy {
        source_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct Installer {
    pub base_dir: PathBuf,
}

impl Installer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn examples_dir(&self) -> PathBuf {
        self.base_dir.join("lib").join(LIBRARY_NAME).join("examples")
    }

    /// Conventional sketch location: the example name is both the directory
    /// and the file stem.
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.examples_dir()
            .join(name)
            .join(format!("{}.{}", name, SKETCH_EXTENSION))
    }

    pub fn target_path(&self) -> PathBuf {
        self.base_dir.join("src").join("main.cpp")
    }

    /// Copies the named sketch over the firmware entry point. The target is
    /// overwritten unconditionally; intermediate directories are not created.
    pub fn install(&self, name: &str) -> Result<(), InstallError> {
        let source = self.source_path(name);
        let target = self.target_path();
        if !source.is_file() {
            return Err(InstallError::SketchNotFound { path: source });
        }
        println!(
            "Copying {} to {}...",
            source.display().to_string().cyan(),
            target.display().to_string().cyan()
        );
        fs::copy(&source, &target).map_err(|e| InstallError::Copy {
            source_path: source,
            target_path: target,
            source: e,
        })?;
        Ok(())
    }

    pub fn list_sketches(&self) -> Result<Vec<Sketch>> {
        let examples_dir = self.examples_dir();
        let entries = fs::read_dir(&examples_dir)
            .map_err(|_| anyhow!("No examples directory at {}", examples_dir.display()))?;
        let mut sketches = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let sketch_file = entry
                .path()
                .join(format!("{}.{}", name, SKETCH_EXTENSION));
            if sketch_file.is_file() {
                sketches.push(Sketch::new(&name, sketch_file));
            }
        }
        sketches.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(sketches)
    }
}
