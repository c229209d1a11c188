#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const POSITIVE: &str = ";;; positive opinion words\n\ngood\nnice\ngreat\nexcellent\nenvious\n";
pub const NEGATIVE: &str = ";;; negative opinion words\n\nbad\nworthless\npoor\nenvious\n";

/// Temporary working directory holding a lexicon pair and reviews.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("positive-words.txt"), POSITIVE)?;
        fs::write(dir.path().join("negative-words.txt"), NEGATIVE)?;
        Ok(Self { dir })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn positive(&self) -> PathBuf {
        self.path("positive-words.txt")
    }

    pub fn negative(&self) -> PathBuf {
        self.path("negative-words.txt")
    }
}

pub fn read(path: &Path) -> anyhow::Result<String> {
    Ok(fs::read_to_string(path)?)
}
