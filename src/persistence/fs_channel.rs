//! Filesystem-backed [`FileChannel`].

use crate::host::FileChannel;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Saves into a directory and opens a path chosen by the host.
///
/// Writes go through a temp file in the target directory and are renamed into
/// place, so a crash mid-save never leaves a truncated board behind.
#[derive(Debug, Clone)]
pub struct FsFileChannel {
    dir: PathBuf,
    open_path: Option<PathBuf>,
}

impl FsFileChannel {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            open_path: None,
        }
    }

    /// Queue the file the next `open` call reads.
    pub fn set_open_path(&mut self, path: impl Into<PathBuf>) {
        self.open_path = Some(path.into());
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileChannel for FsFileChannel {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;

        let target = self.dir.join(filename);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("creating temp file in {}", self.dir.display()))?;
        tmp.write_all(bytes).context("writing board")?;
        tmp.flush().context("flushing board")?;
        tmp.persist(&target)
            .with_context(|| format!("replacing {}", target.display()))?;

        info!(path = %target.display(), bytes = bytes.len(), "Board written");
        Ok(())
    }

    fn open(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        let Some(path) = self.open_path.take() else {
            debug!("Open requested with no file selected");
            return Ok(None);
        };
        let bytes =
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        Ok(Some(bytes))
    }
}
