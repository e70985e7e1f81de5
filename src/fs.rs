//! File system utilities.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pipeline::LineSink;

/// Writes content to a file atomically using a temp file and rename.
///
/// An interrupted run leaves at most the hidden temp file behind, never a
/// truncated file under the final name.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = sibling_with_suffix(path, "tmp");

    fs::write(&temp_path, content).map_err(|e| Error::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Returns `<dir>/.<file_name>.<suffix>` next to `path`.
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    parent.join(format!(".{file_name}.{suffix}"))
}

/// An output file that is appended to in batches and only appears under its
/// final name once [`PartialFile::commit`] succeeds.
pub struct PartialFile {
    writer: BufWriter<File>,
    partial_path: PathBuf,
    final_path: PathBuf,
}

impl PartialFile {
    pub fn create(final_path: &Path) -> Result<Self> {
        let partial_path = sibling_with_suffix(final_path, "partial");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&partial_path)
            .map_err(|e| Error::io(&partial_path, e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            partial_path,
            final_path: final_path.to_path_buf(),
        })
    }

    pub fn partial_path(&self) -> &Path {
        &self.partial_path
    }

    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    /// Flushes outstanding bytes and renames the file to its final name.
    pub fn commit(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .map_err(|e| Error::io(&self.partial_path, e))?;
        drop(self.writer);

        fs::rename(&self.partial_path, &self.final_path)
            .map_err(|e| Error::io(&self.final_path, e))?;
        Ok(self.final_path)
    }
}

impl LineSink for PartialFile {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.writer, "{line}").map_err(|e| Error::io(&self.partial_path, e))?;
        }
        self.writer
            .flush()
            .map_err(|e| Error::io(&self.partial_path, e))
    }
}
