//! Output directory and output file naming.
//!
//! Output files are named `<inputBaseName>_<lang>_<ticks>.xml`, where `ticks`
//! counts 100-nanosecond intervals since 0001-01-01, so successive runs never
//! collide.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Directory output files are written to unless overridden.
pub const DEFAULT_OUTPUT_DIR: &str = "Output";

/// Ticks between 0001-01-01 and the Unix epoch.
const UNIX_EPOCH_TICKS: u64 = 621_355_968_000_000_000;

/// Returns the current wall-clock time in ticks.
pub fn ticks_now() -> u64 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    UNIX_EPOCH_TICKS + (since_epoch.as_nanos() / 100) as u64
}

/// Builds the output file name for `input` translated to `lang`.
pub fn output_file_name(input: &Path, lang: &str, ticks: u64) -> String {
    let base = input
        .file_stem()
        .map_or_else(|| "output".into(), |stem| stem.to_string_lossy());
    format!("{base}_{lang}_{ticks}.xml")
}

pub fn output_path(output_dir: &Path, input: &Path, lang: &str, ticks: u64) -> PathBuf {
    output_dir.join(output_file_name(input, lang, ticks))
}

/// Creates the output directory if it does not exist yet.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))
}
