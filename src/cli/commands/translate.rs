use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{JobConfig, JobOptions, Mode};
use crate::output;
use crate::paths::ensure_output_dir;
use crate::pipeline::{run_document, run_streaming};
use crate::translation::DeepLClient;
use crate::ui::{Progress, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub interval: Option<String>,
    pub env_file: String,
    pub output_dir: String,
}

pub fn run_translate(options: TranslateOptions) -> Result<()> {
    let output_dir = PathBuf::from(&options.output_dir);
    ensure_output_dir(&output_dir)?;

    crate::status!("{}", Style::header("XmlTranslator CLI"));

    let job = JobConfig::resolve(&JobOptions {
        file: options.file,
        to: options.to,
        interval: options.interval,
        env_file: PathBuf::from(options.env_file),
        output_dir,
    })?;

    let client = DeepLClient::new(job.endpoint.clone(), job.api_key.clone())
        .context("Failed to build the HTTP client")?;

    let mut progress = if output::is_quiet() {
        Progress::hidden()
    } else {
        Progress::new("Translating...")
    };

    let path = match job.mode {
        Mode::Document => run_document(&job, &client, &mut progress)?,
        Mode::Streaming { interval } => run_streaming(&job, interval, &client, &mut progress)?,
    };
    progress.finish();

    crate::status!(
        "{} {} entries, wrote {}",
        Style::success("Translated"),
        progress.translated(),
        Style::path(path.display())
    );

    Ok(())
}
