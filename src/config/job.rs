use std::path::PathBuf;

use super::env_file::EnvFile;
use crate::error::{Error, Result};
use crate::translation::{DEFAULT_ENDPOINT, validate_language};

/// How the input document is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Parse the whole document and write the output once.
    Document,
    /// Read line by line, flushing every `interval` buffered lines.
    Streaming { interval: usize },
}

/// Raw, unvalidated job settings as they come from the command line.
#[derive(Debug, Clone)]
pub struct JobOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub interval: Option<String>,
    pub env_file: PathBuf,
    pub output_dir: PathBuf,
}

/// A fully validated translation job.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub input: PathBuf,
    /// Target language code as typed by the user.
    pub target_language: String,
    pub mode: Mode,
    pub api_key: String,
    pub endpoint: String,
    pub output_dir: PathBuf,
}

impl JobConfig {
    /// Validates every precondition before any work is done.
    ///
    /// Checks run in a fixed order: env file, API key, input argument,
    /// language argument, input existence, language support, interval.
    pub fn resolve(options: &JobOptions) -> Result<Self> {
        let env = EnvFile::load(&options.env_file)?;
        let api_key = env.api_key()?.to_string();
        let endpoint = env.api_url().unwrap_or(DEFAULT_ENDPOINT).to_string();

        let file = options
            .file
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .ok_or_else(|| Error::Validation("Please provide an XML file.".to_string()))?;

        let to = options
            .to
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Validation("Please provide an output language.".to_string()))?;

        let input = PathBuf::from(file);
        if !input.is_file() {
            return Err(Error::Validation(format!(
                "The provided XML file does not exist: {file}"
            )));
        }

        validate_language(to)?;

        let mode = match options.interval.as_deref() {
            None => Mode::Document,
            Some(raw) => Mode::Streaming {
                interval: parse_interval(raw)?,
            },
        };

        Ok(Self {
            input,
            target_language: to.to_string(),
            mode,
            api_key,
            endpoint,
            output_dir: options.output_dir.clone(),
        })
    }
}

fn parse_interval(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(interval) if interval > 0 => Ok(interval),
        _ => Err(Error::Validation(format!(
            "The interval must be a positive integer, got '{raw}'."
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        options: JobOptions,
    }

    fn fixture(env_contents: Option<&str>) -> Fixture {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        if let Some(contents) = env_contents {
            fs::write(&env_file, contents).unwrap();
        }
        let input = dir.path().join("strings.xml");
        fs::write(&input, "<root><entry name=\"a\">Hi</entry></root>").unwrap();

        let options = JobOptions {
            file: Some(input.to_string_lossy().into_owned()),
            to: Some("es".to_string()),
            interval: None,
            env_file,
            output_dir: dir.path().join("Output"),
        };
        Fixture { dir, options }
    }

    #[test]
    fn test_resolve_document_mode() {
        let f = fixture(Some("DEEPL_API_KEY=secret\n"));
        let job = JobConfig::resolve(&f.options).unwrap();

        assert_eq!(job.mode, Mode::Document);
        assert_eq!(job.api_key, "secret");
        assert_eq!(job.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(job.target_language, "es");
        assert_eq!(job.output_dir, f.dir.path().join("Output"));
    }

    #[test]
    fn test_resolve_streaming_mode() {
        let mut f = fixture(Some("DEEPL_API_KEY=secret\n"));
        f.options.interval = Some("25".to_string());

        let job = JobConfig::resolve(&f.options).unwrap();
        assert_eq!(job.mode, Mode::Streaming { interval: 25 });
    }

    #[test]
    fn test_resolve_uses_endpoint_override() {
        let f = fixture(Some(
            "DEEPL_API_KEY=secret\nDEEPL_API_URL=http://localhost:8080/translate\n",
        ));
        let job = JobConfig::resolve(&f.options).unwrap();
        assert_eq!(job.endpoint, "http://localhost:8080/translate");
    }

    #[test]
    fn test_missing_env_file_is_config_error() {
        let f = fixture(None);
        let err = JobConfig::resolve(&f.options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let f = fixture(Some("OTHER=value\n"));
        let err = JobConfig::resolve(&f.options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("DEEPL_API_KEY"));
    }

    #[test]
    fn test_missing_arguments() {
        let mut f = fixture(Some("DEEPL_API_KEY=secret\n"));
        f.options.to = None;
        let err = JobConfig::resolve(&f.options).unwrap_err();
        assert!(err.to_string().contains("output language"));

        f.options.file = Some("  ".to_string());
        let err = JobConfig::resolve(&f.options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("XML file"));
    }

    #[test]
    fn test_nonexistent_input() {
        let mut f = fixture(Some("DEEPL_API_KEY=secret\n"));
        f.options.file = Some(f.dir.path().join("missing.xml").to_string_lossy().into_owned());
        let err = JobConfig::resolve(&f.options).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_language_is_case_insensitive() {
        let mut f = fixture(Some("DEEPL_API_KEY=secret\n"));
        f.options.to = Some("ES".to_string());
        let job = JobConfig::resolve(&f.options).unwrap();
        assert_eq!(job.target_language, "ES");

        f.options.to = Some("fr".to_string());
        let err = JobConfig::resolve(&f.options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_intervals() {
        let mut f = fixture(Some("DEEPL_API_KEY=secret\n"));
        for raw in ["abc", "0", "-3", "1.5", ""] {
            f.options.interval = Some(raw.to_string());
            let err = JobConfig::resolve(&f.options).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "interval {raw:?}");
        }
    }
}
