use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default location of the key=value configuration file.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variable holding the DeepL authentication key.
pub const API_KEY_VAR: &str = "DEEPL_API_KEY";

/// Optional variable overriding the translation endpoint.
pub const API_URL_VAR: &str = "DEEPL_API_URL";

/// A parsed key=value configuration file.
///
/// Each line is split on `=` with empty pieces dropped. Lines that do not
/// yield exactly a key and a value are skipped. Later keys win.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    path: PathBuf,
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a config error if the file does not exist, an I/O error if it
    /// cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::Config(format!(
                "The env file {} does not exist.",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut env = Self::parse(&contents);
        env.path = path.to_path_buf();
        Ok(env)
    }

    pub fn parse(contents: &str) -> Self {
        let mut vars = HashMap::new();

        for line in contents.lines() {
            let parts: Vec<&str> = line.split('=').filter(|p| !p.is_empty()).collect();
            let [key, value] = parts.as_slice() else {
                continue;
            };
            vars.insert(key.trim().to_string(), value.trim().to_string());
        }

        Self {
            path: PathBuf::new(),
            vars,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the non-blank API key.
    pub fn api_key(&self) -> Result<&str> {
        self.get(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "Please set the {API_KEY_VAR} variable in {}.",
                    self.path.display()
                ))
            })
    }

    /// Returns the endpoint override, if one is set.
    pub fn api_url(&self) -> Option<&str> {
        self.get(API_URL_VAR).filter(|url| !url.is_empty())
    }
}
