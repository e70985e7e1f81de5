mod env_file;
mod job;

pub use env_file::{API_KEY_VAR, API_URL_VAR, DEFAULT_ENV_FILE, EnvFile};
pub use job::{JobConfig, JobOptions, Mode};
