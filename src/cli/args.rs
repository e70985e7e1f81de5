use clap::{Parser, Subcommand};

use crate::config::DEFAULT_ENV_FILE;
use crate::paths::DEFAULT_OUTPUT_DIR;

#[derive(Parser, Debug)]
#[command(name = "xml-translator")]
#[command(about = "Translate the entry values of localization XML files with DeepL")]
#[command(version)]
pub struct Args {
    /// XML file to translate
    pub file: Option<String>,

    /// Target language code (es, en)
    pub to: Option<String>,

    /// Stream the input line by line, writing output every INTERVAL lines
    pub interval: Option<String>,

    /// Key=value file providing DEEPL_API_KEY
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: String,

    /// Directory output files are written to
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Suppress progress and status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported target language codes
    Languages,
}
