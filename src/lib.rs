//! # xml-translator - Localization XML translation CLI
//!
//! `xml-translator` reads a localization XML file made of `entry` elements,
//! sends each entry's text to the DeepL API and writes the translated
//! document to an output directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Whole-document mode
//! xml-translator ./strings.xml es
//!
//! # Streaming mode, writing every 500 lines
//! xml-translator ./strings.xml es 500
//!
//! # List supported target languages
//! xml-translator languages
//! ```
//!
//! ## Configuration
//!
//! The API key is read from a key=value file (`.env` by default):
//!
//! ```text
//! DEEPL_API_KEY=your-key:fx
//! DEEPL_API_URL=https://api.deepl.com/v2/translate
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Env-file loading and job validation.
pub mod config;

/// Structured error kinds.
pub mod error;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// Output directory and file naming.
pub mod paths;

/// Whole-document and streaming translation pipelines.
pub mod pipeline;

/// Translator trait and the DeepL client.
pub mod translation;

/// Terminal UI components (progress, colors).
pub mod ui;

/// Entry extraction from XML documents and single lines.
pub mod xml;

pub use error::{Error, ErrorKind, Result};
