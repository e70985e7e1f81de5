mod client;
mod language;

pub use client::{DEFAULT_ENDPOINT, DeepLClient};
pub use language::{SUPPORTED_LANGUAGES, print_languages, validate_language};

use crate::error::Result;

/// Translates one text value into a target language.
///
/// Calls block until the translation is available.
pub trait Translator {
    fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}
