//! Target language validation and supported languages.

use crate::error::{Error, Result};
use crate::ui::Style;

/// Supported target language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("es", "Spanish")];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("{}", language_line(code, name));
    }
}

/// One listing row; the code is padded before styling so the names line up
/// with colors on.
fn language_line(code: &str, name: &str) -> String {
    format!("  {} {}", Style::code(format!("{code:3}")), Style::secondary(name))
}

/// Validates that the given language code is supported, ignoring case.
pub fn validate_language(lang: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES
        .iter()
        .any(|(code, _)| code.eq_ignore_ascii_case(lang))
    {
        Ok(())
    } else {
        let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|(code, _)| *code).collect();
        Err(Error::Validation(format!(
            "The provided output language '{lang}' is not supported.\n\n\
             Supported codes: {}\n\
             Run 'xml-translator languages' to see them.",
            codes.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("es").is_ok());
        assert!(validate_language("en").is_ok());
    }

    #[test]
    fn test_validate_language_ignores_case() {
        assert!(validate_language("ES").is_ok());
        assert!(validate_language("En").is_ok());
    }

    #[test]
    fn test_language_line_pads_code_inside_style() {
        let line = language_line("en", "English");
        assert!(line.starts_with(&format!("  {} ", Style::code("en "))));
        assert!(line.ends_with(&Style::secondary("English")));
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("fr").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("esp").is_err());
    }
}
