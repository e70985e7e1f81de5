use std::fs;
use std::path::PathBuf;

use crate::config::JobConfig;
use crate::error::{Error, Result};
use crate::fs::atomic_write;
use crate::paths::{output_path, ticks_now};
use crate::translation::Translator;
use crate::ui::Progress;
use crate::xml::parse_document;

/// Translates every direct `entry` child of the root element.
///
/// Returns the output lines: the prolog, the root start tag, one line per
/// child element and the root end tag. Non-entry children and entries with
/// an empty value are copied from the source unchanged.
pub fn translate_document<T: Translator + ?Sized>(
    source: &str,
    target_lang: &str,
    translator: &T,
    progress: &mut Progress,
) -> Result<Vec<String>> {
    let document = parse_document(source)?;
    let mut lines = Vec::with_capacity(document.children.len() + 3);

    let prolog = document.prolog.trim();
    if !prolog.is_empty() {
        lines.push(prolog.to_string());
    }
    lines.push(document.root_start.to_string());

    for child in &document.children {
        if child.is_entry() && !child.value.is_empty() {
            let translated = translator.translate(&child.value, target_lang)?;
            progress.entry_translated();
            lines.push(child.render(&translated));
        } else {
            lines.push(child.raw.to_string());
        }
    }

    if let Some(root_end) = document.root_end {
        lines.push(root_end.to_string());
    }

    Ok(lines)
}

/// Runs the whole-document pipeline and writes the output file in one go.
///
/// Nothing is written unless every entry was translated.
pub fn run_document<T: Translator + ?Sized>(
    job: &JobConfig,
    translator: &T,
    progress: &mut Progress,
) -> Result<PathBuf> {
    let source = fs::read_to_string(&job.input).map_err(|e| Error::io(&job.input, e))?;
    let lines = translate_document(&source, &job.target_language, translator, progress)?;

    let path = output_path(&job.output_dir, &job.input, &job.target_language, ticks_now());
    let mut content = lines.join("\n");
    content.push('\n');
    atomic_write(&path, &content)?;

    Ok(path)
}
