use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{LineSink, OutputBuffer};
use crate::config::JobConfig;
use crate::error::{Error, Result};
use crate::fs::PartialFile;
use crate::paths::{output_path, ticks_now};
use crate::translation::Translator;
use crate::ui::Progress;
use crate::xml::{looks_like_entry, parse_entry_line, strip_bom};

/// Settings for one streaming pass.
#[derive(Debug, Clone, Copy)]
pub struct StreamOptions<'a> {
    /// Input path, used in error messages.
    pub source: &'a Path,
    pub target_lang: &'a str,
    /// Lines buffered before each flush.
    pub interval: usize,
}

/// Counters for a finished streaming pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub lines: usize,
    pub translated: usize,
    pub flushes: usize,
}

/// Translates `reader` line by line, flushing to `sink` every
/// `options.interval` lines and once more for any remainder.
///
/// A line is flushed only after it has been processed, so no flush is ever
/// empty and every input line reaches the sink exactly once.
pub fn translate_stream<R, T, S>(
    reader: R,
    options: &StreamOptions<'_>,
    translator: &T,
    sink: &mut S,
    progress: &mut Progress,
) -> Result<StreamSummary>
where
    R: BufRead,
    T: Translator + ?Sized,
    S: LineSink + ?Sized,
{
    let mut buffer = OutputBuffer::new(options.interval);
    let mut summary = StreamSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(options.source, e))?;
        let line = if index == 0 { strip_bom(&line) } else { &line };

        let (output, translated) =
            process_line(line, index + 1, options.target_lang, translator)?;
        if translated {
            summary.translated += 1;
            progress.entry_translated();
        }
        buffer.push(output);
        summary.lines += 1;

        if buffer.is_full() {
            let written = buffer.flush_to(sink)?;
            summary.flushes += 1;
            progress.note(&format!("Flushed {written} lines ({} total).", summary.lines));
        }
    }

    if !buffer.is_empty() {
        buffer.flush_to(sink)?;
        summary.flushes += 1;
    }

    Ok(summary)
}

/// Returns the output form of one line and whether it was translated.
fn process_line<T: Translator + ?Sized>(
    line: &str,
    line_no: usize,
    target_lang: &str,
    translator: &T,
) -> Result<(String, bool)> {
    if !looks_like_entry(line) {
        return Ok((line.to_string(), false));
    }

    match parse_entry_line(line, line_no)? {
        Some(entry) if !entry.value().is_empty() => {
            let translated = translator.translate(entry.value(), target_lang)?;
            Ok((entry.render(&translated), true))
        }
        _ => Ok((line.to_string(), false)),
    }
}

/// Runs the streaming pipeline for `job`.
///
/// The output name is fixed before the first line is read. Batches are
/// appended to a hidden partial file which is renamed to that name only
/// after the last flush; a failed run leaves the partial file behind.
pub fn run_streaming<T: Translator + ?Sized>(
    job: &JobConfig,
    interval: usize,
    translator: &T,
    progress: &mut Progress,
) -> Result<PathBuf> {
    let file = File::open(&job.input).map_err(|e| Error::io(&job.input, e))?;
    let path = output_path(&job.output_dir, &job.input, &job.target_language, ticks_now());
    let mut sink = PartialFile::create(&path)?;

    let options = StreamOptions {
        source: &job.input,
        target_lang: &job.target_language,
        interval,
    };

    match translate_stream(BufReader::new(file), &options, translator, &mut sink, progress) {
        Ok(summary) => {
            progress.note(&format!(
                "Processed {} lines, translated {} entries.",
                summary.lines, summary.translated
            ));
            sink.commit()
        }
        Err(e) => {
            crate::warn!(
                "Partial output left at {}",
                sink.partial_path().display()
            );
            Err(e)
        }
    }
}
