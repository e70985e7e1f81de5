//! Translation pipelines.
//!
//! Both pipelines are sequential: one blocking translator call per entry,
//! output in exactly the order of the input.

mod document;
mod streaming;

pub use document::{run_document, translate_document};
pub use streaming::{StreamOptions, StreamSummary, run_streaming, translate_stream};

use crate::error::Result;

/// Destination for batches of output lines.
pub trait LineSink {
    /// Appends `lines` in order, one per line.
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;
}

/// Ordered output lines waiting to be flushed.
#[derive(Debug)]
pub struct OutputBuffer {
    lines: Vec<String>,
    interval: usize,
}

impl OutputBuffer {
    /// Creates a buffer that reports full after `interval` lines (at least one).
    pub fn new(interval: usize) -> Self {
        let interval = interval.max(1);
        Self {
            lines: Vec::with_capacity(interval),
            interval,
        }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.interval
    }

    /// Writes every buffered line to `sink` and clears the buffer.
    ///
    /// Returns the number of lines written.
    pub fn flush_to<S: LineSink + ?Sized>(&mut self, sink: &mut S) -> Result<usize> {
        sink.write_lines(&self.lines)?;
        let written = self.lines.len();
        self.lines.clear();
        Ok(written)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Batches(Vec<Vec<String>>);

    impl LineSink for Batches {
        fn write_lines(&mut self, lines: &[String]) -> Result<()> {
            self.0.push(lines.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_buffer_reports_full_at_interval() {
        let mut buffer = OutputBuffer::new(2);
        buffer.push("a".to_string());
        assert!(!buffer.is_full());
        buffer.push("b".to_string());
        assert!(buffer.is_full());
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_flush_clears_buffer() {
        let mut buffer = OutputBuffer::new(3);
        let mut sink = Batches::default();
        buffer.push("a".to_string());
        buffer.push("b".to_string());

        assert_eq!(buffer.flush_to(&mut sink).unwrap(), 2);
        assert!(buffer.is_empty());
        assert_eq!(sink.0, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_zero_interval_behaves_like_one() {
        let mut buffer = OutputBuffer::new(0);
        assert!(!buffer.is_full());
        buffer.push("a".to_string());
        assert!(buffer.is_full());
    }
}
