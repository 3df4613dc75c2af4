//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use rakers_core::Keywords;
use std::io::Write;

/// Plain text formatter - one `score<TAB>phrase` line per keyword
pub struct TextFormatter<W: Write> {
    writer: W,
    show_source: bool,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    ///
    /// With `show_source`, each source is preceded by a `==> name <==` header.
    pub fn new(writer: W, show_source: bool) -> Self {
        Self {
            writer,
            show_source,
            sources: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_keywords(&mut self, source: &str, keywords: &Keywords) -> Result<()> {
        if self.show_source {
            if self.sources > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }
        self.sources += 1;

        for (phrase, score) in keywords {
            writeln!(self.writer, "{score:.3}\t{phrase}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Keywords {
        [("linear diophantine equations", 9.0), ("minimal set", 4.5)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lines() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, false);
        formatter.format_keywords("a.txt", &sample()).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "9.000\tlinear diophantine equations\n4.500\tminimal set\n");
    }

    #[test]
    fn test_source_headers() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, true);
        formatter.format_keywords("a.txt", &sample()).unwrap();
        formatter.format_keywords("b.txt", &Keywords::new()).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("==> a.txt <==\n"));
        assert!(output.ends_with("\n\n==> b.txt <==\n"));
    }
}
