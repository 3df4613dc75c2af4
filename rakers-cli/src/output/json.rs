//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use rakers_core::Keywords;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one object per source as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// File name or `<stdin>`
    pub source: String,
    /// Phrase to score, in extraction order
    pub keywords: Keywords,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_keywords(&mut self, source: &str, keywords: &Keywords) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            keywords: keywords.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_document() {
        let keywords: Keywords = [("upper bounds", 4.0), ("criteria", 1.0)]
            .into_iter()
            .collect();

        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer);
        formatter.format_keywords("<stdin>", &keywords).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["source"], "<stdin>");
        assert_eq!(value[0]["keywords"]["upper bounds"], 4.0);

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.find("upper bounds").unwrap() < text.find("criteria").unwrap());
    }
}
