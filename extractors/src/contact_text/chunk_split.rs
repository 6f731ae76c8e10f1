use super::{ContactStrategy, RecordBuilder};
use crate::contact_patterns::{classify_line, LineField, PatternLibrary, PhoneShape};
use shared_types::{ContactRecord, ExtractionMethod};

/// Splits the document at serial-number and member-id lines and reads each
/// chunk as one contact.
pub struct ChunkSplitStrategy {
    min_lines: usize,
}

impl ChunkSplitStrategy {
    pub fn new(min_lines: usize) -> Self {
        Self { min_lines }
    }
}

/// Trimmed non-empty lines of `text`, grouped so that every boundary line
/// starts a new chunk.
pub fn split_chunks<'a>(patterns: &PatternLibrary, text: &'a str) -> Vec<Vec<&'a str>> {
    let mut chunks: Vec<Vec<&str>> = vec![Vec::new()];

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let is_boundary = patterns.is_serial_number(line) || patterns.is_member_id(line);
        if is_boundary && chunks.last().is_some_and(|c| !c.is_empty()) {
            chunks.push(Vec::new());
        }
        if let Some(current) = chunks.last_mut() {
            current.push(line);
        }
    }

    chunks.retain(|c| !c.is_empty());
    chunks
}

impl ContactStrategy for ChunkSplitStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::ChunkSplit
    }

    fn extract(&self, patterns: &PatternLibrary, text: &str, _lines: &[&str]) -> Vec<ContactRecord> {
        let mut contacts = Vec::new();

        for chunk in split_chunks(patterns, text) {
            if chunk.len() < self.min_lines {
                continue;
            }

            let mut builder = RecordBuilder::new();
            for line in &chunk {
                match classify_line(patterns, line, PhoneShape::Loose) {
                    // Only the anchor-block strategy reports member ids.
                    LineField::MemberId(_) => {}
                    field => {
                        builder.offer(field);
                    }
                }
            }

            let record = builder.finish();
            if record.is_complete() {
                contacts.push(record);
            }
        }

        contacts
    }
}
