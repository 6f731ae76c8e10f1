use super::{BuildState, ContactStrategy, RecordBuilder};
use crate::contact_patterns::{classify_line, PatternLibrary, PhoneShape};
use shared_types::{ContactRecord, ExtractionMethod};

/// Member-id lines open a block; the next `window` lines supply the contact.
pub struct AnchorBlockStrategy {
    window: usize,
}

impl AnchorBlockStrategy {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl ContactStrategy for AnchorBlockStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::AnchorBlock
    }

    fn extract(&self, patterns: &PatternLibrary, _text: &str, lines: &[&str]) -> Vec<ContactRecord> {
        let mut contacts = Vec::new();

        for (i, anchor) in lines.iter().enumerate() {
            if !patterns.is_member_id(anchor) {
                continue;
            }

            let mut builder = RecordBuilder::anchored(anchor);
            for line in lines.iter().skip(i + 1).take(self.window) {
                if patterns.is_member_id(line) {
                    break;
                }
                let field = classify_line(patterns, line, PhoneShape::Strict);
                if builder.offer(field) == BuildState::Complete {
                    break;
                }
            }

            let record = builder.finish();
            if record.is_complete() {
                contacts.push(record);
            } else {
                tracing::debug!("Anchor {} has no usable contact block", anchor);
            }
        }

        contacts
    }
}
