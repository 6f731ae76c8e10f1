use super::{ContactStrategy, RecordBuilder};
use crate::contact_patterns::{LineField, PatternLibrary, PhoneShape};
use shared_types::{ContactRecord, ExtractionMethod};

/// An all-caps name followed within `window` lines by a phone and/or email.
pub struct SequentialTripletStrategy {
    window: usize,
}

impl SequentialTripletStrategy {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl ContactStrategy for SequentialTripletStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::SequentialTriplet
    }

    fn extract(&self, patterns: &PatternLibrary, _text: &str, lines: &[&str]) -> Vec<ContactRecord> {
        let mut contacts = Vec::new();

        for (i, name) in lines.iter().enumerate() {
            if !patterns.is_shouted_name(name) {
                continue;
            }

            // Phone and email are looked for independently of each other.
            let mut builder = RecordBuilder::named(name);
            for line in lines.iter().skip(i + 1).take(self.window) {
                if let Some(phone) = patterns.find_phone(line, PhoneShape::Loose) {
                    builder.offer(LineField::Phone(phone));
                }
                if let Some(email) = patterns.find_email(line) {
                    builder.offer(LineField::Email(email));
                }
                if builder.has_phone() && builder.has_email() {
                    break;
                }
            }

            if builder.has_phone() || builder.has_email() {
                contacts.push(builder.finish());
            }
        }

        contacts
    }
}
