use super::{BuildState, ContactStrategy, RecordBuilder};
use crate::contact_patterns::{digit_count, LineField, PatternLibrary};
use shared_types::{ContactRecord, ExtractionMethod};

/// `Name: …` / `Phone: …` / `Email: …` blocks and free-form title-case names.
///
/// Records may leave this strategy without a name; callers pick the
/// placeholder.
pub struct LabeledFieldStrategy;

const MIN_PHONE_DIGITS: usize = 10;

impl ContactStrategy for LabeledFieldStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::LabeledField
    }

    fn extract(&self, patterns: &PatternLibrary, _text: &str, lines: &[&str]) -> Vec<ContactRecord> {
        let mut contacts = Vec::new();
        let mut current = RecordBuilder::new();

        for line in lines {
            let emails = patterns.find_emails(line);
            for email in &emails {
                if current.has_email() {
                    // A second address starts the next contact.
                    let previous = current.take();
                    if !previous.name.is_empty() || !previous.phone.is_empty() {
                        contacts.push(previous);
                    }
                }
                current.offer(LineField::Email(email));
            }

            let phones: Vec<&str> = patterns
                .find_phones(line)
                .into_iter()
                .filter(|phone| digit_count(phone) >= MIN_PHONE_DIGITS)
                .collect();
            if let Some(phone) = phones.first() {
                current.offer(LineField::Phone(phone));
            }

            if emails.is_empty() && phones.is_empty() {
                if let Some(name) = patterns.labeled_name(line).filter(|n| n.chars().count() > 1) {
                    current.offer(LineField::Name(name));
                }
            }

            if current.state() == BuildState::Complete {
                contacts.push(current.take());
            }
        }

        let trailing = current.finish();
        if trailing.is_reachable() {
            contacts.push(trailing);
        }

        contacts
    }
}
