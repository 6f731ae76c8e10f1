use super::{PatternLibrary, PhoneShape};

/// What a single line contributes to a contact.
///
/// Classes are exclusive and tried in declaration order: a line holding an
/// email is never also read as a phone or a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField<'a> {
    /// The email token found in the line
    Email(&'a str),
    /// The phone token found in the line
    Phone(&'a str),
    MemberId(&'a str),
    Name(&'a str),
    Other,
}

pub fn classify_line<'a>(patterns: &PatternLibrary, line: &'a str, phone: PhoneShape) -> LineField<'a> {
    if let Some(email) = patterns.find_email(line) {
        return LineField::Email(email);
    }

    if let Some(phone) = patterns.find_phone(line, phone) {
        return LineField::Phone(phone);
    }

    if patterns.is_member_id(line) {
        return LineField::MemberId(line);
    }

    if patterns.is_name_candidate(line) {
        return LineField::Name(line);
    }

    LineField::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let patterns = PatternLibrary::default();

        assert_eq!(
            classify_line(&patterns, "john@example.com", PhoneShape::Strict),
            LineField::Email("john@example.com")
        );
        assert_eq!(
            classify_line(&patterns, "08012345678", PhoneShape::Strict),
            LineField::Phone("08012345678")
        );
        assert_eq!(
            classify_line(&patterns, "FL00123", PhoneShape::Strict),
            LineField::MemberId("FL00123")
        );
        assert_eq!(
            classify_line(&patterns, "JOHN SMITH", PhoneShape::Strict),
            LineField::Name("JOHN SMITH")
        );
        assert_eq!(
            classify_line(&patterns, "FELLOW", PhoneShape::Strict),
            LineField::Other
        );
    }

    #[test]
    fn test_email_wins_over_phone_on_same_line() {
        let patterns = PatternLibrary::default();
        assert_eq!(
            classify_line(&patterns, "jane@example.com 555-987-6543", PhoneShape::Loose),
            LineField::Email("jane@example.com")
        );
    }

    #[test]
    fn test_phone_shape_changes_classification() {
        let patterns = PatternLibrary::default();
        assert_eq!(
            classify_line(&patterns, "555-987-6543", PhoneShape::Strict),
            LineField::Other
        );
        assert_eq!(
            classify_line(&patterns, "555-987-6543", PhoneShape::Loose),
            LineField::Phone("555-987-6543")
        );
    }
}
