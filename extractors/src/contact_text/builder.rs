use crate::contact_patterns::LineField;
use shared_types::ContactRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Empty,
    Partial,
    /// Name, email and phone are all known
    Complete,
}

/// Accumulates one candidate contact across lines.
///
/// The first value offered for a field wins; later values for the same field
/// are ignored.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    name: String,
    email: String,
    phone: String,
    member_id: Option<String>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchored(member_id: &str) -> Self {
        Self {
            member_id: Some(member_id.to_string()),
            ..Self::default()
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn state(&self) -> BuildState {
        let filled = [&self.name, &self.email, &self.phone]
            .iter()
            .filter(|field| !field.is_empty())
            .count();

        match filled {
            0 => BuildState::Empty,
            3 => BuildState::Complete,
            _ => BuildState::Partial,
        }
    }

    pub fn offer(&mut self, field: LineField<'_>) -> BuildState {
        match field {
            LineField::Email(email) => fill(&mut self.email, email),
            LineField::Phone(phone) => fill(&mut self.phone, phone),
            LineField::Name(name) => fill(&mut self.name, name),
            LineField::MemberId(_) | LineField::Other => {}
        }
        self.state()
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }

    pub fn finish(self) -> ContactRecord {
        ContactRecord {
            name: self.name,
            email: self.email,
            phone: self.phone,
            member_id: self.member_id,
        }
    }

    /// Emits the current record and resets to `Empty`.
    pub fn take(&mut self) -> ContactRecord {
        std::mem::take(self).finish()
    }
}

fn fill(slot: &mut String, value: &str) {
    if slot.is_empty() {
        *slot = value.trim().to_string();
    }
}
