//! Field cleanup and deduplication shared by every extraction path.

mod dedup;
mod name_format;

pub use dedup::dedup_contacts;
pub use name_format::format_name;

use shared_types::ContactRecord;

/// Formats every name once, then drops duplicates.
pub fn finalize_contacts(contacts: Vec<ContactRecord>) -> Vec<ContactRecord> {
    let formatted = contacts
        .into_iter()
        .map(|mut contact| {
            contact.name = format_name(&contact.name);
            contact
        })
        .collect();

    dedup_contacts(formatted)
}
