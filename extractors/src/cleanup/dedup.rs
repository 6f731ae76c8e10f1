use shared_types::ContactRecord;
use std::collections::HashSet;

/// Keeps the first contact for every email and every phone, preserving order.
///
/// Two contacts are duplicates when they share a non-empty email or a
/// non-empty phone. Dropped duplicates still claim their keys, so a contact
/// matching any earlier contact is dropped too.
pub fn dedup_contacts(contacts: Vec<ContactRecord>) -> Vec<ContactRecord> {
    let mut seen_emails: HashSet<String> = HashSet::new();
    let mut seen_phones: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(contacts.len());

    for contact in contacts {
        let email_seen = !contact.email.is_empty() && !seen_emails.insert(contact.email.clone());
        let phone_seen = !contact.phone.is_empty() && !seen_phones.insert(contact.phone.clone());
        if !email_seen && !phone_seen {
            unique.push(contact);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_keeps_first() {
        let contacts = vec![
            ContactRecord::new("First", "a@b.com", "").with_member_id("FL00001"),
            ContactRecord::new("Second", "a@b.com", "").with_member_id("FL00002"),
        ];

        let unique = dedup_contacts(contacts);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].name, "First");
    }

    #[test]
    fn test_email_or_phone_is_enough() {
        let contacts = vec![
            ContactRecord::new("A", "a@b.com", "111"),
            ContactRecord::new("B", "other@b.com", "111"),
            ContactRecord::new("C", "a@b.com", "222"),
            ContactRecord::new("D", "d@b.com", "444"),
        ];

        let names: Vec<_> = dedup_contacts(contacts).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn test_empty_keys_never_collide() {
        let contacts = vec![
            ContactRecord::new("A", "", "111"),
            ContactRecord::new("B", "", "222"),
            ContactRecord::new("C", "c@b.com", ""),
            ContactRecord::new("D", "d@b.com", ""),
        ];

        assert_eq!(dedup_contacts(contacts).len(), 4);
    }

    #[test]
    fn test_duplicate_chain_is_discarded() {
        let contacts = vec![
            ContactRecord::new("A", "a@b.com", "111"),
            ContactRecord::new("B", "a@b.com", "222"),
            ContactRecord::new("C", "c@b.com", "222"),
        ];

        let names: Vec<_> = dedup_contacts(contacts).into_iter().map(|c| c.name).collect();
        // C shares only its phone with B, which is itself a duplicate of A.
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let contacts = vec![
            ContactRecord::new("A", "a@b.com", "111"),
            ContactRecord::new("B", "a@b.com", "222"),
            ContactRecord::new("C", "c@b.com", "111"),
            ContactRecord::new("D", "", "333"),
        ];

        let once = dedup_contacts(contacts);
        let twice = dedup_contacts(once.clone());
        assert_eq!(once, twice);
    }
}
