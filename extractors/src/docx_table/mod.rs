//! Contacts from tables in converted word-processor markup.
//!
//! Columns are identified by content, not by header text, so tables with
//! reordered or renamed columns still work.

mod html_table;

pub use html_table::{parse_tables, Table, TableRow};

use crate::contact_patterns::digit_count;
use regex::Regex;
use shared_types::ContactRecord;
use std::sync::LazyLock;

static PHONE_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9()+\s-]{10,}").expect("Invalid phone cell regex"));

static STRICT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

const MIN_PHONE_DIGITS: usize = 10;

/// Rows found in one markup document.
#[derive(Debug, Default)]
pub struct TableContacts {
    pub contacts: Vec<ContactRecord>,
    pub tables_found: usize,
}

#[derive(Debug, Default)]
pub struct TableContactExtractor;

impl TableContactExtractor {
    pub fn new() -> Self {
        Self
    }

    /// One contact per valid data row. The first row of the first table is
    /// treated as the header.
    pub fn extract(&self, markup: &str) -> TableContacts {
        let tables = parse_tables(markup);
        let mut contacts = Vec::new();

        for (table_index, table) in tables.iter().enumerate() {
            let skip = if table_index == 0 { 1 } else { 0 };

            for (row_index, row) in table.iter().enumerate().skip(skip) {
                match self.row_to_contact(row) {
                    Some(contact) => contacts.push(contact),
                    None => tracing::debug!(
                        "Skipping table {} row {}: no valid name with phone or email",
                        table_index,
                        row_index
                    ),
                }
            }
        }

        TableContacts {
            contacts,
            tables_found: tables.len(),
        }
    }

    fn row_to_contact(&self, row: &[String]) -> Option<ContactRecord> {
        let mut name = "";
        let mut phone = "";
        let mut email = "";

        for cell in row.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
            if cell.contains('@') && email.is_empty() {
                email = cell;
            } else if PHONE_CELL.is_match(cell) && phone.is_empty() {
                phone = cell;
            } else if name.is_empty() && cell.chars().count() > 1 {
                name = cell;
            }
        }

        if name.is_empty() || (phone.is_empty() && email.is_empty()) {
            return None;
        }

        // Present fields must be well-formed; a malformed cell drops the row.
        let email_ok = email.is_empty() || STRICT_EMAIL.is_match(email);
        let phone_ok = phone.is_empty() || digit_count(phone) >= MIN_PHONE_DIGITS;
        if !email_ok || !phone_ok {
            return None;
        }

        Some(ContactRecord::new(name, email, phone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> String {
        let mut html = String::from("<table>");
        for row in rows {
            html.push_str("<tr>");
            for cell in *row {
                html.push_str(&format!("<td><p>{}</p></td>", cell));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }

    #[test]
    fn test_header_row_is_skipped() {
        let html = table(&[
            &["Name", "Phone", "Email"],
            &["John Smith", "555-123-4567", "john@example.com"],
            &["Jane Doe", "555-987-6543", "jane@example.com"],
        ]);

        let result = TableContactExtractor::new().extract(&html);
        assert_eq!(result.tables_found, 1);
        assert_eq!(
            result.contacts,
            vec![
                ContactRecord::new("John Smith", "john@example.com", "555-123-4567"),
                ContactRecord::new("Jane Doe", "jane@example.com", "555-987-6543"),
            ]
        );
    }

    #[test]
    fn test_columns_identified_by_content() {
        let html = table(&[
            &["Email", "S/N", "Full name", "Mobile"],
            &["ada@example.com", "1", "Ada Obi", "+234 803 123 4567"],
        ]);

        let result = TableContactExtractor::new().extract(&html);
        assert_eq!(
            result.contacts,
            vec![ContactRecord::new("Ada Obi", "ada@example.com", "+234 803 123 4567")]
        );
    }

    #[test]
    fn test_malformed_email_skips_only_that_row() {
        let html = table(&[
            &["Name", "Email"],
            &["John Smith", "not-an-email@"],
            &["Jane Doe", "jane@example.com"],
        ]);

        let result = TableContactExtractor::new().extract(&html);
        assert_eq!(result.contacts.len(), 1);
        assert_eq!(result.contacts[0].name, "Jane Doe");
    }

    #[test]
    fn test_short_phone_skips_row() {
        let html = table(&[&["Name", "Phone"], &["John Smith", "555-1234"]]);
        // Too short to be read as a phone, so the row has no contact field.
        assert!(TableContactExtractor::new().extract(&html).contacts.is_empty());
    }

    #[test]
    fn test_name_only_row_skipped() {
        let html = table(&[&["Name"], &["John Smith"]]);
        assert!(TableContactExtractor::new().extract(&html).contacts.is_empty());
    }

    #[test]
    fn test_later_tables_have_no_header() {
        let first = table(&[&["Name", "Email"], &["Ada Obi", "ada@example.com"]]);
        let second = table(&[&["Bayo Ade", "bayo@example.com"]]);

        let result = TableContactExtractor::new().extract(&format!("{}{}", first, second));
        assert_eq!(result.tables_found, 2);
        assert_eq!(result.contacts.len(), 2);
        assert_eq!(result.contacts[1].name, "Bayo Ade");
    }

    #[test]
    fn test_no_markup() {
        let result = TableContactExtractor::new().extract("");
        assert!(result.contacts.is_empty());
        assert_eq!(result.tables_found, 0);
    }
}
