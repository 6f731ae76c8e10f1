use crate::batch::BatchOutcome;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::ContactRecord;
use std::io::Write;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub contacts: Vec<ContactRecord>,
    pub files_processed: usize,
    pub total_extracted: usize,
    pub total_unique: usize,
    pub extracted_at: DateTime<Utc>,
}

impl ImportReport {
    /// Final report; empty names are replaced with `unknown_name`.
    pub fn new(outcome: BatchOutcome, unknown_name: &str) -> Self {
        let contacts: Vec<ContactRecord> = outcome
            .contacts
            .into_iter()
            .map(|contact| ContactRecord {
                name: contact.display_name(unknown_name).to_string(),
                ..contact
            })
            .collect();

        Self {
            total_unique: contacts.len(),
            contacts,
            files_processed: outcome.files_processed,
            total_extracted: outcome.total_extracted,
            extracted_at: Utc::now(),
        }
    }
}

pub fn write_json<W: Write>(mut writer: W, report: &ImportReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_csv<W: Write>(writer: W, report: &ImportReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["name", "email", "phone", "member_id"])?;

    for contact in &report.contacts {
        csv_writer.write_record([
            contact.name.as_str(),
            contact.email.as_str(),
            contact.phone.as_str(),
            contact.member_id.as_deref().unwrap_or(""),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ImportReport {
        ImportReport::new(
            BatchOutcome {
                contacts: vec![
                    ContactRecord::new("Ada Obi", "ada@example.com", "").with_member_id("FL00001"),
                    ContactRecord::new("", "sarah@example.com", "555-333-4444"),
                ],
                files_processed: 2,
                total_extracted: 3,
            },
            "Unknown",
        )
    }

    #[test]
    fn test_unknown_name_applied() {
        let report = report();
        assert_eq!(report.contacts[1].name, "Unknown");
        assert_eq!(report.contacts[0].name, "Ada Obi");
        assert_eq!(report.total_unique, 2);
    }

    #[test]
    fn test_json_report_fields() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &report()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json["filesProcessed"], 2);
        assert_eq!(json["totalExtracted"], 3);
        assert_eq!(json["totalUnique"], 2);
        assert_eq!(json["contacts"][0]["memberId"], "FL00001");
        assert!(json["contacts"][1].get("memberId").is_none());
        assert!(json["extractedAt"].is_string());
    }

    #[test]
    fn test_csv_rows() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &report()).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "name,email,phone,member_id\n\
             Ada Obi,ada@example.com,,FL00001\n\
             Unknown,sarah@example.com,555-333-4444,\n"
        );
    }
}
