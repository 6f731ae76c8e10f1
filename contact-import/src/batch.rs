use anyhow::{Context, Result};
use extractors::{dedup_contacts, ContactExtractor};
use shared_types::{ContactRecord, DocumentExtraction, DocumentInput};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Markup,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("html" | "htm" | "xhtml") => FileKind::Markup,
            _ => FileKind::Text,
        }
    }
}

/// Contacts from one run over several files, deduplicated across the batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub contacts: Vec<ContactRecord>,
    pub files_processed: usize,
    pub total_extracted: usize,
}

pub fn read_document(path: &Path) -> Result<DocumentInput> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let text =
        String::from_utf8(bytes).with_context(|| format!("{:?} is not valid UTF-8 text", path))?;

    Ok(match FileKind::from_path(path) {
        FileKind::Text => DocumentInput::Text(text),
        FileKind::Markup => DocumentInput::TableMarkup(text),
    })
}

/// Extracts every file on a blocking worker and merges the results in input
/// order. Files that cannot be read are skipped.
pub async fn extract_files(extractor: Arc<ContactExtractor>, paths: &[PathBuf]) -> Result<BatchOutcome> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            let extractor = extractor.clone();
            tokio::task::spawn_blocking(move || -> Result<DocumentExtraction> {
                let input = read_document(&path)?;
                Ok(extractor.extract_document(&input))
            })
        })
        .collect();

    let mut all_contacts = Vec::new();
    let mut files_processed = 0;

    for (path, handle) in paths.iter().zip(handles) {
        match handle.await.context("Extraction worker failed")? {
            Ok(result) => {
                tracing::info!(
                    "{:?}: {} contacts ({}, {} tables)",
                    path,
                    result.contacts.len(),
                    result.method.map(|m| m.as_str()).unwrap_or("no match"),
                    result.tables_found
                );
                files_processed += 1;
                all_contacts.extend(result.contacts);
            }
            Err(e) => tracing::warn!("Skipping {:?}: {:#}", path, e),
        }
    }

    let total_extracted = all_contacts.len();
    let contacts = dedup_contacts(all_contacts);
    tracing::info!(
        "Extracted {} contacts from {} files, {} after dedup",
        total_extracted,
        files_processed,
        contacts.len()
    );

    Ok(BatchOutcome {
        contacts,
        files_processed,
        total_extracted,
    })
}

/// Previously stored records, as a JSON array.
pub fn load_existing(path: &Path) -> Result<Vec<ContactRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read existing contacts at {:?}", path))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse existing contacts at {:?}", path))
}

/// Drops contacts sharing an email, phone or member id with a stored record.
pub fn drop_known(contacts: Vec<ContactRecord>, existing: &[ContactRecord]) -> Vec<ContactRecord> {
    let emails: HashSet<&str> = existing
        .iter()
        .map(|c| c.email.as_str())
        .filter(|e| !e.is_empty())
        .collect();
    let phones: HashSet<&str> = existing
        .iter()
        .map(|c| c.phone.as_str())
        .filter(|p| !p.is_empty())
        .collect();
    let member_ids: HashSet<&str> = existing
        .iter()
        .filter_map(|c| c.member_id.as_deref())
        .collect();

    let before = contacts.len();
    let fresh: Vec<ContactRecord> = contacts
        .into_iter()
        .filter(|c| {
            !emails.contains(c.email.as_str())
                && !phones.contains(c.phone.as_str())
                && !c.member_id.as_deref().is_some_and(|id| member_ids.contains(id))
        })
        .collect();

    tracing::info!("{} contacts already stored", before - fresh.len());
    fresh
}
