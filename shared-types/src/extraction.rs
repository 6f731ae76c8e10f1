use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ContactRecord;

/// Core trait that all contact extractors implement
pub trait Extractor {
    /// Extract contacts from a converted document
    fn extract(&self, input: &DocumentInput) -> Result<DocumentExtraction, ExtractionError>;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Which heuristic produced a set of contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    AnchorBlock,
    SequentialTriplet,
    ChunkSplit,
    LabeledField,
    TableMarkup,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::AnchorBlock => "anchor-block",
            ExtractionMethod::SequentialTriplet => "sequential-triplet",
            ExtractionMethod::ChunkSplit => "chunk-split",
            ExtractionMethod::LabeledField => "labeled-field",
            ExtractionMethod::TableMarkup => "table-markup",
        }
    }
}

/// Output of the document converter, as handed to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum DocumentInput {
    /// Plain text (text files, PDF text, word-processor text)
    Text(String),
    /// Row/column markup such as converted word-processor HTML
    TableMarkup(String),
}

/// Contacts found in one document plus how they were found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentExtraction {
    pub contacts: Vec<ContactRecord>,
    /// `None` when nothing was found
    pub method: Option<ExtractionMethod>,
    /// Number of `<table>` blocks seen; always 0 for plain text
    pub tables_found: usize,
}

impl DocumentExtraction {
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
