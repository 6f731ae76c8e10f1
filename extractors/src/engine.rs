use crate::cleanup::finalize_contacts;
use crate::contact_patterns::{PatternConfig, PatternLibrary};
use crate::contact_text::StrategyChain;
use crate::docx_table::TableContactExtractor;
use crate::document_text::strip_markup;
use shared_types::{
    ContactRecord, DocumentExtraction, DocumentInput, ExtractionError, ExtractionMethod, Extractor,
};
use std::sync::LazyLock;

static DEFAULT_EXTRACTOR: LazyLock<ContactExtractor> =
    LazyLock::new(ContactExtractor::with_defaults);

/// Contact extraction engine: strategy chain, table path and cleanup over one
/// immutable pattern library.
///
/// Holds no per-call state; share one instance across threads.
pub struct ContactExtractor {
    patterns: PatternLibrary,
    chain: StrategyChain,
    tables: TableContactExtractor,
}

impl ContactExtractor {
    pub fn new(config: PatternConfig) -> Result<Self, ExtractionError> {
        let chain = StrategyChain::from_config(&config);
        let patterns = PatternLibrary::new(config)?;

        Ok(Self {
            patterns,
            chain,
            tables: TableContactExtractor::new(),
        })
    }

    pub fn with_defaults() -> Self {
        let patterns = PatternLibrary::default();
        Self {
            chain: StrategyChain::from_config(patterns.config()),
            patterns,
            tables: TableContactExtractor::new(),
        }
    }

    /// Plain text through the strategy chain.
    pub fn extract_text(&self, text: &str) -> DocumentExtraction {
        match self.chain.run(&self.patterns, text) {
            Some((method, contacts)) => DocumentExtraction {
                contacts: finalize_contacts(contacts),
                method: Some(method),
                tables_found: 0,
            },
            None => DocumentExtraction::default(),
        }
    }

    /// Table rows only; no fallback to the text strategies.
    pub fn extract_table_markup(&self, markup: &str) -> DocumentExtraction {
        let found = self.tables.extract(markup);
        let contacts = finalize_contacts(found.contacts);
        let method = (!contacts.is_empty()).then_some(ExtractionMethod::TableMarkup);

        DocumentExtraction {
            contacts,
            method,
            tables_found: found.tables_found,
        }
    }

    /// Tables first for markup, then the markup's plain text when no table
    /// row qualifies.
    pub fn extract_document(&self, input: &DocumentInput) -> DocumentExtraction {
        match input {
            DocumentInput::Text(text) => self.extract_text(text),
            DocumentInput::TableMarkup(markup) => {
                let from_tables = self.extract_table_markup(markup);
                if !from_tables.is_empty() {
                    return from_tables;
                }

                tracing::debug!(
                    "No contacts in {} tables, falling back to markup text",
                    from_tables.tables_found
                );
                DocumentExtraction {
                    tables_found: from_tables.tables_found,
                    ..self.extract_text(&strip_markup(markup))
                }
            }
        }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Extractor for ContactExtractor {
    fn extract(&self, input: &DocumentInput) -> Result<DocumentExtraction, ExtractionError> {
        Ok(self.extract_document(input))
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Contacts in plain text, using the default patterns.
pub fn extract_from_text(text: &str) -> Vec<ContactRecord> {
    DEFAULT_EXTRACTOR.extract_text(text).contacts
}

/// Contacts in table markup, using the default patterns.
pub fn extract_from_table_markup(markup: &str) -> Vec<ContactRecord> {
    DEFAULT_EXTRACTOR.extract_table_markup(markup).contacts
}

/// [`ContactExtractor::extract_document`] with the default patterns.
pub fn extract_document(input: &DocumentInput) -> DocumentExtraction {
    DEFAULT_EXTRACTOR.extract_document(input)
}
