//! Extractors Crate
//!
//! Contact extraction from the plain text and table markup of converted
//! membership directories and contact lists.
//!
//! # Architecture
//!
//! - **Types**: `ContactRecord`, the `Extractor` trait and errors live in the `shared-types` crate
//! - **Patterns**: `contact_patterns` compiles the field shapes once into a shared `PatternLibrary`
//! - **Strategies**: `contact_text` holds the line heuristics and the fallback chain
//! - **Tables**: `docx_table` reads contacts row by row from table markup
//! - **Cleanup**: `cleanup` formats names and removes duplicates
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{extract_from_text, ContactExtractor, PatternConfig};
//!
//! let contacts = extract_from_text("FL00123\nJOHN SMITH\njohn@example.com");
//!
//! let extractor = ContactExtractor::new(PatternConfig::default())?;
//! let result = extractor.extract_text(&text);
//! ```

pub mod cleanup;
pub mod contact_patterns;
pub mod contact_text;
pub mod document_text;
pub mod docx_table;
pub mod engine;

// Re-export commonly used types
pub use cleanup::{dedup_contacts, finalize_contacts, format_name};
pub use contact_patterns::{PatternConfig, PatternLibrary, PhoneShape};
pub use contact_text::{ContactStrategy, StrategyChain};
pub use docx_table::TableContactExtractor;
pub use engine::{extract_document, extract_from_table_markup, extract_from_text, ContactExtractor};

// Re-export the Extractor trait from shared-types for convenience
pub use shared_types::Extractor;
