//! Line-based contact strategies and the fallback chain that runs them.
//!
//! Strategies are tried in a fixed order and the first one that produces at
//! least one contact wins. Later strategies never see the document.

mod anchor_block;
mod builder;
mod chunk_split;
mod labeled;
mod sequential;

pub use anchor_block::AnchorBlockStrategy;
pub use builder::{BuildState, RecordBuilder};
pub use chunk_split::ChunkSplitStrategy;
pub use labeled::LabeledFieldStrategy;
pub use sequential::SequentialTripletStrategy;

use crate::contact_patterns::{PatternConfig, PatternLibrary};
use crate::document_text::split_lines;
use shared_types::{ContactRecord, ExtractionMethod};

/// One heuristic that turns document lines into contacts.
pub trait ContactStrategy: Send + Sync {
    fn method(&self) -> ExtractionMethod;

    /// `lines` is `text` after [`split_lines`]; strategies that need the raw
    /// layout read `text`.
    fn extract(&self, patterns: &PatternLibrary, text: &str, lines: &[&str]) -> Vec<ContactRecord>;
}

/// Priority-ordered list of strategies.
pub struct StrategyChain {
    strategies: Vec<Box<dyn ContactStrategy>>,
}

impl StrategyChain {
    pub fn new(strategies: Vec<Box<dyn ContactStrategy>>) -> Self {
        Self { strategies }
    }

    /// Anchor block, sequential triplet and chunk split, plus the labeled-field
    /// strategy when enabled.
    pub fn from_config(config: &PatternConfig) -> Self {
        let mut strategies: Vec<Box<dyn ContactStrategy>> = vec![
            Box::new(AnchorBlockStrategy::new(config.anchor_window)),
            Box::new(SequentialTripletStrategy::new(config.sequential_window)),
            Box::new(ChunkSplitStrategy::new(config.min_chunk_lines)),
        ];

        if config.labeled_fields {
            strategies.push(Box::new(LabeledFieldStrategy));
        }

        Self::new(strategies)
    }

    pub fn methods(&self) -> Vec<ExtractionMethod> {
        self.strategies.iter().map(|s| s.method()).collect()
    }

    /// Output of the first strategy that finds anything.
    pub fn run(
        &self,
        patterns: &PatternLibrary,
        text: &str,
    ) -> Option<(ExtractionMethod, Vec<ContactRecord>)> {
        let lines = split_lines(text);
        if lines.is_empty() {
            return None;
        }

        for strategy in &self.strategies {
            let contacts = strategy.extract(patterns, text, &lines);
            tracing::debug!(
                "{} strategy found {} contacts in {} lines",
                strategy.method().as_str(),
                contacts.len(),
                lines.len()
            );

            if !contacts.is_empty() {
                return Some((strategy.method(), contacts));
            }
        }

        None
    }
}
