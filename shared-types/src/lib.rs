pub mod contact;
pub mod extraction;

pub use contact::{ContactRecord, UNKNOWN_NAME};

// Re-export extraction types
pub use extraction::*;
