use serde::{Deserialize, Serialize};

/// One row of the filename-to-product-code table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Current file name inside the image directory
    pub file: String,
    /// Product code the image belongs to
    pub code: String,
}

impl MappingEntry {
    pub fn new(file: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            code: code.into(),
        }
    }
}

/// What happened to a single mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { old: String, new: String },
    WouldRename { old: String, new: String },
    NotFound { old: String },
}

/// Outcome counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub would_rename: usize,
    pub not_found: usize,
}

impl RenameSummary {
    pub fn from_outcomes(outcomes: &[RenameOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                RenameOutcome::Renamed { .. } => summary.renamed += 1,
                RenameOutcome::WouldRename { .. } => summary.would_rename += 1,
                RenameOutcome::NotFound { .. } => summary.not_found += 1,
            }
        }
        summary
    }
}
