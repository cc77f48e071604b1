//! Selector tables: every candidate paired with its derived selector.

use errorsig_core::{CandidateSet, SelectorEntry};

use crate::selector::selector_of;

/// Derive the selector of every candidate, preserving order.
pub fn selector_table(candidates: &CandidateSet) -> Vec<SelectorEntry> {
    candidates
        .iter()
        .map(|signature| SelectorEntry {
            selector: selector_of(signature.as_str()),
            signature: signature.clone(),
        })
        .collect()
}
