//! The `SelectorResolver` trait, implemented by the hashing crate.

use crate::candidates::CandidateSet;
use crate::types::{MatchResult, Selector};

/// Parse `target` and hand the selector to `lookup`.
///
/// A target that is not a 4-byte selector is logged at `warn` and comes back
/// as [`MatchResult::Malformed`] holding the normalised input.
pub fn resolve_target(target: &str, lookup: impl FnOnce(Selector) -> MatchResult) -> MatchResult {
    match Selector::parse(target) {
        Ok(selector) => lookup(selector),
        Err(e) => {
            tracing::warn!("{e}");
            MatchResult::Malformed {
                input: Selector::normalize(target),
            }
        }
    }
}

/// Resolves 4-byte error selectors against a fixed candidate set.
///
/// Implementations must be `Send + Sync` so one resolver can serve
/// parallel batch lookups.
pub trait SelectorResolver: Send + Sync {
    /// Name of the hash primitive used to derive selectors (e.g. `"keccak256"`).
    fn hash_primitive(&self) -> &'static str;

    /// The candidates tried, in order.
    fn candidates(&self) -> &CandidateSet;

    /// Resolve an already-parsed selector. Never returns
    /// [`MatchResult::Malformed`].
    fn resolve_selector(&self, selector: Selector) -> MatchResult;

    /// Resolve a selector string (with or without `0x` prefix).
    ///
    /// Malformed input is not an error: it comes back as
    /// [`MatchResult::Malformed`].
    fn resolve(&self, target: &str) -> MatchResult {
        resolve_target(target, |selector| self.resolve_selector(selector))
    }

    /// Resolve several targets sequentially, preserving order.
    fn resolve_all(&self, targets: &[&str]) -> Vec<MatchResult> {
        targets.iter().map(|t| self.resolve(t)).collect()
    }
}
