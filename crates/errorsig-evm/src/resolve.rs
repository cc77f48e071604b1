//! The resolution algorithm.
//!
//! 1. Normalise the target to a lowercase `0x`-prefixed 10-character string.
//!    Anything else is [`MatchResult::Malformed`].
//! 2. Hash each candidate in order and compare its selector to the target.
//!    The first hit wins; later candidates with the same selector are never
//!    looked at.
//! 3. No hit → [`MatchResult::Unknown`].

use errorsig_core::{resolve_target, ErrorSignature, MatchResult, Selector};
use tracing::debug;

use crate::selector::selector_of;

/// Resolve a selector string against `candidates`.
///
/// Never fails: malformed input is logged at `warn` and reported as
/// [`MatchResult::Malformed`].
pub fn resolve(target: &str, candidates: &[ErrorSignature]) -> MatchResult {
    resolve_target(target, |selector| resolve_selector(selector, candidates))
}

/// Resolve an already-parsed selector against `candidates`.
pub fn resolve_selector(selector: Selector, candidates: &[ErrorSignature]) -> MatchResult {
    for signature in candidates {
        if selector_of(signature.as_str()) == selector {
            debug!(%selector, %signature, "selector resolved");
            return MatchResult::Matched {
                selector,
                signature: signature.clone(),
            };
        }
    }
    debug!(%selector, tried = candidates.len(), "no candidate matched");
    MatchResult::Unknown { selector }
}
