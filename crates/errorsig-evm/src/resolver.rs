//! `KeccakResolver`: a `SelectorResolver` over an owned candidate set.

use errorsig_core::{CandidateSet, MatchResult, Selector, SelectorResolver};

use crate::resolve::resolve_selector;
use crate::selector::HASH_PRIMITIVE;
use crate::standard::standard_errors;

/// Resolver that derives selectors with keccak256.
///
/// # Usage
/// ```rust
/// use errorsig_core::{CandidateSet, SelectorResolver};
/// use errorsig_evm::KeccakResolver;
///
/// let project = CandidateSet::from_declarations(["error ZeroAmount()"]).unwrap();
/// let resolver = KeccakResolver::with_standard_errors(project);
/// assert_eq!(resolver.resolve("0x08c379a0").error_name(), Some("Error(string)"));
/// assert_eq!(resolver.resolve("0x1f2a2005").error_name(), Some("ZeroAmount()"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeccakResolver {
    candidates: CandidateSet,
}

impl KeccakResolver {
    /// Create a resolver over exactly `candidates`.
    pub fn new(candidates: CandidateSet) -> Self {
        Self { candidates }
    }

    /// Create a resolver over the bundled standard errors followed by
    /// `project`. Standard errors therefore win any selector tie.
    pub fn with_standard_errors(project: CandidateSet) -> Self {
        let mut candidates = standard_errors();
        candidates.extend(project);
        Self { candidates }
    }
}

impl SelectorResolver for KeccakResolver {
    fn hash_primitive(&self) -> &'static str {
        HASH_PRIMITIVE
    }

    fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    fn resolve_selector(&self, selector: Selector) -> MatchResult {
        resolve_selector(selector, self.candidates.as_slice())
    }
}
