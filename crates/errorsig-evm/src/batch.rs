//! Rayon-powered batch resolution.
//!
//! Each lookup is a pure function of the target and the candidate set, so
//! targets are resolved independently on the global pool.

use errorsig_core::{MatchResult, SelectorResolver};
use rayon::prelude::*;
use tracing::info;

/// Resolve `targets` in parallel. `results[i]` belongs to `targets[i]`.
pub fn resolve_many<R, S>(resolver: &R, targets: &[S]) -> Vec<MatchResult>
where
    R: SelectorResolver + ?Sized,
    S: AsRef<str> + Sync,
{
    let results: Vec<MatchResult> = targets
        .par_iter()
        .map(|target| resolver.resolve(target.as_ref()))
        .collect();

    info!(
        total = results.len(),
        matched = results.iter().filter(|r| r.is_match()).count(),
        malformed = results.iter().filter(|r| r.is_malformed()).count(),
        "batch resolution complete"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::KeccakResolver;
    use crate::selector::selector_of;
    use errorsig_core::CandidateSet;

    #[test]
    fn batch_matches_sequential() {
        let candidates: Vec<String> = (0..64).map(|i| format!("Custom{i}()")).collect();
        let resolver = KeccakResolver::new(CandidateSet::from_declarations(&candidates).unwrap());

        let mut targets: Vec<String> = candidates
            .iter()
            .rev()
            .map(|c| selector_of(c).to_string())
            .collect();
        targets.push("0xdeadbeef".into());
        targets.push("nope".into());

        let parallel = resolve_many(&resolver, &targets);
        let refs: Vec<&str> = targets.iter().map(String::as_str).collect();
        let sequential = resolver.resolve_all(&refs);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel[0].error_name(), Some("Custom63()"));
        assert!(parallel[targets.len() - 1].is_malformed());
    }

    #[test]
    fn batch_through_trait_object() {
        let resolver: Box<dyn SelectorResolver> =
            Box::new(KeccakResolver::with_standard_errors(CandidateSet::new()));
        let results = resolve_many(&*resolver, &["0x08c379a0"]);
        assert_eq!(results[0].error_name(), Some("Error(string)"));
    }
}
