//! `errorsig resolve` — resolve selectors against the candidate set.

use anyhow::Result;
use errorsig_core::{CandidateSet, MatchResult, SelectorResolver};
use errorsig_evm::{resolve_many, suggestion_for, KeccakResolver};

pub fn run(selectors: &[String], candidates: CandidateSet, json: bool) -> Result<()> {
    let resolver = KeccakResolver::new(candidates);
    tracing::debug!(
        candidates = resolver.candidates().len(),
        primitive = resolver.hash_primitive(),
        "resolving {} selector(s)",
        selectors.len()
    );

    let results = resolve_many(&resolver, selectors);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_result(result);
    }
    Ok(())
}

fn print_result(result: &MatchResult) {
    match result {
        MatchResult::Matched { selector, signature } => {
            println!("Decoded Selector: {selector}");
            println!("Corresponding Error: {signature}");
            if let Some(hint) = suggestion_for(signature) {
                println!("  Hint: {hint}");
            }
        }
        MatchResult::Unknown { selector } => {
            println!("Selector: {selector} - unknown");
        }
        MatchResult::Malformed { input } => {
            println!("Revert data '{input}' is not a 4-byte selector");
        }
    }
}
