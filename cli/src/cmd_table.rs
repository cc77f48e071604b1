//! `errorsig table` — list every candidate with its selector.

use anyhow::Result;
use errorsig_core::CandidateSet;
use errorsig_evm::selector_table;

pub fn run(candidates: &CandidateSet, json: bool) -> Result<()> {
    let table = selector_table(candidates);

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("--- Error Selectors ({}) ---", table.len());
    for entry in &table {
        println!("{entry}");
    }
    Ok(())
}
