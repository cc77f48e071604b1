//! `errorsig hash` — canonicalise a signature and show its keccak256 digest.

use anyhow::{Context, Result};
use errorsig_core::ErrorSignature;
use errorsig_evm::{keccak256, selector_of};
use serde::Serialize;

#[derive(Serialize)]
struct HashOutput {
    signature: String,
    keccak256: String,
    selector: String,
}

pub fn run(input: &str, json: bool) -> Result<()> {
    let signature = ErrorSignature::from_declaration(input)
        .with_context(|| format!("'{input}' is not an error signature"))?;

    let out = HashOutput {
        keccak256: format!("0x{}", hex::encode(keccak256(signature.as_str().as_bytes()))),
        selector: selector_of(signature.as_str()).to_string(),
        signature: signature.into_string(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Signature: {}", out.signature);
        println!("keccak256: {}", out.keccak256);
        println!("Selector:  {}", out.selector);
    }
    Ok(())
}
