//! Bundled well-known error signatures.
//!
//! Solidity's two builtin errors plus the custom errors OpenZeppelin
//! Contracts v5 reverts with. Project-specific errors come from candidate
//! files; these are prepended so common library reverts resolve too.

use errorsig_core::{CandidateSet, ErrorSignature};

/// The 4-byte selector for `Error(string)`.
pub const ERROR_STRING_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];

/// The 4-byte selector for `Panic(uint256)`.
pub const PANIC_SELECTOR: [u8; 4] = [0x4e, 0x48, 0x7b, 0x71];

const STANDARD: &[(&str, Option<&str>)] = &[
    // ─── Solidity builtins ────────────────────────────────────────────────
    ("Error(string)", Some("require()/revert() with a reason string.")),
    ("Panic(uint256)", Some("Solidity assert violation or arithmetic/array fault.")),

    // ─── OpenZeppelin Ownable ─────────────────────────────────────────────
    ("OwnableUnauthorizedAccount(address)",
     Some("Only the owner can call this function. Ensure you are using the owner address.")),
    ("OwnableInvalidOwner(address)", None),

    // ─── OpenZeppelin Access Control ──────────────────────────────────────
    ("AccessControlUnauthorizedAccount(address,bytes32)",
     Some("The caller is missing the required role. Grant the role with grantRole().")),
    ("AccessControlBadConfirmation()", None),

    // ─── OpenZeppelin ReentrancyGuard / Pausable ──────────────────────────
    ("ReentrancyGuardReentrantCall()",
     Some("Reentrancy detected. Do not call this function recursively.")),
    ("EnforcedPause()", Some("The contract is paused. Wait for it to be unpaused.")),
    ("ExpectedPause()", None),

    // ─── ERC-20 ───────────────────────────────────────────────────────────
    ("ERC20InsufficientBalance(address,uint256,uint256)",
     Some("The sender does not have enough token balance for this transfer.")),
    ("ERC20InsufficientAllowance(address,uint256,uint256)",
     Some("Increase the token allowance before calling transferFrom.")),
    ("ERC20InvalidSender(address)", None),
    ("ERC20InvalidReceiver(address)", None),
    ("ERC20InvalidApprover(address)", None),
    ("ERC20InvalidSpender(address)", None),

    // ─── Address / SafeERC20 ──────────────────────────────────────────────
    ("SafeERC20FailedOperation(address)",
     Some("The ERC-20 token operation failed. Ensure the token is compliant.")),
    ("AddressEmptyCode(address)", Some("The target address has no contract code deployed.")),
    ("FailedInnerCall()", None),
];

/// The bundled standard candidate set, labelled `"standard"`.
pub fn standard_errors() -> CandidateSet {
    let mut set = CandidateSet::named("standard");
    for (sig, _) in STANDARD {
        set.push(ErrorSignature::new(sig).expect("bundled signature is canonical"));
    }
    set
}

/// A short fix-it hint for a bundled signature, if one is known.
pub fn suggestion_for(signature: &ErrorSignature) -> Option<&'static str> {
    STANDARD
        .iter()
        .find(|(sig, _)| *sig == signature.as_str())
        .and_then(|(_, hint)| *hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::selector_of;

    #[test]
    fn every_entry_is_canonical() {
        assert_eq!(standard_errors().len(), STANDARD.len());
        for sig in &standard_errors() {
            let canonical = ErrorSignature::from_declaration(sig.as_str()).unwrap();
            assert_eq!(&canonical, sig);
        }
    }

    #[test]
    fn builtin_selector_constants() {
        assert_eq!(selector_of("Error(string)").as_bytes(), &ERROR_STRING_SELECTOR);
        assert_eq!(selector_of("Panic(uint256)").as_bytes(), &PANIC_SELECTOR);
    }

    #[test]
    fn standard_set_is_labelled_and_ordered() {
        let set = standard_errors();
        assert_eq!(set.name(), Some("standard"));
        assert_eq!(set.as_slice()[0].as_str(), "Error(string)");
        assert_eq!(set.as_slice()[1].as_str(), "Panic(uint256)");
    }

    #[test]
    fn suggestions() {
        let owner = ErrorSignature::new("OwnableUnauthorizedAccount(address)").unwrap();
        assert!(suggestion_for(&owner).unwrap().contains("owner"));
        let no_hint = ErrorSignature::new("ExpectedPause()").unwrap();
        assert_eq!(suggestion_for(&no_hint), None);
        let foreign = ErrorSignature::new("ZeroAmount()").unwrap();
        assert_eq!(suggestion_for(&foreign), None);
    }
}
