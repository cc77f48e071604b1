//! errorsig-evm — resolve Solidity custom error selectors with keccak256.
//!
//! # Quick Start
//!
//! ```rust
//! use errorsig_core::{CandidateSet, SelectorResolver};
//! use errorsig_evm::KeccakResolver;
//!
//! let candidates = CandidateSet::from_declarations(["ZeroAmount()", "InsufficientFee()"]).unwrap();
//! let resolver = KeccakResolver::new(candidates);
//! let result = resolver.resolve("0x025dbdd4");
//! assert_eq!(result.error_name(), Some("InsufficientFee()"));
//! ```

pub mod batch;
pub mod resolve;
pub mod resolver;
pub mod selector;
pub mod standard;
pub mod table;

pub use batch::resolve_many;
pub use resolve::{resolve, resolve_selector};
pub use resolver::KeccakResolver;
pub use selector::{keccak256, selector_of, HASH_PRIMITIVE};
pub use standard::{standard_errors, suggestion_for, ERROR_STRING_SELECTOR, PANIC_SELECTOR};
pub use table::selector_table;
