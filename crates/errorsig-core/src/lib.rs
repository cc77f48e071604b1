//! errorsig-core — foundation types and traits for the errorsig library.
//!
//! This crate defines:
//! - [`Selector`] — a 4-byte error selector and its `0x…` rendering
//! - [`ErrorSignature`] — a canonical Solidity error signature
//! - [`CandidateSet`] — the ordered list of signatures to try
//! - [`MatchResult`] — the outcome of a resolution
//! - [`SelectorResolver`] — the resolver trait implemented by `errorsig-evm`

pub mod candidates;
pub mod error;
pub mod resolver;
pub mod signature;
pub mod types;

pub use candidates::CandidateSet;
pub use error::{CandidateError, SelectorError, SignatureError};
pub use resolver::{resolve_target, SelectorResolver};
pub use signature::ErrorSignature;
pub use types::{MatchResult, Selector, SelectorEntry};
