//! Core value types: selectors and resolution outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;
use crate::signature::ErrorSignature;

/// Name reported for a well-formed selector that matched no candidate.
pub const UNKNOWN_ERROR: &str = "unknown";

// ─── Selector ─────────────────────────────────────────────────────────────────

/// A 4-byte ABI error selector.
///
/// Always rendered as `0x` followed by 8 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Selector([u8; 4]);

impl Selector {
    /// Length of the canonical `0x`-prefixed rendering.
    pub const HEX_LEN: usize = 10;

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Parse a selector string.
    ///
    /// Surrounding whitespace is trimmed and a missing `0x` prefix is added
    /// (`0X` is accepted too). The normalised form must be exactly
    /// [`Selector::HEX_LEN`] characters of which the last 8 are hex digits.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let normalized = Self::normalize(input);
        let len = normalized.chars().count();
        if len != Self::HEX_LEN {
            return Err(SelectorError::InvalidLength { input: normalized, len });
        }
        let mut bytes = [0u8; 4];
        hex::decode_to_slice(&normalized[2..], &mut bytes)
            .map_err(|_| SelectorError::InvalidHex { input: normalized.clone() })?;
        Ok(Self(bytes))
    }

    /// Lowercase, `0x`-prefixed form of `input`. Performs no validation.
    pub fn normalize(input: &str) -> String {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        format!("0x{}", digits.to_lowercase())
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// The selector as a big-endian integer, e.g. `0x08c379a0`.
    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<String> for Selector {
    type Error = SelectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

// ─── SelectorEntry ────────────────────────────────────────────────────────────

/// A candidate signature paired with its derived selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorEntry {
    pub selector: Selector,
    pub signature: ErrorSignature,
}

impl fmt::Display for SelectorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.signature, self.selector)
    }
}

// ─── MatchResult ──────────────────────────────────────────────────────────────

/// The outcome of resolving one selector against a candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchResult {
    /// The first candidate whose derived selector equals the target.
    Matched {
        selector: Selector,
        signature: ErrorSignature,
    },

    /// Well-formed selector, but no candidate hashes to it.
    Unknown { selector: Selector },

    /// The input was not a 4-byte selector. Nothing was resolved.
    Malformed { input: String },
}

impl MatchResult {
    /// The normalised selector, `None` for malformed input.
    pub fn selector(&self) -> Option<Selector> {
        match self {
            Self::Matched { selector, .. } | Self::Unknown { selector } => Some(*selector),
            Self::Malformed { .. } => None,
        }
    }

    /// The matched signature, if any.
    pub fn signature(&self) -> Option<&ErrorSignature> {
        match self {
            Self::Matched { signature, .. } => Some(signature),
            _ => None,
        }
    }

    /// The resolved name: the signature, [`UNKNOWN_ERROR`], or `None` for
    /// malformed input.
    pub fn error_name(&self) -> Option<&str> {
        match self {
            Self::Matched { signature, .. } => Some(signature.as_str()),
            Self::Unknown { .. } => Some(UNKNOWN_ERROR),
            Self::Malformed { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched { selector, signature } => write!(f, "{selector}: {signature}"),
            Self::Unknown { selector } => write!(f, "{selector}: {UNKNOWN_ERROR}"),
            Self::Malformed { input } => write!(f, "'{input}' is not a 4-byte selector"),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
