//! Candidate sets — the ordered list of error signatures a resolver tries.
//!
//! A candidate file is JSON, either a bare array of signatures or an object
//! with an optional label:
//!
//! ```json
//! { "name": "yield-optimizer", "signatures": ["ZeroAmount()", "error Foo(address owner)"] }
//! ```
//!
//! Every entry goes through [`ErrorSignature::from_declaration`], so
//! human-readable declarations and canonical signatures can be mixed.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::CandidateError;
use crate::signature::ErrorSignature;

/// An ordered sequence of candidate error signatures.
///
/// Order is significant: resolution returns the first candidate whose
/// selector matches. Duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    signatures: Vec<ErrorSignature>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateFile {
    List(Vec<String>),
    Named {
        #[serde(default)]
        name: Option<String>,
        signatures: Vec<String>,
    },
}

impl CandidateSet {
    /// Create an empty, unlabelled set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with a label.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            signatures: Vec::new(),
        }
    }

    /// Build a set from already-canonical signatures.
    pub fn from_signatures(signatures: impl IntoIterator<Item = ErrorSignature>) -> Self {
        Self {
            name: None,
            signatures: signatures.into_iter().collect(),
        }
    }

    /// Build a set from declarations or signatures, canonicalising each.
    ///
    /// Fails on the first invalid entry, reporting its index.
    pub fn from_declarations<I, S>(declarations: I) -> Result<Self, CandidateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let signatures = declarations
            .into_iter()
            .enumerate()
            .map(|(index, decl)| {
                ErrorSignature::from_declaration(decl.as_ref())
                    .map_err(|source| CandidateError::InvalidEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_signatures(signatures))
    }

    /// Parse a candidate set from a JSON string.
    pub fn load_json(json: &str) -> Result<Self, CandidateError> {
        let (name, entries) = match serde_json::from_str::<CandidateFile>(json)? {
            CandidateFile::List(entries) => (None, entries),
            CandidateFile::Named { name, signatures } => (name, signatures),
        };
        let mut set = Self::from_declarations(entries)?;
        set.name = name;
        debug!(
            name = set.name().unwrap_or("<unnamed>"),
            count = set.len(),
            "loaded candidate set"
        );
        Ok(set)
    }

    /// Read and parse a candidate file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, CandidateError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CandidateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut set = Self::load_json(&json)?;
        if set.name.is_none() {
            set.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
        }
        Ok(set)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append a signature at the end of the set.
    pub fn push(&mut self, signature: ErrorSignature) {
        self.signatures.push(signature);
    }

    /// Append every signature of `other`, after the current ones.
    pub fn extend(&mut self, other: CandidateSet) {
        self.signatures.extend(other.signatures);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorSignature> {
        self.signatures.iter()
    }

    pub fn as_slice(&self) -> &[ErrorSignature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn contains(&self, signature: &ErrorSignature) -> bool {
        self.signatures.contains(signature)
    }
}

impl FromIterator<ErrorSignature> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = ErrorSignature>>(iter: T) -> Self {
        Self::from_signatures(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a ErrorSignature;
    type IntoIter = std::slice::Iter<'a, ErrorSignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.signatures.iter()
    }
}

impl AsRef<[ErrorSignature]> for CandidateSet {
    fn as_ref(&self) -> &[ErrorSignature] {
        &self.signatures
    }
}
