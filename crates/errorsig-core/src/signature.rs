//! Canonical Solidity error signatures.
//!
//! The selector of an error is derived from its canonical signature: the
//! error name followed by the comma-separated parameter types, with no
//! parameter names and no whitespace, e.g. `OwnableInvalidOwner(address)`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SignatureError;

/// A canonical error signature such as `"ZeroAmount()"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ErrorSignature(String);

impl ErrorSignature {
    /// Wrap an already-canonical signature.
    ///
    /// Surrounding whitespace is removed. Anything else that
    /// [`ErrorSignature::from_declaration`] would rewrite (parameter names,
    /// inner whitespace, `uint` aliases, the `error` keyword) is rejected
    /// with [`SignatureError::NotCanonical`].
    pub fn new(signature: impl AsRef<str>) -> Result<Self, SignatureError> {
        let trimmed = signature.as_ref().trim();
        let canonical = Self::from_declaration(trimmed)?;
        if canonical.0 != trimmed {
            return Err(SignatureError::NotCanonical {
                input: trimmed.to_string(),
                canonical: canonical.0,
            });
        }
        Ok(canonical)
    }

    /// Canonicalise a human-readable declaration.
    ///
    /// Accepts forms like `error OwnableUnauthorizedAccount(address owner);`
    /// and produces `OwnableUnauthorizedAccount(address)`. Parameter names,
    /// data-location keywords and whitespace are dropped, `uint`/`int` are
    /// widened to their 256-bit forms and tuple parameters are handled
    /// recursively. Canonical input comes back unchanged.
    pub fn from_declaration(declaration: &str) -> Result<Self, SignatureError> {
        let mut decl = declaration.trim();
        decl = decl.strip_suffix(';').unwrap_or(decl).trim_end();
        if let Some(rest) = decl.strip_prefix("error") {
            if rest.starts_with(char::is_whitespace) {
                decl = rest.trim_start();
            }
        }

        let (name, inner) = split_declaration(decl)?;
        let params = canonical_params(inner, decl)?;
        Ok(Self(format!("{name}({params})")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The error name, e.g. `"OwnableInvalidOwner"`.
    pub fn name(&self) -> &str {
        self.0.split('(').next().unwrap_or(&self.0)
    }

    /// Returns `true` if the error declares at least one parameter.
    pub fn has_inputs(&self) -> bool {
        !self.0.ends_with("()")
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ErrorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ErrorSignature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ErrorSignature {
    type Error = SignatureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ErrorSignature {
    type Error = SignatureError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ErrorSignature> for String {
    fn from(sig: ErrorSignature) -> Self {
        sig.0
    }
}

// ─── Parsing helpers ──────────────────────────────────────────────────────────

/// Split `Name(inner)` into `("Name", "inner")`.
fn split_declaration(decl: &str) -> Result<(&str, &str), SignatureError> {
    if decl.is_empty() {
        return Err(SignatureError::Empty);
    }
    let open = decl
        .find('(')
        .ok_or_else(|| SignatureError::MissingParens { input: decl.to_string() })?;
    if !decl.ends_with(')') {
        return Err(SignatureError::Unbalanced { input: decl.to_string() });
    }

    let name = decl[..open].trim_end();
    if !is_identifier(name) {
        return Err(SignatureError::InvalidName { input: decl.to_string() });
    }
    Ok((name, &decl[open + 1..decl.len() - 1]))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Split a parameter list at commas that are not nested inside a tuple.
/// An all-whitespace list yields no parameters.
fn split_top_level<'a>(inner: &'a str, decl: &str) -> Result<Vec<&'a str>, SignatureError> {
    let unbalanced = || SignatureError::Unbalanced { input: decl.to_string() };

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    parts.push(&inner[start..]);

    if parts.len() == 1 && parts[0].trim().is_empty() {
        return Ok(Vec::new());
    }
    if parts.iter().any(|p| p.trim().is_empty()) {
        return Err(SignatureError::EmptyParameter { input: decl.to_string() });
    }
    Ok(parts)
}

fn canonical_params(inner: &str, decl: &str) -> Result<String, SignatureError> {
    let params = split_top_level(inner, decl)?
        .into_iter()
        .map(|p| canonical_param(p.trim(), decl))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(params.join(","))
}

/// Canonical type of a single parameter, dropping its name and modifiers.
fn canonical_param(param: &str, decl: &str) -> Result<String, SignatureError> {
    let param = match param.strip_prefix("tuple") {
        Some(rest) if rest.trim_start().starts_with('(') => rest.trim_start(),
        _ => param,
    };

    if param.starts_with('(') {
        let close = matching_paren(param)
            .ok_or_else(|| SignatureError::Unbalanced { input: decl.to_string() })?;
        let components = canonical_params(&param[1..close], decl)?;
        let suffix = array_suffix(&param[close + 1..]);
        return Ok(format!("({components}){suffix}"));
    }

    let token = param.split_whitespace().next().unwrap_or(param);
    let (base, suffix) = match token.find('[') {
        Some(i) => token.split_at(i),
        None => (token, ""),
    };
    let base = match base {
        "uint" => "uint256",
        "int" => "int256",
        "byte" => "bytes1",
        other => other,
    };
    Ok(format!("{base}{suffix}"))
}

/// Index of the `)` closing the `(` at position 0.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Leading `[..]` groups of a tuple's trailing text, e.g. `"[] memory x"` → `"[]"`.
fn array_suffix(rest: &str) -> &str {
    let rest = rest.trim_start();
    let mut end = 0;
    while rest[end..].starts_with('[') {
        match rest[end..].find(']') {
            Some(close) => end += close + 1,
            None => break,
        }
    }
    &rest[..end]
}

// ─── Tests ────────────────────────────────────────────────────────────────────
