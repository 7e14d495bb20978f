//! Sensitive field specifications.

use crate::error::{RedactionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Personally-identifiable fields redacted from `user_data` log lines.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

static RE_FIELD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap());

/// Ordered, immutable list of field names considered sensitive.
///
/// Order does not change which fields get redacted, but it is kept stable so
/// that sequential redaction passes are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FieldSpec {
    fields: Vec<String>,
}

impl FieldSpec {
    /// Build a spec from field names, rejecting names the tokenizer can never match.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Vec::new();
        for field in fields {
            let field = field.into();
            if !is_valid_field_name(&field) {
                return Err(RedactionError::InvalidField(field));
            }
            out.push(field);
        }
        Ok(Self { fields: out })
    }

    /// The fixed PII field list.
    pub fn pii() -> Self {
        Self {
            fields: PII_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Empty spec; redaction with it is the identity.
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::pii()
    }
}

impl TryFrom<Vec<String>> for FieldSpec {
    type Error = RedactionError;

    fn try_from(fields: Vec<String>) -> Result<Self> {
        Self::new(fields)
    }
}

impl From<FieldSpec> for Vec<String> {
    fn from(spec: FieldSpec) -> Self {
        spec.fields
    }
}

fn is_valid_field_name(name: &str) -> bool {
    RE_FIELD_NAME.is_match(name)
}
