//! Encoded bcrypt hashes.
//!
//! Layout: `$2<v>$<cost:2 digits>$<salt:22><digest:31>`, 60 characters in
//! bcrypt's `./A-Za-z0-9` alphabet. Parsing checks structure only; whether
//! the version tag and cost are supported is left to verification.

use crate::error::{PasswordError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Length of an encoded bcrypt hash.
pub const ENCODED_LEN: usize = 60;

static RE_BCRYPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$2([a-z])\$(\d{2})\$([./A-Za-z0-9]{53})$").unwrap());

/// Opaque encoded password hash (version, cost, salt and digest).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordHash {
    encoded: String,
    version: char,
    cost: u32,
}

impl PasswordHash {
    /// Parse an encoded hash, failing with `InvalidHashFormat` when it is
    /// not shaped like a bcrypt hash.
    pub fn parse(encoded: &str) -> Result<Self> {
        if encoded.len() != ENCODED_LEN {
            return Err(PasswordError::InvalidHashFormat(format!(
                "expected {} characters, got {}",
                ENCODED_LEN,
                encoded.len()
            )));
        }

        let caps = RE_BCRYPT.captures(encoded).ok_or_else(|| {
            PasswordError::InvalidHashFormat("expected $2<v>$<cost>$<salt+digest>".to_string())
        })?;

        let version = caps[1]
            .chars()
            .next()
            .ok_or_else(|| PasswordError::InvalidHashFormat("missing version tag".to_string()))?;
        let cost = caps[2]
            .parse::<u32>()
            .map_err(|_| PasswordError::InvalidHashFormat("cost is not a number".to_string()))?;

        Ok(Self {
            encoded: encoded.to_string(),
            version,
            cost,
        })
    }

    /// Version letter after `$2` (`a`, `b`, `x` or `y` for supported hashes).
    pub fn version(&self) -> char {
        self.version
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// The 22-character salt.
    pub fn salt(&self) -> &str {
        &self.encoded[7..29]
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.encoded.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.encoded
    }

    /// Whether the version tag is one bcrypt implementations accept.
    pub fn is_supported_version(&self) -> bool {
        matches!(self.version, 'a' | 'b' | 'x' | 'y')
    }
}

impl std::str::FromStr for PasswordHash {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = PasswordError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<PasswordHash> for String {
    fn from(hash: PasswordHash) -> Self {
        hash.encoded
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

// Digest stays out of debug output.
impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("version", &format_args!("2{}", self.version))
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}
