//! Salted adaptive password hashing.

use crate::error::{PasswordError, Result};
use crate::hash::PasswordHash;

/// Lowest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Cost used when none is configured.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// bcrypt hasher with a fixed cost factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher using the default cost.
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Hasher with an explicit cost in `MIN_COST..=MAX_COST`.
    pub fn with_cost(cost: u32) -> Result<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `password` with a fresh random salt.
    ///
    /// No length checks are done here; bcrypt only reads the first 72 bytes.
    pub fn hash(&self, password: &str) -> Result<PasswordHash> {
        let encoded = bcrypt::hash(password, self.cost)?;
        PasswordHash::parse(&encoded)
            .map_err(|e| PasswordError::Hashing(format!("bcrypt produced an unparseable hash: {}", e)))
    }

    /// Check `password` against `hash` in constant time.
    ///
    /// Returns `false` for a wrong password and for hashes bcrypt rejects
    /// (unknown version tag, unsupported cost, bad salt encoding).
    pub fn verify(&self, hash: &PasswordHash, password: &str) -> bool {
        match bcrypt::verify(password, hash.as_str()) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!(
                    version = %hash.version(),
                    cost = hash.cost(),
                    error = %e,
                    "bcrypt rejected stored hash"
                );
                false
            }
        }
    }

    /// Parse `encoded` and verify `password` against it.
    ///
    /// Fails with `InvalidHashFormat` only when `encoded` is not a
    /// structurally valid hash.
    pub fn verify_encoded(&self, encoded: &str, password: &str) -> Result<bool> {
        let hash = PasswordHash::parse(encoded)?;
        Ok(self.verify(&hash, password))
    }

    /// Whether `hash` was produced with a lower cost than this hasher uses.
    pub fn needs_rehash(&self, hash: &PasswordHash) -> bool {
        hash.cost() < self.cost
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash `password` with the default cost.
pub fn hash_password(password: &str) -> Result<PasswordHash> {
    PasswordHasher::new().hash(password)
}

/// Check `password` against an encoded hash.
pub fn is_valid(hashed_password: &str, password: &str) -> Result<bool> {
    PasswordHasher::new().verify_encoded(hashed_password, password)
}
