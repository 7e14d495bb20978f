//! Salted password hashing for stored user credentials.
//!
//! Wraps bcrypt: every hash gets a fresh random salt, the cost factor is
//! configurable, and verification compares digests in constant time.
//! Hashes are one-way; there is no way back from a [`PasswordHash`] to the
//! password.
//!
//! # Example
//!
//! ```
//! use pd_password::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4).unwrap();
//! let hash = hasher.hash("MyAmazingPassw0rd").unwrap();
//! assert!(hasher.verify(&hash, "MyAmazingPassw0rd"));
//! assert!(!hasher.verify(&hash, "wrong"));
//! ```

pub mod error;
pub mod hash;
pub mod hasher;

pub use error::{PasswordError, Result};
pub use hash::{PasswordHash, ENCODED_LEN};
pub use hasher::{hash_password, is_valid, PasswordHasher, DEFAULT_COST, MAX_COST, MIN_COST};
