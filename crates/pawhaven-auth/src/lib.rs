// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication primitives for the Pawhaven marketplace.
//!
//! Password storage uses Argon2id via the `argon2` crate's PHC string API.
//! Bearer tokens are HMAC-SHA256-signed JSON claims; validity is signature
//! plus expiry only -- there is no session store and no revocation list.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenSigner};
