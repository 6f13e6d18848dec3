//! Access token generation for corkboard.
//!
//! Tokens are opaque bearer credentials: possession of the string is the
//! sole proof of identity. There is no expiry or rotation.

use rand_core::{OsRng, RngCore};

/// Number of random bytes in a token (256 bits of entropy).
const TOKEN_BYTES: usize = 32;

/// Length of the hex-encoded token string.
pub const TOKEN_LENGTH: usize = TOKEN_BYTES * 2;

/// Issue a new access token.
///
/// Returns a hex-encoded string of cryptographically random bytes.
/// Collision-resistant in practice; the credential store still enforces
/// uniqueness as a hard invariant.
pub fn issue_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
