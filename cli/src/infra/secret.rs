//! Secret generation — implements `SecretGenerator` with the thread-local RNG.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::application::ports::SecretGenerator;

/// Bytes of entropy per generated secret.
pub const SECRET_KEY_BYTES: usize = 32;

/// Produces URL-safe base64 tokens (no padding) of [`SECRET_KEY_BYTES`]
/// random bytes, i.e. 43 characters of `[A-Za-z0-9_-]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlSafeTokenGenerator;

impl SecretGenerator for UrlSafeTokenGenerator {
    fn generate(&self) -> String {
        let bytes: [u8; SECRET_KEY_BYTES] = rand::random();
        URL_SAFE_NO_PAD.encode(bytes)
    }
}
