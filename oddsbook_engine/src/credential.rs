//! The admin credential check.
//!
//! Every mutating catalog operation goes through this one check rather than comparing the secret
//! at each boundary handler.

use obk_common::Secret;
use sha2::{Digest, Sha256};

/// Validates a presented admin credential against the configured shared secret.
///
/// The two values are compared via their SHA-256 digests. The digests have a fixed length and are
/// unpredictable, so the comparison cost does not depend on where the inputs first differ.
#[derive(Clone, Debug)]
pub struct CredentialCheck {
    secret: Secret<String>,
}

impl CredentialCheck {
    pub fn new(secret: Secret<String>) -> Self {
        Self { secret }
    }

    /// A missing credential is a failed verification, not an error.
    pub fn verify(&self, presented: Option<&str>) -> bool {
        let Some(presented) = presented else {
            return false;
        };
        let expected = Sha256::digest(self.secret.reveal().as_bytes());
        let given = Sha256::digest(presented.as_bytes());
        expected == given
    }
}
