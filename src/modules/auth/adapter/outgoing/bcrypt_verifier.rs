use tracing::warn;

use crate::auth::application::ports::PasswordVerifier;

#[derive(Debug, Clone, Default)]
pub struct BcryptVerifier;

impl PasswordVerifier for BcryptVerifier {
    fn verify(&self, candidate: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(candidate, stored_hash) {
            Ok(matched) => matched,
            Err(e) => {
                // A malformed stored hash is a config problem; treat as no match.
                warn!("bcrypt verification failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_password() {
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        assert!(BcryptVerifier.verify("hunter2", &hash));
    }

    #[test]
    fn rejects_wrong_password() {
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        assert!(!BcryptVerifier.verify("letmein", &hash));
    }

    #[test]
    fn malformed_hash_is_a_failed_match() {
        assert!(!BcryptVerifier.verify("hunter2", "not-a-bcrypt-hash"));
    }
}
