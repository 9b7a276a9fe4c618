//! Static admin credential gate.
//!
//! There is no user table and no session state: every admin request presents
//! HTTP Basic credentials which are checked against the configured pair.
//! Comparison is constant-time so neither content nor length of the presented
//! values short-circuits the check.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::CoreError;

/// The configured admin username/password pair.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Check a presented username/password pair against the configured values.
    ///
    /// Returns the configured identity string on exact (case-sensitive) match.
    /// Both fields are always compared so a wrong username costs the same as a
    /// wrong password.
    pub fn verify(&self, username: &str, password: &str) -> Result<String, CoreError> {
        let user_ok = digest_eq(username, &self.username);
        let pass_ok = digest_eq(password, &self.password);
        if bool::from(user_ok & pass_ok) {
            Ok(self.username.clone())
        } else {
            Err(CoreError::Unauthorized(
                "Incorrect username or password".into(),
            ))
        }
    }
}

/// Constant-time string equality via fixed-width SHA-256 digests.
///
/// Hashing first keeps the comparison width independent of input length, so
/// `ConstantTimeEq` never has to handle unequal slice lengths.
fn digest_eq(presented: &str, expected: &str) -> subtle::Choice {
    let a = Sha256::digest(presented.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.as_slice().ct_eq(b.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn creds() -> AdminCredentials {
        AdminCredentials {
            username: "admin".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn matching_pair_returns_identity() {
        let identity = creds().verify("admin", "hunter2").unwrap();
        assert_eq!(identity, "admin");
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(matches!(
            creds().verify("admin", "hunter3"),
            Err(CoreError::Unauthorized(_))
        ));
    }

    #[test]
    fn wrong_username_is_rejected() {
        assert!(matches!(
            creds().verify("root", "hunter2"),
            Err(CoreError::Unauthorized(_))
        ));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(creds().verify("Admin", "hunter2").is_err());
        assert!(creds().verify("admin", "Hunter2").is_err());
    }

    #[test]
    fn empty_strings_are_rejected() {
        assert!(creds().verify("", "").is_err());
        assert!(creds().verify("admin", "").is_err());
        assert!(creds().verify("", "hunter2").is_err());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        // Prefixes and extensions of the real password must not match.
        assert!(creds().verify("admin", "hunter").is_err());
        assert!(creds().verify("admin", "hunter22").is_err());
    }
}
