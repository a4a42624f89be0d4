//! Argon2id hashing with an explicit work factor.
//!
//! Both operations are CPU-bound and run on tokio's blocking pool.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use core_config::hashing::HashingConfig;

use crate::error::{UserError, UserResult};

#[derive(Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    pub fn new(config: HashingConfig) -> UserResult<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| UserError::PasswordHash(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Salted PHC string for `password`
    pub async fn hash(&self, password: String) -> UserResult<String> {
        let argon2 = self.argon2();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(UserError::from)
        })
        .await
        .map_err(|e| UserError::Internal(e.to_string()))?
    }

    /// Constant-time check of `password` against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`; a hash that does not parse is an error.
    /// Parameters are read from the stored hash, so older work factors keep verifying.
    pub async fn verify(&self, password: String, stored_hash: String) -> UserResult<bool> {
        let argon2 = self.argon2();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&stored_hash)?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(UserError::from(e)),
            }
        })
        .await
        .map_err(|e| UserError::Internal(e.to_string()))?
    }
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("memory_kib", &self.params.m_cost())
            .field("iterations", &self.params.t_cost())
            .field("parallelism", &self.params.p_cost())
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn test_hasher() -> CredentialHasher {
    CredentialHasher::new(HashingConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = test_hasher();
        let hash = hasher.hash("pw1".to_string()).await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("pw1".to_string(), hash.clone()).await.unwrap());
        assert!(!hasher.verify("pw2".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = test_hasher();
        let first = hasher.hash("same".to_string()).await.unwrap();
        let second = hasher.hash("same".to_string()).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_hash_records_configured_work_factor() {
        let hasher = test_hasher();
        let hash = hasher.hash("pw".to_string()).await.unwrap();

        assert!(hash.contains("m=1024,t=1,p=1"));
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = test_hasher();
        let result = hasher
            .verify("pw".to_string(), "not-a-phc-string".to_string())
            .await;

        assert!(matches!(result, Err(UserError::PasswordHash(_))));
    }

    #[test]
    fn test_rejects_impossible_params() {
        let result = CredentialHasher::new(HashingConfig {
            memory_kib: 1,
            iterations: 1,
            parallelism: 1,
        });
        assert!(matches!(result, Err(UserError::PasswordHash(_))));
    }
}
