use crate::{env_parse, ConfigError, FromEnv};

/// Argon2id work factor used for stored credentials.
///
/// Defaults follow the OWASP minimum recommendation for Argon2id
/// (19 MiB, 2 iterations, 1 lane).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl HashingConfig {
    pub const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
    pub const DEFAULT_ITERATIONS: u32 = 2;
    pub const DEFAULT_PARALLELISM: u32 = 1;

    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, ConfigError> {
        let config = Self {
            memory_kib,
            iterations,
            parallelism,
        };
        config.validate()?;
        Ok(config)
    }

    /// Argon2 requires at least one pass, one lane and 8 KiB of memory per lane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid {
                key: "PASSWORD_HASH_ITERATIONS".to_string(),
                details: "must be at least 1".to_string(),
            });
        }
        if self.parallelism == 0 {
            return Err(ConfigError::Invalid {
                key: "PASSWORD_HASH_PARALLELISM".to_string(),
                details: "must be at least 1".to_string(),
            });
        }
        if self.memory_kib < 8 * self.parallelism {
            return Err(ConfigError::Invalid {
                key: "PASSWORD_HASH_MEMORY_KIB".to_string(),
                details: format!(
                    "must be at least {} KiB for parallelism {}",
                    8 * self.parallelism,
                    self.parallelism
                ),
            });
        }
        Ok(())
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: Self::DEFAULT_MEMORY_KIB,
            iterations: Self::DEFAULT_ITERATIONS,
            parallelism: Self::DEFAULT_PARALLELISM,
        }
    }
}

impl FromEnv for HashingConfig {
    /// Reads PASSWORD_HASH_MEMORY_KIB, PASSWORD_HASH_ITERATIONS and
    /// PASSWORD_HASH_PARALLELISM, each falling back to its default.
    fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            env_parse("PASSWORD_HASH_MEMORY_KIB", Self::DEFAULT_MEMORY_KIB)?,
            env_parse("PASSWORD_HASH_ITERATIONS", Self::DEFAULT_ITERATIONS)?,
            env_parse("PASSWORD_HASH_PARALLELISM", Self::DEFAULT_PARALLELISM)?,
        )
    }
}
