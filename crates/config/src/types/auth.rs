//! Access key configuration.
//!
//! Responsibilities:
//! - Hold the admin key (required for every management call) and the optional
//!   query key (read-only calls).
//! - Decide which key a call uses based on its `needs_admin` flag.
//!
//! Invariants:
//! - Keys are `SecretString`; `Debug` output is redacted.
//! - A missing query key falls back to the admin key.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing `Option<SecretString>` as optional strings.
pub(crate) mod opt_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Access keys for the search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Admin key, used for every call that creates, reads or deletes configuration.
    #[serde(with = "secret_string")]
    pub admin_key: SecretString,
    /// Query key, used for read-only calls when present.
    #[serde(default, with = "opt_secret_string")]
    pub query_key: Option<SecretString>,
}

impl AuthConfig {
    /// Create an auth config with only an admin key.
    pub fn new(admin_key: SecretString) -> Self {
        Self {
            admin_key,
            query_key: None,
        }
    }

    /// Select the key for a call.
    pub fn key_for(&self, needs_admin: bool) -> &SecretString {
        if needs_admin {
            &self.admin_key
        } else {
            self.query_key.as_ref().unwrap_or(&self.admin_key)
        }
    }
}
