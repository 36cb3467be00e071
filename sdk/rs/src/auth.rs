use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};
use std::{fs, path::Path};
use thiserror::Error;

use astarte_config::AstarteService;

/// Lifetime of each generated authentication token.
pub const TOKEN_TTL_SECS: i64 = 300;

/// Claim value granting access to every verb and path of an API.
const ALL_ACCESS_CLAIM: &str = "^.*$::^.*$";

/// Error type for realm key loading.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Failed to read the key file
    #[error("Failed to read realm key file '{path}': {message}")]
    FileReadError {
        /// Path that was attempted
        path: String,
        /// Error message
        message: String,
    },

    /// The PEM content is neither a usable RSA nor EC private key
    #[error("Realm key from {origin} is not a valid RSA or EC private key in PEM format")]
    InvalidPem {
        /// Source description
        origin: String,
    },
}

/// A realm private key, ready to sign short-lived API tokens.
pub struct RealmKey {
    key: EncodingKey,
    algorithm: Algorithm,
}

impl std::fmt::Debug for RealmKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealmKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl RealmKey {
    /// Parses a PEM-encoded RSA or EC private key.
    pub fn from_pem(pem: &[u8], origin: &str) -> Result<Self, KeyError> {
        if let Ok(key) = EncodingKey::from_rsa_pem(pem) {
            return Ok(RealmKey {
                key,
                algorithm: Algorithm::RS256,
            });
        }
        if let Ok(key) = EncodingKey::from_ec_pem(pem) {
            return Ok(RealmKey {
                key,
                algorithm: Algorithm::ES256,
            });
        }
        Err(KeyError::InvalidPem {
            origin: origin.to_string(),
        })
    }

    /// Reads and parses a PEM key file.
    pub fn from_file(path: &Path) -> Result<Self, KeyError> {
        let pem = fs::read(path).map_err(|e| KeyError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_pem(&pem, &path.display().to_string())
    }

    /// Signs a fresh token carrying the authorization claims of the given
    /// services, valid for `ttl_secs` from now.
    pub fn generate_token(
        &self,
        services: &[AstarteService],
        ttl_secs: i64,
    ) -> eyre::Result<String> {
        let now = Utc::now().timestamp();

        let mut claims = Map::new();
        claims.insert("iat".to_string(), json!(now));
        claims.insert("exp".to_string(), json!(now + ttl_secs));
        for service in services {
            claims.insert(service.claim().to_string(), json!([ALL_ACCESS_CLAIM]));
        }

        jsonwebtoken::encode(&Header::new(self.algorithm), &Value::Object(claims), &self.key)
            .map_err(|e| eyre::eyre!("unable to sign authentication token: {e}"))
    }
}
