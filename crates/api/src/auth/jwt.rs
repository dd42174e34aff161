//! Access-token verification.
//!
//! Tokens are issued by an external identity provider; this service only
//! verifies them. Two key setups are supported: HS256 with a shared secret
//! and RS256 with the provider's PEM-encoded public key.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Claims read from every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject as issued by the identity provider.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp). Required.
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Granted permission names, e.g. `"post:drinks"`. Absent means none.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Key material used to check token signatures.
#[derive(Debug, Clone)]
pub enum VerificationKey {
    /// HS256 shared secret.
    Secret(String),
    /// RS256 public key in PEM form.
    RsaPublicPem(String),
}

/// Configuration for token verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub key: VerificationKey,
    /// Expected `iss` claim, if any.
    pub issuer: Option<String>,
    /// Expected `aud` claim, if any. Audience is not checked when unset.
    pub audience: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var              | Required          | Default |
    /// |----------------------|-------------------|---------|
    /// | `JWT_ALGORITHM`      | no                | `HS256` |
    /// | `JWT_SECRET`         | **yes** for HS256 | --      |
    /// | `JWT_PUBLIC_KEY_PEM` | **yes** for RS256 | --      |
    /// | `JWT_ISSUER`         | no                | --      |
    /// | `JWT_AUDIENCE`       | no                | --      |
    ///
    /// # Panics
    ///
    /// Panics if the algorithm is unknown or its key variable is missing.
    pub fn from_env() -> Self {
        let algorithm = std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".into());

        let key = match algorithm.to_ascii_uppercase().as_str() {
            "HS256" => {
                let secret = std::env::var("JWT_SECRET")
                    .expect("JWT_SECRET must be set when JWT_ALGORITHM is HS256");
                assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
                VerificationKey::Secret(secret)
            }
            "RS256" => VerificationKey::RsaPublicPem(
                std::env::var("JWT_PUBLIC_KEY_PEM")
                    .expect("JWT_PUBLIC_KEY_PEM must be set when JWT_ALGORITHM is RS256"),
            ),
            other => panic!("Unsupported JWT_ALGORITHM '{other}', expected HS256 or RS256"),
        };

        Self {
            key,
            issuer: non_empty_var("JWT_ISSUER"),
            audience: non_empty_var("JWT_AUDIENCE"),
        }
    }

    /// HS256 configuration without issuer or audience checks.
    pub fn hs256(secret: impl Into<String>) -> Self {
        Self {
            key: VerificationKey::Secret(secret.into()),
            issuer: None,
            audience: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Verifies bearer tokens against a fixed key and claim expectations.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Build a verifier. Fails only if an RS256 PEM cannot be parsed.
    pub fn from_config(config: &JwtConfig) -> Result<Self, jsonwebtoken::errors::Error> {
        let (key, algorithm) = match &config.key {
            VerificationKey::Secret(secret) => {
                (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
            }
            VerificationKey::RsaPublicPem(pem) => {
                (DecodingKey::from_rsa_pem(pem.as_bytes())?, Algorithm::RS256)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["exp"]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self { key, validation })
    }

    /// Check signature and registered claims, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => AuthError::Malformed(
                    "Incorrect claims. Please check the audience and issuer".into(),
                ),
                ErrorKind::InvalidSignature => {
                    AuthError::Malformed("Token signature is invalid".into())
                }
                _ => AuthError::Malformed("Unable to parse authentication token".into()),
            })
    }
}
