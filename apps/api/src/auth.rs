//! JWT issuance and bearer-token extraction.

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{header, request::Parts},
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::candidates::store;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateResponse};
use crate::state::AppState;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Candidate id.
    pub sub: i64,
    pub email: String,
    pub name: String,
    /// Expiry as a unix timestamp; validated on every request.
    pub exp: i64,
}

/// Signs an HS256 token for an authenticated candidate.
pub fn issue_token(candidate: &Candidate, config: &Config) -> Result<String, AppError> {
    let claims = Claims {
        sub: candidate.id,
        email: candidate.email.clone(),
        name: candidate.name.clone(),
        exp: (Utc::now() + Duration::minutes(config.jwt_expire_minutes)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign token: {e}")))
}

/// Extractor that rejects requests without a valid `Authorization: Bearer`
/// token. Add it as a handler argument to protect a route.
pub struct AuthClaims(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(state.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            warn!("Rejected bearer token: {e}");
            AppError::Unauthorized
        })?;

        Ok(AuthClaims(data.claims))
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub candidate: CandidateResponse,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let candidate = store::authenticate(&state.db, &req.email, &req.password)
        .await?
        .ok_or_else(|| {
            warn!("Failed login attempt for {}", req.email);
            AppError::Unauthorized
        })?;

    let token = issue_token(&candidate, &state.config)?;
    info!("Candidate {} logged in", candidate.id);

    Ok(Json(LoginResponse {
        token,
        candidate: CandidateResponse::from(candidate),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expire_minutes: 60,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn test_candidate() -> Candidate {
        Candidate {
            id: 7,
            name: "Joana Silva".to_string(),
            email: "joana@email.com".to_string(),
            password: "secret123".to_string(),
            profession: Some("Backend Developer".to_string()),
            skills: "Java, Spring, SQL".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let token = issue_token(&test_candidate(), &config).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(data.claims.sub, 7);
        assert_eq!(data.claims.email, "joana@email.com");
        assert_eq!(data.claims.name, "Joana Silva");
        assert!(data.claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = issue_token(&test_candidate(), &test_config()).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"another-secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut config = test_config();
        config.jwt_expire_minutes = -5;
        let token = issue_token(&test_candidate(), &config).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
