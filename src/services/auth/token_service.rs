//! JWT 액세스 토큰 발급/검증 서비스
//!
//! HMAC-SHA256으로 서명된 짧은 수명의 액세스 토큰을 다룹니다.
//! 액세스 토큰은 저장되지 않으며 폐기 상태가 없습니다. 만료될 때까지 유효합니다.
//!
//! ```text
//! Issued ──► Valid ──(exp 경과)──► Expired
//! ```
//!
//! 검증 실패 원인(서명 불일치, 알고리즘 불일치, 발급자 불일치, 만료, 잘못된 `sub`)은
//! 디버그 로그로만 남기고 모두 `AuthError::Unauthorized`로 반환합니다.

use std::sync::Arc;

use actix_web::http::header::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    config::{AppConfig, JwtConfig, TOKEN_ISSUER},
    core::registry::ServiceLocator,
    domain::models::{auth::AuthenticatedUser, token::AccessTokenClaims},
    errors::AuthError,
    services::auth::bearer::extract_bearer_token,
};

/// 액세스 토큰을 발급합니다.
///
/// `lifetime`이 음수이면 이미 만료된 토큰이 만들어집니다.
pub fn make_jwt(user_id: Uuid, secret: &str, lifetime: Duration) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = AccessTokenClaims {
        iss: TOKEN_ISSUER.to_string(),
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("JWT 토큰 생성 실패: {}", e)))
}

/// 액세스 토큰을 검증하고 사용자 ID를 반환합니다.
pub fn validate_jwt(token: &str, secret: &str) -> Result<Uuid, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);
    validation.leeway = 0;

    let data = decode::<AccessTokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        log::debug!("액세스 토큰 검증 실패: {}", e);
        AuthError::Unauthorized
    })?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| {
        log::debug!("액세스 토큰의 sub가 UUID가 아님");
        AuthError::Unauthorized
    })
}

/// JWT 토큰 관리 서비스
pub struct TokenService {
    config: JwtConfig,
}

static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<TokenService>> = OnceCell::new();

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE_INSTANCE
            .get_or_init(|| {
                let config = ServiceLocator::get::<AppConfig>();
                Arc::new(Self::new(config.jwt.clone()))
            })
            .clone()
    }

    /// 설정된 수명(3600초)으로 액세스 토큰을 발급합니다.
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        make_jwt(user_id, &self.config.secret, self.config.access_token_lifetime)
    }

    pub fn validate_access_token(&self, token: &str) -> Result<Uuid, AuthError> {
        validate_jwt(token, &self.config.secret)
    }

    /// 보호된 엔드포인트 게이트: Bearer 헤더 → 토큰 검증 → 요청 주체
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, AuthError> {
        let token = extract_bearer_token(headers)?;
        let user_id = self.validate_access_token(&token)?;
        Ok(AuthenticatedUser { user_id })
    }
}

fn token_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(TokenService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "token_service",
        constructor: token_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderValue, AUTHORIZATION};

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_then_validate_returns_subject() {
        let user_id = Uuid::new_v4();
        let token = make_jwt(user_id, SECRET, Duration::hours(1)).unwrap();

        assert_eq!(validate_jwt(&token, SECRET).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let token = make_jwt(Uuid::new_v4(), SECRET, Duration::hours(1)).unwrap();
        assert_eq!(validate_jwt(&token, "other-secret"), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let token = make_jwt(Uuid::new_v4(), SECRET, Duration::seconds(-1)).unwrap();
        assert_eq!(validate_jwt(&token, SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_tokens_issued_in_same_second_differ() {
        let user_id = Uuid::new_v4();
        let first = make_jwt(user_id, SECRET, Duration::hours(1)).unwrap();
        let second = make_jwt(user_id, SECRET, Duration::hours(1)).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_wrong_issuer_is_unauthorized() {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            iss: "someone-else".to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap();

        assert_eq!(validate_jwt(&token, SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_non_uuid_subject_is_unauthorized() {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: "42".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap();

        assert_eq!(validate_jwt(&token, SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_other_algorithm_is_unauthorized() {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(validate_jwt(&token, SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_garbage_is_unauthorized() {
        assert_eq!(validate_jwt("not.a.jwt", SECRET), Err(AuthError::Unauthorized));
        assert_eq!(validate_jwt("", SECRET), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_authenticate_reads_bearer_header() {
        let service = TokenService::new(JwtConfig::new(SECRET));
        let user_id = Uuid::new_v4();
        let token = service.issue_access_token(user_id).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        assert_eq!(service.authenticate(&headers).unwrap().user_id, user_id);
        assert_eq!(service.authenticate(&HeaderMap::new()), Err(AuthError::Unauthorized));
    }
}
