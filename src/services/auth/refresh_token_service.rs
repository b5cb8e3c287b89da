//! 리프레시 토큰 관리 서비스
//!
//! 리프레시 토큰은 서명되지 않은 불투명 문자열(256비트 난수, 소문자 hex 64자)이며
//! 유효성은 전적으로 저장된 행에서 판단합니다.
//!
//! - 생성: OS CSPRNG에서 32바이트
//! - 등록: `expires_at = now + 60일`, `revoked_at = NULL`
//! - 폐기: 최초 폐기 시각만 기록, 이후 호출은 성공하는 no-op
//! - 교체/연장 없음

use std::sync::Arc;

use chrono::{Duration, Utc};
use once_cell::sync::OnceCell;
use rand::{rngs::OsRng, RngCore};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    core::registry::ServiceLocator,
    domain::entities::tokens::RefreshToken,
    errors::{AuthError, PersistenceError},
    repositories::tokens::{RefreshTokenRepository, RefreshTokenStore},
};

/// 리프레시 토큰 엔트로피 (바이트)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// 기본 키 충돌 시 새 토큰으로 재시도하는 횟수
const MAX_REGISTER_ATTEMPTS: usize = 3;

/// 새 리프레시 토큰 문자열을 생성합니다.
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::Internal(format!("엔트로피 수집 실패: {}", e)))?;
    Ok(hex::encode(bytes))
}

pub struct RefreshTokenService {
    store: Arc<dyn RefreshTokenStore>,
    lifetime: Duration,
}

static REFRESH_TOKEN_SERVICE_INSTANCE: OnceCell<Arc<RefreshTokenService>> = OnceCell::new();

impl RefreshTokenService {
    pub fn new(store: Arc<dyn RefreshTokenStore>, lifetime: Duration) -> Self {
        Self { store, lifetime }
    }

    pub fn instance() -> Arc<Self> {
        REFRESH_TOKEN_SERVICE_INSTANCE
            .get_or_init(|| {
                let config = ServiceLocator::get::<AppConfig>();
                Arc::new(Self::new(
                    RefreshTokenRepository::instance(),
                    config.jwt.refresh_token_lifetime,
                ))
            })
            .clone()
    }

    /// 주어진 토큰 문자열을 사용자에게 귀속시켜 저장합니다.
    pub async fn register(&self, user_id: Uuid, token: &str) -> Result<RefreshToken, PersistenceError> {
        let expires_at = Utc::now() + self.lifetime;
        self.store.create_refresh_token(token, user_id, expires_at).await
    }

    /// 새 토큰을 생성하고 등록합니다.
    ///
    /// 기본 키 충돌(`Constraint`)은 새 토큰으로 재시도하며, 모두 실패하면 `Internal`입니다.
    pub async fn issue(&self, user_id: Uuid) -> Result<RefreshToken, AuthError> {
        let mut last_error = None;

        for attempt in 1..=MAX_REGISTER_ATTEMPTS {
            let token = generate_refresh_token()?;
            match self.register(user_id, &token).await {
                Ok(row) => return Ok(row),
                Err(PersistenceError::Constraint(detail)) => {
                    log::warn!("리프레시 토큰 등록 충돌 (시도 {}/{}): {}", attempt, MAX_REGISTER_ATTEMPTS, detail);
                    last_error = Some(detail);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AuthError::Internal(format!(
            "리프레시 토큰 등록 실패: {}",
            last_error.unwrap_or_default()
        )))
    }

    /// 저장된 토큰을 조회합니다. 없으면 `Unauthorized`입니다.
    ///
    /// 폐기/만료 여부는 판단하지 않으며 호출자가 [`RefreshToken::is_usable`]로 확인합니다.
    pub async fn lookup(&self, token: &str) -> Result<RefreshToken, AuthError> {
        self.store
            .get_refresh_token(token)
            .await?
            .ok_or(AuthError::Unauthorized)
    }

    /// 토큰을 폐기합니다. 이미 폐기된 토큰이면 최초 폐기 시각을 유지한 채 성공합니다.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        let revoked_now = self.store.revoke_refresh_token(token).await?;
        if !revoked_now {
            log::debug!("이미 폐기된 리프레시 토큰에 대한 폐기 요청");
        }
        Ok(())
    }
}

fn refresh_token_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(RefreshTokenService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "refresh_token_service",
        constructor: refresh_token_service_constructor,
    }
}
