//! # 리프레시 토큰 리포지토리
//!
//! `refresh_tokens` 테이블을 다룹니다. 토큰 문자열이 기본 키이며,
//! 폐기되거나 만료된 행도 삭제하지 않고 남겨 둡니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    core::registry::ServiceLocator,
    db::Database,
    domain::entities::tokens::RefreshToken,
    errors::PersistenceError,
};

/// 리프레시 토큰 저장소 추상화
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 새 토큰 행을 삽입합니다. 기본 키 충돌은 `Constraint`입니다.
    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshToken, PersistenceError>;

    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, PersistenceError>;

    /// `revoked_at`이 비어 있을 때만 현재 시각으로 설정합니다.
    ///
    /// 이번 호출로 실제로 폐기되었으면 `true`, 이미 폐기되었거나 없는 토큰이면 `false`입니다.
    async fn revoke_refresh_token(&self, token: &str) -> Result<bool, PersistenceError>;
}

/// PostgreSQL 기반 리프레시 토큰 리포지토리
pub struct RefreshTokenRepository {
    db: Arc<Database>,
}

static REFRESH_TOKEN_REPOSITORY_INSTANCE: OnceCell<Arc<RefreshTokenRepository>> = OnceCell::new();

impl RefreshTokenRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn instance() -> Arc<Self> {
        REFRESH_TOKEN_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    async fn create_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshToken, PersistenceError> {
        let row = sqlx::query_as::<_, RefreshToken>(
            "INSERT INTO refresh_tokens (token, user_id, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(self.db.pool())
        .await?;
        Ok(row)
    }

    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, PersistenceError> {
        let row = sqlx::query_as::<_, RefreshToken>("SELECT * FROM refresh_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row)
    }

    async fn revoke_refresh_token(&self, token: &str) -> Result<bool, PersistenceError> {
        let result = sqlx::query(
            "UPDATE refresh_tokens \
             SET revoked_at = now(), updated_at = now() \
             WHERE token = $1 AND revoked_at IS NULL",
        )
        .bind(token)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn refresh_token_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(RefreshTokenRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "refresh_token_repository",
        constructor: refresh_token_repository_constructor,
    }
}
