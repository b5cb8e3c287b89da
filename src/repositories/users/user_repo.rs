//! # 사용자 리포지토리 구현
//!
//! `users` 테이블에 대한 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **유니크 이메일**: 중복 가입은 `PersistenceError::Constraint`로 보고됩니다.
//! - **부분 갱신**: 자격 증명 변경 시 전달된 필드만 `COALESCE`로 교체합니다.
//! - **연쇄 삭제**: `delete_all`은 외래키 `ON DELETE CASCADE`로 게시글과
//!   리프레시 토큰까지 함께 제거합니다.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    core::registry::ServiceLocator,
    db::Database,
    domain::entities::users::{User, UserCredential},
    errors::PersistenceError,
};

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 생성합니다. 이메일이 이미 존재하면 `Constraint`입니다.
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, PersistenceError>;

    /// 로그인 검증에 필요한 (ID, 해시)만 조회합니다.
    async fn find_credential_by_email(&self, email: &str) -> Result<Option<UserCredential>, PersistenceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PersistenceError>;

    /// 전달된 필드만 교체합니다. 사용자가 없으면 `Ok(None)`입니다.
    async fn update_credentials(
        &self,
        id: Uuid,
        email: Option<&str>,
        hashed_password: Option<&str>,
    ) -> Result<Option<User>, PersistenceError>;

    /// 프리미엄 플래그를 설정합니다. 사용자를 찾았는지 여부를 반환합니다.
    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, PersistenceError>;

    /// 모든 사용자를 삭제하고 삭제된 행 수를 반환합니다.
    async fn delete_all(&self) -> Result<u64, PersistenceError>;
}

/// PostgreSQL 기반 사용자 리포지토리
pub struct UserRepository {
    db: Arc<Database>,
}

static USER_REPOSITORY_INSTANCE: OnceCell<Arc<UserRepository>> = OnceCell::new();

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// `Database`가 `ServiceLocator`에 먼저 등록되어 있어야 합니다.
    pub fn instance() -> Arc<Self> {
        USER_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, PersistenceError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, hashed_password) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(self.db.pool())
        .await?;

        log::debug!("사용자 생성 완료: {}", user.id);
        Ok(user)
    }

    async fn find_credential_by_email(&self, email: &str) -> Result<Option<UserCredential>, PersistenceError> {
        let credential = sqlx::query_as::<_, UserCredential>(
            "SELECT id, hashed_password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(credential)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PersistenceError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(user)
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: Option<&str>,
        hashed_password: Option<&str>,
    ) -> Result<Option<User>, PersistenceError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users \
             SET email = COALESCE($2, email), \
                 hashed_password = COALESCE($3, hashed_password), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(email)
        .bind(hashed_password)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(user)
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, PersistenceError> {
        let result = sqlx::query(
            "UPDATE users SET is_chirpy_red = true, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, PersistenceError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }
}

fn user_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "user_repository",
        constructor: user_repository_constructor,
    }
}
