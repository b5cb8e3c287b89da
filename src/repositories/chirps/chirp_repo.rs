//! 게시글 리포지토리

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    core::registry::ServiceLocator,
    db::Database,
    domain::{dto::chirps::SortOrder, entities::chirps::Chirp},
    errors::PersistenceError,
};

/// 게시글 저장소 추상화
#[async_trait]
pub trait ChirpStore: Send + Sync {
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, PersistenceError>;

    async fn find_chirp_by_id(&self, id: Uuid) -> Result<Option<Chirp>, PersistenceError>;

    /// `created_at` 기준으로 정렬된 목록. `author_id`가 있으면 해당 작성자만 반환합니다.
    async fn list_chirps(&self, author_id: Option<Uuid>, sort: SortOrder) -> Result<Vec<Chirp>, PersistenceError>;

    /// 삭제된 행이 있었는지 여부를 반환합니다.
    async fn delete_chirp(&self, id: Uuid) -> Result<bool, PersistenceError>;
}

pub struct ChirpRepository {
    db: Arc<Database>,
}

static CHIRP_REPOSITORY_INSTANCE: OnceCell<Arc<ChirpRepository>> = OnceCell::new();

impl ChirpRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn instance() -> Arc<Self> {
        CHIRP_REPOSITORY_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }
}

#[async_trait]
impl ChirpStore for ChirpRepository {
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, PersistenceError> {
        let chirp = sqlx::query_as::<_, Chirp>(
            "INSERT INTO chirps (body, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(body)
        .bind(user_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(chirp)
    }

    async fn find_chirp_by_id(&self, id: Uuid) -> Result<Option<Chirp>, PersistenceError> {
        let chirp = sqlx::query_as::<_, Chirp>("SELECT * FROM chirps WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(chirp)
    }

    async fn list_chirps(&self, author_id: Option<Uuid>, sort: SortOrder) -> Result<Vec<Chirp>, PersistenceError> {
        // 정렬 방향은 열거형에서 온 고정 문자열이므로 바인딩 대상이 아님
        let sql = format!(
            "SELECT * FROM chirps \
             WHERE ($1::uuid IS NULL OR user_id = $1) \
             ORDER BY created_at {}, id {}",
            sort.as_sql(),
            sort.as_sql()
        );

        let chirps = sqlx::query_as::<_, Chirp>(&sql)
            .bind(author_id)
            .fetch_all(self.db.pool())
            .await?;
        Ok(chirps)
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool, PersistenceError> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn chirp_repository_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(ChirpRepository::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::RepositoryRegistration {
        name: "chirp_repository",
        constructor: chirp_repository_constructor,
    }
}
