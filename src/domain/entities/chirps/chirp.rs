use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// 게시글 엔티티 (`chirps` 테이블)
#[derive(Debug, Clone, FromRow)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    /// 작성자
    pub user_id: Uuid,
}

impl Chirp {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
