use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::chirps::Chirp;

/// 게시글 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}
