use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::User;

/// 사용자 프로필 응답 DTO
///
/// `hashed_password`는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            created_at,
            updated_at,
            email,
            is_chirpy_red,
            ..
        } = user;

        Self {
            id,
            created_at,
            updated_at,
            email,
            is_chirpy_red,
        }
    }
}

/// 로그인 응답 DTO
///
/// 프로필 필드는 최상위에 펼쳐지고 두 토큰이 함께 반환됩니다.
///
/// ```json
/// {
///   "id": "...", "created_at": "...", "updated_at": "...",
///   "email": "a@example.com", "is_chirpy_red": false,
///   "token": "<jwt>", "refresh_token": "<64 hex>"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}
