//! # Refresh Token Entity
//!
//! 재인증 없이 새 액세스 토큰을 얻기 위한 불투명(opaque) 토큰입니다.
//!
//! ## 생명주기
//!
//! ```text
//! 로그인 성공 ──► 생성 (revoked_at = NULL, expires_at = now + 60d)
//!                  │
//!                  ├──► 폐기 (revoked_at 최초 1회만 설정, 행은 삭제되지 않음)
//!                  └──► 만료 (expires_at 경과)
//! ```
//!
//! 토큰은 `revoked_at`이 비어 있고 현재 시각이 `expires_at` 이전일 때만 유효합니다.
//! 리프레시 흐름은 새 액세스 토큰만 발급하며 리프레시 토큰 자체를 교체하거나 연장하지 않습니다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// 저장된 리프레시 토큰
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RefreshToken {
    /// 토큰 문자열 (기본 키)
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 소유 사용자
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// 새 액세스 토큰 발급에 사용할 수 있는지 여부
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.is_revoked() && !self.is_expired(now)
    }
}
