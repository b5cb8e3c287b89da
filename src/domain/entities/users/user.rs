//! # User Entity
//!
//! `users` 테이블의 한 행을 나타냅니다.
//!
//! 비밀번호는 bcrypt 해시 문자열로만 저장되며, 가입 시 생성되고 자격 증명 변경 시
//! 제자리에서 교체됩니다. 해시는 응답 DTO로 절대 변환되지 않습니다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// 사용자 엔티티
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    /// bcrypt 해시 (솔트 내장)
    pub hashed_password: String,
    /// 프리미엄(Chirpy Red) 구독 여부
    pub is_chirpy_red: bool,
}

/// 로그인 검증에 필요한 최소 정보
#[derive(Debug, Clone, FromRow)]
pub struct UserCredential {
    pub id: Uuid,
    pub hashed_password: String,
}

impl User {
    pub fn credential(&self) -> UserCredential {
        UserCredential {
            id: self.id,
            hashed_password: self.hashed_password.clone(),
        }
    }
}
