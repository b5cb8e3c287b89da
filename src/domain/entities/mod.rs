//! # Domain Entities
//!
//! 데이터베이스 테이블과 1:1로 대응하는 영속 엔티티입니다.
//! 모든 엔티티는 `sqlx::FromRow`로 직접 매핑됩니다.
//!
//! - [`users::user::User`] - `users` 테이블
//! - [`chirps::chirp::Chirp`] - `chirps` 테이블
//! - [`tokens::refresh_token::RefreshToken`] - `refresh_tokens` 테이블
//!
//! 액세스 토큰은 저장되지 않으므로 엔티티가 없습니다.

pub mod users;
pub mod chirps;
pub mod tokens;
