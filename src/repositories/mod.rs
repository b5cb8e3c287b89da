//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 하위 모듈은 저장소 trait(`UserStore`, `RefreshTokenStore`, `ChirpStore`)과
//! 그 PostgreSQL 구현을 함께 정의합니다. 서비스는 trait 객체에만 의존하므로
//! 테스트에서는 인메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::instance();
//! let credential = user_repo.find_credential_by_email("user@example.com").await?;
//! ```
//!
//! 모든 실패는 [`PersistenceError`](crate::errors::PersistenceError)로 반환됩니다.

pub mod users;
pub mod tokens;
pub mod chirps;

#[cfg(test)]
pub mod memory;
