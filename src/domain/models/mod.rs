//! 도메인 모델 모듈
//!
//! 영속되지 않는 값 타입들입니다.
//!
//! - [`auth`] - 인증된 요청 주체
//! - [`token`] - 액세스 토큰 클레임

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
