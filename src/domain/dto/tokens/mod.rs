//! 토큰 흐름 DTO
//!
//! `/api/refresh`와 `/api/revoke`는 요청 본문 없이 `Authorization: Bearer` 헤더만
//! 사용하므로 요청 DTO가 없습니다.

pub mod response;

pub use response::*;
