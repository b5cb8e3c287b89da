//! 인증 및 세션 서비스 모듈
//!
//! # 구성
//!
//! - [`password_service`] - bcrypt 해싱/검증
//! - [`token_service`] - HS256 액세스 토큰 발급/검증, 보호된 엔드포인트 게이트
//! - [`refresh_token_service`] - 불투명 리프레시 토큰 생성/등록/조회/폐기
//! - [`bearer`] - `Authorization` 헤더 파싱
//! - [`session_service`] - 로그인, 리프레시, 폐기, 자격 증명 변경
//!
//! # Security
//!
//! - 원문 비밀번호와 토큰 문자열은 로그에 남기지 않습니다.
//! - 인증 실패의 세부 원인은 클라이언트에게 구분되지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::SessionService;
//!
//! let session = SessionService::instance();
//! let login = session.login("a@example.com", "pw123").await?;
//! let refreshed = session.refresh(&login.refresh_token).await?;
//! ```

pub mod bearer;
pub mod password_service;
pub mod token_service;
pub mod refresh_token_service;
pub mod session_service;

pub use bearer::*;
pub use password_service::*;
pub use token_service::*;
pub use refresh_token_service::*;
pub use session_service::*;
