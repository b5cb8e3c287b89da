//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반 설정값을 시작 시 한 번 읽어 [`AppConfig`]로 묶고,
//! 이후에는 불변 값으로만 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 서버, 해싱 비용, Rate Limiting
//! - [`auth_config`] - JWT 서명 키, 토큰 수명, 웹훅 API 키
//! - [`app_config`] - 위 설정을 모은 프로세스 전역 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::*;
