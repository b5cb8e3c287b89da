//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `OnceCell` 싱글톤(`instance()`)과 `inventory` 등록을 가지며,
//! 저장소는 trait 객체로 주입받습니다. 테스트는 `new(...)`로 인메모리 저장소를 주입합니다.
//!
//! # Features
//!
//! - 회원가입, 로그인, 토큰 리프레시/폐기, 자격 증명 변경
//! - 게시글 작성/조회/삭제와 금칙어 치환
//! - 결제 웹훅을 통한 프리미엄 업그레이드
//! - 방문 카운터와 개발 환경 초기화
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::SessionService, chirps::ChirpService};
//!
//! let session = SessionService::instance();
//! let chirps = ChirpService::instance();
//! ```

pub mod auth;
pub mod users;
pub mod chirps;
pub mod webhooks;
pub mod admin;
