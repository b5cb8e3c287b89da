//! Chirpy 백엔드
//!
//! 짧은 글(칩)을 올리고 읽는 소셜 서비스의 REST 백엔드입니다.
//! 이메일/비밀번호 계정, 짧은 수명의 JWT 액세스 토큰, 폐기 가능한
//! 리프레시 토큰 세션을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 본인 이메일/비밀번호 변경, Chirpy Red 업그레이드
//! - **세션**: bcrypt 자격 증명 검증, HS256 액세스 토큰(1시간), 리프레시 토큰(60일)
//! - **칩**: 140자 제한과 금칙어 치환, 작성자/정렬 필터 조회, 작성자 본인 삭제
//! - **웹훅**: 결제 제공자 이벤트 수신 (`ApiKey` 인증)
//! - **관리자**: 방문 지표, 개발 환경 초기화
//!
//! # Architecture
//!
//! ```text
//! routes (/api, /admin, /app)
//!   └─ handlers ── AuthMiddleware 게이트, HitCounter
//!        └─ services ── SessionService, UserService, ChirpService, PolkaWebhookService, AdminService
//!             └─ repositories ── UserStore / RefreshTokenStore / ChirpStore
//!                  └─ PostgreSQL (sqlx 마이그레이션 내장)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use chirpy_backend::services::auth::SessionService;
//!
//! let session = SessionService::instance();
//! let login = session.login("walt@breakingbad.com", "123456").await?;
//! println!("access token: {}", login.token);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
