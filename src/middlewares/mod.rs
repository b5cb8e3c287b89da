//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 실패 시 핸들러 호출 없이 401
//!
//! ### 2. 방문 카운터 (HitCounter)
//! - `/app` 스코프 요청 수를 `AdminService`에 기록
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::{AuthMiddleware, HitCounter};
//!
//! App::new()
//!     .service(web::scope("/app").wrap(HitCounter::new()).route("", web::get().to(index)))
//!
//! #[put("/users", wrap = "AuthMiddleware::required()")]
//! async fn update_user(user: AuthenticatedUser) -> HttpResponse { /* ... */ }
//! ```

pub mod auth_middleware;
pub mod metrics_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
pub use metrics_middleware::HitCounter;
